//! Random quote tool definition.
//!
//! Fetches a random quote from quotable.io. Any upstream failure falls back
//! to a built-in quote list, so this tool never produces a failure response.

use serde_json::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, instrument, warn};

use crate::domains::tools::{ToolDescriptor, ToolError, ToolHandler, ToolSchema};

/// Quotable random-quote endpoint.
const QUOTE_API_URL: &str = "https://api.quotable.io/random";

/// Quotes served when the API is unavailable.
const FALLBACK_QUOTES: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
    ),
    (
        "Life is what happens to you while you're busy making other plans.",
        "John Lennon",
    ),
];

// ============================================================================
// Tool Definition
// ============================================================================

/// Random quote tool - fetches an inspirational quote.
pub struct GetRandomQuoteTool;

impl GetRandomQuoteTool {
    /// Tool name as registered in the registry.
    pub const NAME: &'static str = "get_random_quote";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get a random inspirational quote with its author. Falls back to a built-in list when the quote API is unavailable.";

    /// Build the descriptor for registration.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            ToolSchema::empty(),
            Arc::new(Self),
        )
    }

    /// Fetch a quote from the API.
    async fn fetch() -> Result<Value, ToolError> {
        let response = reqwest::Client::new().get(QUOTE_API_URL).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::execution(format!(
                "quote API returned status {}",
                status
            )));
        }

        let data: Value = response.json().await?;

        Ok(serde_json::json!({
            "quote": data.get("content").cloned().unwrap_or(Value::Null),
            "author": data.get("author").cloned().unwrap_or(Value::Null),
            "tags": data.get("tags").cloned().unwrap_or_else(|| Value::Array(Vec::new())),
        }))
    }

    /// Pick a fallback quote from the built-in list.
    fn fallback_quote() -> Value {
        let index = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as usize)
            .unwrap_or(0)
            % FALLBACK_QUOTES.len();
        let (quote, author) = FALLBACK_QUOTES[index];

        serde_json::json!({
            "quote": quote,
            "author": author,
            "note": "fallback quote - API unavailable",
        })
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetRandomQuoteTool {
    #[instrument(skip_all)]
    async fn call(&self, _arguments: serde_json::Map<String, Value>) -> Result<Value, ToolError> {
        match Self::fetch().await {
            Ok(result) => {
                info!("Fetched quote from API");
                Ok(result)
            }
            Err(e) => {
                warn!("Quote API unavailable ({}), using fallback", e);
                Ok(Self::fallback_quote())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
