//! Weather tool definition.
//!
//! Fetches current weather for a city from OpenWeatherMap. Without a
//! configured API key the tool serves a demo payload instead of failing,
//! so a missing key never affects server startup or the other tools.

use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::domains::tools::{
    ParamSpec, ParamType, ToolDescriptor, ToolError, ToolHandler, ToolSchema, parse_params,
};

/// OpenWeatherMap current-weather endpoint.
const WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetWeatherParams {
    /// Name of the city to look up.
    pub city: String,

    /// Measurement units: "metric", "imperial", or "standard".
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_units() -> String {
    "metric".to_string()
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Weather tool - current weather for a city via OpenWeatherMap.
pub struct GetWeatherTool {
    config: Arc<Config>,
}

impl GetWeatherTool {
    /// Tool name as registered in the registry.
    pub const NAME: &'static str = "get_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get current weather information for a city. Returns temperature, description, humidity, and pressure. Serves demo data when no API key is configured.";

    /// Build the descriptor for registration.
    pub fn descriptor(config: Arc<Config>) -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::schema(),
            Arc::new(Self { config }),
        )
    }

    fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            ParamSpec::required("city", ParamType::String, "Name of the city"),
            ParamSpec::optional(
                "units",
                ParamType::String,
                "Measurement units: metric (default), imperial, or standard",
            ),
        ])
    }

    /// Fetch live weather data from the API.
    async fn fetch(params: &GetWeatherParams, api_key: &str) -> Result<Value, ToolError> {
        let response = reqwest::Client::new()
            .get(WEATHER_API_URL)
            .query(&[
                ("q", params.city.as_str()),
                ("appid", api_key),
                ("units", params.units.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::execution(format!(
                "weather API returned status {}",
                status
            )));
        }

        let data: Value = response.json().await?;

        Ok(serde_json::json!({
            "city": data.get("name").cloned().unwrap_or(Value::Null),
            "country": data.pointer("/sys/country").cloned().unwrap_or(Value::Null),
            "temperature": data.pointer("/main/temp").cloned().unwrap_or(Value::Null),
            "description": data.pointer("/weather/0/description").cloned().unwrap_or(Value::Null),
            "humidity": data.pointer("/main/humidity").cloned().unwrap_or(Value::Null),
            "pressure": data.pointer("/main/pressure").cloned().unwrap_or(Value::Null),
        }))
    }

    /// Demo payload served when no API key is configured.
    fn demo_payload(city: &str) -> Value {
        serde_json::json!({
            "city": city,
            "temperature": 22,
            "description": "partly cloudy",
            "humidity": 65,
            "pressure": 1013,
            "note": "demo data - set MCP_WEATHER_API_KEY for live results",
        })
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetWeatherTool {
    #[instrument(skip_all)]
    async fn call(&self, arguments: serde_json::Map<String, Value>) -> Result<Value, ToolError> {
        let params: GetWeatherParams = parse_params(arguments)?;

        match self.config.credentials.weather_api_key.as_deref() {
            Some(api_key) => {
                info!("Fetching weather for city: {}", params.city);
                Self::fetch(&params, api_key).await
            }
            None => {
                warn!("No weather API key configured, serving demo data");
                Ok(Self::demo_payload(&params.city))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
