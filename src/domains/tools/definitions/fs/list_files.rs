//! List files tool definition.
//!
//! Lists the files in the workspace root. Entries are returned in directory
//! order, which is not guaranteed to be stable across calls.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolHandler, ToolSchema};

// ============================================================================
// Tool Definition
// ============================================================================

/// List files tool - lists all files in the workspace root.
pub struct ListFilesTool {
    config: Arc<Config>,
}

impl ListFilesTool {
    /// Tool name as registered in the registry.
    pub const NAME: &'static str = "list_files";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all files in the workspace directory with their size and last modification time.";

    /// Build the descriptor for registration.
    pub fn descriptor(config: Arc<Config>) -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            ToolSchema::empty(),
            Arc::new(Self { config }),
        )
    }

    /// Execute the tool logic. Blocking; runs on the blocking pool.
    #[instrument(skip_all)]
    pub fn execute(root: &Path) -> Result<Value, ToolError> {
        let mut files = Vec::new();

        for entry in fs::read_dir(root)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error reading directory entry: {}", e);
                    continue;
                }
            };

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Failed to get metadata for {:?}: {}", entry.file_name(), e);
                    continue;
                }
            };

            if !metadata.is_file() {
                continue;
            }

            let modified = metadata
                .modified()
                .map(|t| DateTime::<Utc>::from(t).to_rfc3339())
                .unwrap_or_default();

            files.push(serde_json::json!({
                "name": entry.file_name().to_string_lossy(),
                "size": metadata.len(),
                "modified": modified,
            }));
        }

        info!("Listed {} files in workspace", files.len());

        Ok(serde_json::json!({
            "files": files,
            "count": files.len(),
            "workspace": root.display().to_string(),
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for ListFilesTool {
    async fn call(&self, _arguments: serde_json::Map<String, Value>) -> Result<Value, ToolError> {
        let root = self.config.workspace.root.clone();

        tokio::task::spawn_blocking(move || Self::execute(&root))
            .await
            .map_err(|e| ToolError::execution(format!("blocking task failed: {}", e)))?
    }
}

// ============================================================================
// Tests
// ============================================================================
