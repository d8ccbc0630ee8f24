//! Read file tool definition.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::core::workspace::resolve_workspace_path;
use crate::domains::tools::{
    ParamSpec, ParamType, ToolDescriptor, ToolError, ToolHandler, ToolSchema, parse_params,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the read file tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadFileParams {
    /// Name of the file to read, relative to the workspace root.
    pub filename: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Read file tool - returns the content of a workspace file.
pub struct ReadFileTool {
    config: Arc<Config>,
}

impl ReadFileTool {
    /// Tool name as registered in the registry.
    pub const NAME: &'static str = "read_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Read the content of a file from the workspace. Returns the content, size, and last modification time.";

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
        ToolSchema::new(vec![ParamSpec::required(
            "filename",
            ParamType::String,
            "Name of the file to read",
        )])
    }

    /// Execute the tool logic. Blocking; runs on the blocking pool.
    #[instrument(skip_all, fields(filename = %params.filename))]
    pub fn execute(params: &ReadFileParams, root: &Path) -> Result<Value, ToolError> {
        let path = resolve_workspace_path(root, &params.filename)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        if !path.is_file() {
            return Err(ToolError::not_found(format!(
                "file '{}' does not exist",
                params.filename
            )));
        }

        let content = fs::read_to_string(&path)?;
        let modified = fs::metadata(&path)?
            .modified()
            .map(|t| DateTime::<Utc>::from(t).to_rfc3339())
            .unwrap_or_default();

        info!("Read file '{}' ({} bytes)", params.filename, content.len());

        Ok(serde_json::json!({
            "filename": params.filename,
            "content": content,
            "size": content.len(),
            "modified": modified,
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for ReadFileTool {
    async fn call(&self, arguments: serde_json::Map<String, Value>) -> Result<Value, ToolError> {
        let params: ReadFileParams = parse_params(arguments)?;
        let root = self.config.workspace.root.clone();

        tokio::task::spawn_blocking(move || Self::execute(&params, &root))
            .await
            .map_err(|e| ToolError::execution(format!("blocking task failed: {}", e)))?
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file() {
        let workspace = TempDir::new().unwrap();
        fs::write(workspace.path().join("a.txt"), "hi").unwrap();

        let params = ReadFileParams {
            filename: "a.txt".to_string(),
        };
        let result = ReadFileTool::execute(&params, workspace.path()).unwrap();

        assert_eq!(result["content"], "hi");
        assert_eq!(result["size"], 2);
        assert!(result["modified"].as_str().is_some());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let workspace = TempDir::new().unwrap();
        let params = ReadFileParams {
            filename: "missing.txt".to_string(),
        };

        let err = ReadFileTool::execute(&params, workspace.path()).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[test]
    fn test_read_directory_is_not_found() {
        let workspace = TempDir::new().unwrap();
        fs::create_dir(workspace.path().join("subdir")).unwrap();

        let params = ReadFileParams {
            filename: "subdir".to_string(),
        };
        let err = ReadFileTool::execute(&params, workspace.path()).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[test]
    fn test_read_traversal_rejected() {
        let workspace = TempDir::new().unwrap();
        let params = ReadFileParams {
            filename: "../../etc/passwd".to_string(),
        };

        let err = ReadFileTool::execute(&params, workspace.path()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
