//! Delete file tool definition.

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

/// Parameters for the delete file tool.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFileParams {
    /// Name of the file to delete, relative to the workspace root.
    pub filename: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Delete file tool - removes a file from the workspace.
pub struct DeleteFileTool {
    config: Arc<Config>,
}

impl DeleteFileTool {
    /// Tool name as registered in the registry.
    pub const NAME: &'static str = "delete_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a file from the workspace.";

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
            "Name of the file to delete",
        )])
    }

    /// Execute the tool logic. Blocking; runs on the blocking pool.
    #[instrument(skip_all, fields(filename = %params.filename))]
    pub fn execute(params: &DeleteFileParams, root: &Path) -> Result<Value, ToolError> {
        let path = resolve_workspace_path(root, &params.filename)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        if !path.exists() {
            return Err(ToolError::not_found(format!(
                "file '{}' does not exist",
                params.filename
            )));
        }

        if !path.is_file() {
            return Err(ToolError::execution(format!(
                "'{}' is not a file",
                params.filename
            )));
        }

        fs::remove_file(&path)?;

        info!("Deleted file '{}'", params.filename);

        Ok(serde_json::json!({
            "message": format!("file '{}' deleted", params.filename),
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for DeleteFileTool {
    async fn call(&self, arguments: serde_json::Map<String, Value>) -> Result<Value, ToolError> {
        let params: DeleteFileParams = parse_params(arguments)?;
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
    fn test_delete_file() {
        let workspace = TempDir::new().unwrap();
        let file = workspace.path().join("a.txt");
        fs::write(&file, "hi").unwrap();

        let params = DeleteFileParams {
            filename: "a.txt".to_string(),
        };
        DeleteFileTool::execute(&params, workspace.path()).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn test_delete_missing_file_is_not_found() {
        let workspace = TempDir::new().unwrap();
        let params = DeleteFileParams {
            filename: "missing.txt".to_string(),
        };

        let err = DeleteFileTool::execute(&params, workspace.path()).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[test]
    fn test_delete_directory_rejected() {
        let workspace = TempDir::new().unwrap();
        fs::create_dir(workspace.path().join("subdir")).unwrap();

        let params = DeleteFileParams {
            filename: "subdir".to_string(),
        };
        let err = DeleteFileTool::execute(&params, workspace.path()).unwrap_err();
        assert!(err.to_string().contains("not a file"));
        assert!(workspace.path().join("subdir").exists());
    }

    #[test]
    fn test_delete_traversal_rejected() {
        let workspace = TempDir::new().unwrap();
        let params = DeleteFileParams {
            filename: "../escape.txt".to_string(),
        };

        let err = DeleteFileTool::execute(&params, workspace.path()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
