//! Create file tool definition.
//!
//! Writes a new file into the workspace. Refuses to overwrite an existing
//! file; the exists-check and the write are not atomic, so racing creators
//! are last-writer-wins (see DESIGN.md).

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

/// Parameters for the create file tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFileParams {
    /// Name of the file to create, relative to the workspace root.
    pub filename: String,

    /// Content to write to the file.
    pub content: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create file tool - writes a new file into the workspace.
pub struct CreateFileTool {
    config: Arc<Config>,
}

impl CreateFileTool {
    /// Tool name as registered in the registry.
    pub const NAME: &'static str = "create_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a new file in the workspace with the given content. Fails if the file already exists.";

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
            ParamSpec::required("filename", ParamType::String, "Name of the file to create"),
            ParamSpec::required("content", ParamType::String, "Content to write to the file"),
        ])
    }

    /// Execute the tool logic. Blocking; runs on the blocking pool.
    #[instrument(skip_all, fields(filename = %params.filename))]
    pub fn execute(params: &CreateFileParams, root: &Path) -> Result<Value, ToolError> {
        let path = resolve_workspace_path(root, &params.filename)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        if path.exists() {
            return Err(ToolError::execution(format!(
                "file '{}' already exists",
                params.filename
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &params.content)?;

        info!("Created file '{}' ({} bytes)", params.filename, params.content.len());

        Ok(serde_json::json!({
            "message": format!("file '{}' created", params.filename),
            "path": path.display().to_string(),
            "size": params.content.len(),
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for CreateFileTool {
    async fn call(&self, arguments: serde_json::Map<String, Value>) -> Result<Value, ToolError> {
        let params: CreateFileParams = parse_params(arguments)?;
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
    fn test_create_file() {
        let workspace = TempDir::new().unwrap();
        let params = CreateFileParams {
            filename: "a.txt".to_string(),
            content: "hi".to_string(),
        };

        let result = CreateFileTool::execute(&params, workspace.path()).unwrap();
        assert_eq!(result["size"], 2);
        assert_eq!(
            fs::read_to_string(workspace.path().join("a.txt")).unwrap(),
            "hi"
        );
    }

    #[test]
    fn test_create_file_in_subdirectory() {
        let workspace = TempDir::new().unwrap();
        let params = CreateFileParams {
            filename: "notes/todo.txt".to_string(),
            content: "buy milk".to_string(),
        };

        CreateFileTool::execute(&params, workspace.path()).unwrap();
        assert!(workspace.path().join("notes/todo.txt").is_file());
    }

    #[test]
    fn test_create_existing_file_fails() {
        let workspace = TempDir::new().unwrap();
        fs::write(workspace.path().join("a.txt"), "old").unwrap();

        let params = CreateFileParams {
            filename: "a.txt".to_string(),
            content: "new".to_string(),
        };

        let err = CreateFileTool::execute(&params, workspace.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        // Existing content untouched
        assert_eq!(
            fs::read_to_string(workspace.path().join("a.txt")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_create_file_traversal_rejected() {
        let workspace = TempDir::new().unwrap();
        let params = CreateFileParams {
            filename: "../escape.txt".to_string(),
            content: "nope".to_string(),
        };

        let err = CreateFileTool::execute(&params, workspace.path()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_create_file_handler() {
        let workspace = TempDir::new().unwrap();
        let mut config = Config::default();
        config.workspace.root = workspace.path().to_path_buf();

        let descriptor = CreateFileTool::descriptor(Arc::new(config));
        let args = serde_json::json!({"filename": "b.txt", "content": "hello"})
            .as_object()
            .cloned()
            .unwrap();

        let result = descriptor.invoke(args).await.unwrap();
        assert_eq!(result["size"], 5);
        assert!(workspace.path().join("b.txt").is_file());
    }
}
