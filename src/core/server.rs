//! Tool server implementation and lifecycle management.
//!
//! This module contains the main server handler that coordinates the tool
//! dispatcher and the resource and prompt services behind one entry point
//! used by the HTTP transport.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The registry is built once by `build_tool_registry` during construction;
//! registration happens single-threaded and the registry is read-only
//! afterwards, so concurrent request handling needs no locking.
//! **Adding a new tool does NOT require modifying this file!**

use std::fs;
use std::sync::Arc;

use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::info;

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::prompts::{PromptError, PromptMetadata, PromptResult, PromptService};
use crate::domains::resources::{ResourceError, ResourceMetadata, ResourceReadResult, ResourceService};
use crate::domains::tools::{Dispatcher, ToolRequest, ToolResponse, build_tool_registry};

/// The main tool server.
///
/// Owns the dispatcher (with its read-only registry) and the domain services.
/// Cheap to clone; all state is behind `Arc`.
#[derive(Clone)]
pub struct ToolServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the startup-built tool registry.
    dispatcher: Dispatcher,

    /// Service for handling resource reads.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt rendering.
    prompt_service: Arc<PromptService>,
}

impl ToolServer {
    /// Create a new tool server with the given configuration.
    ///
    /// Creates the workspace root and builds the tool registry. Both are
    /// startup-critical: a missing workspace or a duplicate tool name aborts
    /// initialization.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        fs::create_dir_all(&config.workspace.root).map_err(|e| {
            Error::config(format!(
                "cannot create workspace root '{}': {}",
                config.workspace.root.display(),
                e
            ))
        })?;
        info!("Workspace root: {}", config.workspace.root.display());

        let registry = build_tool_registry(config.clone())?;

        Ok(Self {
            dispatcher: Dispatcher::new(Arc::new(registry)),
            resource_service: Arc::new(ResourceService::new(config.clone())),
            prompt_service: Arc::new(PromptService::new()),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.dispatcher.registry().len()
    }

    // ========================================================================
    // Transport Support Methods
    // ========================================================================

    /// List all available tools with their schemas.
    pub fn list_tools(&self) -> Vec<Value> {
        self.dispatcher
            .registry()
            .descriptors()
            .iter()
            .map(|descriptor| descriptor.describe())
            .collect()
    }

    /// Dispatch a tool call.
    pub async fn call_tool(&self, name: &str, arguments: Map<String, Value>) -> ToolResponse {
        self.dispatcher
            .handle(ToolRequest::new(name, arguments))
            .await
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<ResourceMetadata> {
        self.resource_service.list_resources().await
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> std::result::Result<ResourceReadResult, ResourceError> {
        self.resource_service.read_resource(uri).await
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<PromptMetadata> {
        self.prompt_service.list_prompts().await
    }

    /// Render a prompt by name.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> std::result::Result<PromptResult, PromptError> {
        self.prompt_service.get_prompt(name, arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ErrorKind;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_server() -> (ToolServer, TempDir) {
        let workspace = TempDir::new().unwrap();
        let mut config = Config::default();
        config.workspace.root = workspace.path().to_path_buf();
        (ToolServer::new(config).unwrap(), workspace)
    }

    #[test]
    fn test_server_creation_registers_tools() {
        let (server, _workspace) = test_server();
        assert_eq!(server.tool_count(), 8);
        assert!(!server.list_tools().is_empty());
    }

    #[test]
    fn test_server_creates_workspace_root() {
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("nested/workspace");

        let mut config = Config::default();
        config.workspace.root = root.clone();
        let _server = ToolServer::new(config).unwrap();

        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn test_file_tool_round_trip() {
        let (server, _workspace) = test_server();

        let create_args = json!({"filename": "a.txt", "content": "hi"})
            .as_object()
            .cloned()
            .unwrap();
        assert!(server.call_tool("create_file", create_args).await.is_success());

        let read_args = json!({"filename": "a.txt"}).as_object().cloned().unwrap();
        match server.call_tool("read_file", read_args.clone()).await {
            ToolResponse::Success(result) => assert_eq!(result["content"], "hi"),
            ToolResponse::Failure { message, .. } => panic!("read failed: {}", message),
        }

        let delete_args = json!({"filename": "a.txt"}).as_object().cloned().unwrap();
        assert!(server.call_tool("delete_file", delete_args).await.is_success());

        match server.call_tool("read_file", read_args).await {
            ToolResponse::Failure { kind, .. } => assert_eq!(kind, ErrorKind::NotFound),
            ToolResponse::Success(_) => panic!("expected read of deleted file to fail"),
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_is_not_found() {
        let (server, _workspace) = test_server();

        match server.call_tool("nope", Map::new()).await {
            ToolResponse::Failure { kind, .. } => assert_eq!(kind, ErrorKind::NotFound),
            ToolResponse::Success(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_list_files_after_creates() {
        let (server, _workspace) = test_server();

        for name in ["a.txt", "b.txt"] {
            let args = json!({"filename": name, "content": "x"})
                .as_object()
                .cloned()
                .unwrap();
            assert!(server.call_tool("create_file", args).await.is_success());
        }

        match server.call_tool("list_files", Map::new()).await {
            ToolResponse::Success(result) => {
                let names: Vec<_> = result["files"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|f| f["name"].as_str().unwrap().to_string())
                    .collect();
                assert_eq!(names.iter().filter(|n| n.as_str() == "a.txt").count(), 1);
                assert_eq!(names.iter().filter(|n| n.as_str() == "b.txt").count(), 1);
            }
            ToolResponse::Failure { message, .. } => panic!("list failed: {}", message),
        }
    }

    #[tokio::test]
    async fn test_resources_reachable_through_server() {
        let (server, _workspace) = test_server();

        assert!(server.read_resource("server://info").await.is_ok());
        assert!(server.read_resource("missing://thing").await.is_err());
    }

    #[tokio::test]
    async fn test_prompts_reachable_through_server() {
        let (server, _workspace) = test_server();

        assert_eq!(server.list_prompts().await.len(), 2);
        assert!(server.get_prompt("nonexistent", None).await.is_err());
    }
}
