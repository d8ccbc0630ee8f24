//! Tool Registry - central registration and lookup for all tools.
//!
//! The registry is built once at startup by [`build_tool_registry`] and is
//! read-only afterwards; the dispatcher holds it behind an `Arc` and resolves
//! tool names against it on every request. A duplicate registration is a
//! startup-time fatal error.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::core::config::Config;

use super::definitions::{
    CheckCodeStyleTool, CreateFileTool, DeleteFileTool, GetRandomQuoteTool, GetWeatherTool,
    ListFilesTool, ProcessJsonTool, ReadFileTool,
};
use super::error::ToolError;
use super::handlers::ToolHandler;
use super::schema::ToolSchema;

/// An immutable tool entry: name, parameter schema, and handler.
///
/// Created at registration time and never modified afterwards.
pub struct ToolDescriptor {
    name: &'static str,
    description: &'static str,
    schema: ToolSchema,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    /// Create a new descriptor.
    pub fn new(
        name: &'static str,
        description: &'static str,
        schema: ToolSchema,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name,
            description,
            schema,
            handler,
        }
    }

    /// The tool's unique name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The tool's description shown to clients.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The tool's declared parameter schema.
    pub fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    /// Invoke the handler with validated arguments.
    pub async fn invoke(&self, arguments: Map<String, Value>) -> Result<Value, ToolError> {
        self.handler.call(arguments).await
    }

    /// JSON metadata for the tool listing.
    pub fn describe(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "schema": self.schema.describe(),
        })
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .finish()
    }
}

/// Tool registry - maps tool names to descriptors.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<ToolDescriptor>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool descriptor.
    ///
    /// Fails with [`ToolError::DuplicateName`] if a tool with the same name
    /// is already present.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        if self.tools.contains_key(descriptor.name()) {
            return Err(ToolError::duplicate_name(descriptor.name()));
        }
        info!("Registering tool: {}", descriptor.name());
        self.tools
            .insert(descriptor.name().to_string(), Arc::new(descriptor));
        Ok(())
    }

    /// Look up a tool by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<ToolDescriptor>, ToolError> {
        self.tools
            .get(name)
            .cloned()
            .ok_or_else(|| ToolError::not_found(format!("unknown tool '{}'", name)))
    }

    /// All registered descriptors, sorted by name for stable listings.
    pub fn descriptors(&self) -> Vec<Arc<ToolDescriptor>> {
        let mut descriptors: Vec<_> = self.tools.values().cloned().collect();
        descriptors.sort_by_key(|d| d.name());
        descriptors
    }

    /// All registered tool names, sorted.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.values().map(|d| d.name()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Build the registry with all built-in tools.
///
/// This is the single source of truth for the available tools. Runs once
/// during single-threaded startup; any error here aborts initialization.
pub fn build_tool_registry(config: Arc<Config>) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();

    registry.register(CreateFileTool::descriptor(config.clone()))?;
    registry.register(ReadFileTool::descriptor(config.clone()))?;
    registry.register(ListFilesTool::descriptor(config.clone()))?;
    registry.register(DeleteFileTool::descriptor(config.clone()))?;
    registry.register(GetWeatherTool::descriptor(config.clone()))?;
    registry.register(GetRandomQuoteTool::descriptor())?;
    registry.register(ProcessJsonTool::descriptor())?;
    registry.register(CheckCodeStyleTool::descriptor())?;

    Ok(registry)
}
