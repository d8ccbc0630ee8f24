//! Tool handler trait.
//!
//! Every tool implements [`ToolHandler`]; the dispatcher invokes it with the
//! already-validated arguments object. Handlers return an explicit `Result`
//! rather than panicking: the dispatcher translates errors into failure
//! responses at its boundary.

use serde_json::{Map, Value};

use super::error::ToolError;

/// Trait implemented by every tool.
///
/// The arguments have passed schema validation when `call` runs; handlers
/// typically deserialize them into a typed parameter struct.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with the given arguments.
    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, ToolError>;
}

/// Deserialize a validated arguments object into a typed parameter struct.
pub fn parse_params<P>(arguments: Map<String, Value>) -> Result<P, ToolError>
where
    P: serde::de::DeserializeOwned,
{
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
