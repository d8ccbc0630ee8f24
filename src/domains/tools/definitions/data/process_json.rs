//! JSON processing tool definition.
//!
//! Parses a JSON string and reports its structure: value type, key set,
//! length, and nesting depth.

use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::tools::{
    ParamSpec, ParamType, ToolDescriptor, ToolError, ToolHandler, ToolSchema, parse_params,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the JSON processing tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessJsonParams {
    /// The JSON text to parse and analyze.
    pub json_string: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// JSON processing tool - validates and analyzes JSON text.
pub struct ProcessJsonTool;

impl ProcessJsonTool {
    /// Tool name as registered in the registry.
    pub const NAME: &'static str = "process_json";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Parse and validate a JSON string. Returns the parsed value together with a structural analysis: type, keys, length, and nesting depth.";

    /// Build the descriptor for registration.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::schema(),
            Arc::new(Self),
        )
    }

    fn schema() -> ToolSchema {
        ToolSchema::new(vec![ParamSpec::required(
            "json_string",
            ParamType::String,
            "JSON text to parse and analyze",
        )])
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &ProcessJsonParams) -> Result<Value, ToolError> {
        let data: Value = serde_json::from_str(&params.json_string)
            .map_err(|e| ToolError::execution(format!("invalid JSON: {}", e)))?;

        let keys = data
            .as_object()
            .map(|obj| Value::Array(obj.keys().map(|k| Value::String(k.clone())).collect()));
        let length = match &data {
            Value::Object(obj) => Some(obj.len()),
            Value::Array(arr) => Some(arr.len()),
            _ => None,
        };

        let analysis = serde_json::json!({
            "type": value_type_name(&data),
            "size": params.json_string.len(),
            "keys": keys.unwrap_or(Value::Null),
            "length": length,
            "nested_levels": nested_levels(&data),
        });

        info!("Analyzed {} bytes of JSON", params.json_string.len());

        Ok(serde_json::json!({
            "data": data,
            "analysis": analysis,
            "valid": true,
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for ProcessJsonTool {
    async fn call(&self, arguments: serde_json::Map<String, Value>) -> Result<Value, ToolError> {
        let params: ProcessJsonParams = parse_params(arguments)?;
        Self::execute(&params)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// JSON type name of a value.
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Maximum nesting depth of a value. Scalars and empty containers count as 0.
fn nested_levels(value: &Value) -> usize {
    match value {
        Value::Object(obj) => obj
            .values()
            .map(|v| nested_levels(v) + 1)
            .max()
            .unwrap_or(0),
        Value::Array(arr) => arr
            .iter()
            .map(|v| nested_levels(v) + 1)
            .max()
            .unwrap_or(0),
        _ => 0,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn execute(input: &str) -> Result<Value, ToolError> {
        ProcessJsonTool::execute(&ProcessJsonParams {
            json_string: input.to_string(),
        })
    }

    #[test]
    fn test_object_analysis() {
        let result = execute(r#"{"a": 1, "b": {"c": [1, 2]}}"#).unwrap();
        let analysis = &result["analysis"];

        assert_eq!(analysis["type"], "object");
        assert_eq!(analysis["keys"], json!(["a", "b"]));
        assert_eq!(analysis["length"], 2);
        assert_eq!(analysis["nested_levels"], 3);
        assert_eq!(result["valid"], true);
    }

    #[test]
    fn test_array_analysis() {
        let result = execute("[1, 2, 3]").unwrap();
        let analysis = &result["analysis"];

        assert_eq!(analysis["type"], "array");
        assert_eq!(analysis["keys"], Value::Null);
        assert_eq!(analysis["length"], 3);
        assert_eq!(analysis["nested_levels"], 1);
    }

    #[test]
    fn test_scalar_analysis() {
        let result = execute("42").unwrap();
        let analysis = &result["analysis"];

        assert_eq!(analysis["type"], "number");
        assert_eq!(analysis["length"], Value::Null);
        assert_eq!(analysis["nested_levels"], 0);
    }

    #[test]
    fn test_invalid_json_is_handler_error() {
        let err = execute("{not json").unwrap_err();
        assert!(matches!(err, ToolError::Execution(_)));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_nested_levels_empty_containers() {
        assert_eq!(nested_levels(&json!({})), 0);
        assert_eq!(nested_levels(&json!([])), 0);
        assert_eq!(nested_levels(&json!({"a": {}})), 1);
    }
}
