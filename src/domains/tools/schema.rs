//! Tool parameter schemas.
//!
//! Each tool declares an ordered list of typed parameters. The dispatcher
//! validates incoming arguments against this table before the handler runs,
//! naming the first violated constraint. Unknown arguments are rejected
//! unless the schema explicitly allows extras.

use serde::Serialize;
use serde_json::{Map, Value};

use super::error::ToolError;

/// The JSON type a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamType {
    /// Human-readable type name, used in violation messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether a JSON value is coercible to this type.
    ///
    /// Integers are accepted where a number is expected; no other
    /// cross-type coercion is performed.
    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

/// A single declared parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParamSpec {
    /// Parameter name as it appears in the arguments object.
    pub name: &'static str,

    /// Accepted JSON type.
    #[serde(rename = "type")]
    pub param_type: ParamType,

    /// Whether the parameter must be present.
    pub required: bool,

    /// Description shown in the tool listing.
    pub description: &'static str,
}

impl ParamSpec {
    /// Declare a required parameter.
    pub fn required(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            name,
            param_type,
            required: true,
            description,
        }
    }

    /// Declare an optional parameter.
    pub fn optional(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            name,
            param_type,
            required: false,
            description,
        }
    }
}

/// The ordered parameter table of a tool.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    params: Vec<ParamSpec>,
    allow_extra: bool,
}

impl ToolSchema {
    /// Create a schema from an ordered list of parameters.
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self {
            params,
            allow_extra: false,
        }
    }

    /// Create a schema that accepts no parameters.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Allow arguments beyond the declared parameters.
    pub fn with_extras(mut self) -> Self {
        self.allow_extra = true;
        self
    }

    /// The declared parameters, in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Validate an arguments object against this schema.
    ///
    /// Parameters are checked in declaration order and the first violated
    /// constraint is named in the error. An explicit `null` counts as
    /// absent.
    pub fn validate(&self, arguments: &Map<String, Value>) -> Result<(), ToolError> {
        for spec in &self.params {
            match arguments.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        return Err(ToolError::invalid_arguments(format!(
                            "missing required parameter '{}'",
                            spec.name
                        )));
                    }
                }
                Some(value) => {
                    if !spec.param_type.matches(value) {
                        return Err(ToolError::invalid_arguments(format!(
                            "parameter '{}' must be a {}",
                            spec.name,
                            spec.param_type.name()
                        )));
                    }
                }
            }
        }

        if !self.allow_extra {
            for name in arguments.keys() {
                if !self.params.iter().any(|spec| spec.name == name) {
                    return Err(ToolError::invalid_arguments(format!(
                        "unknown parameter '{}'",
                        name
                    )));
                }
            }
        }

        Ok(())
    }

    /// JSON description of this schema for the tool listing.
    pub fn describe(&self) -> Value {
        serde_json::json!({
            "params": self.params,
            "allowExtra": self.allow_extra,
        })
    }
}
