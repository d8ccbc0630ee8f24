//! Request dispatcher.
//!
//! The dispatcher turns a raw tool request into a validated invocation and a
//! tagged response: it resolves the tool name against the registry, validates
//! the arguments against the tool's schema, invokes the handler at most once,
//! and translates any error into a [`ToolResponse::Failure`]. No error
//! escapes this boundary as a panic or a raw `Err`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use super::error::ToolError;
use super::registry::ToolRegistry;

/// A single inbound tool call. Transient; discarded after the response.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolRequest {
    /// Name of the tool to invoke.
    pub tool: String,

    /// Arguments object mapping parameter names to values.
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolRequest {
    /// Create a request from a name and arguments object.
    pub fn new(tool: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            tool: tool.into(),
            arguments,
        }
    }
}

/// The failure category of a response, serialized into the error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Unknown tool or missing file/resource.
    #[serde(rename = "not_found")]
    NotFound,

    /// The arguments violated the tool's schema.
    #[serde(rename = "invalid_arguments")]
    InvalidArguments,

    /// The handler itself failed (I/O, network, execution errors).
    #[serde(rename = "handler_error")]
    Handler,
}

impl From<&ToolError> for ErrorKind {
    fn from(error: &ToolError) -> Self {
        match error {
            ToolError::NotFound(_) => Self::NotFound,
            ToolError::InvalidArguments(_) => Self::InvalidArguments,
            ToolError::DuplicateName(_)
            | ToolError::Execution(_)
            | ToolError::Io(_)
            | ToolError::Request(_) => Self::Handler,
        }
    }
}

/// The outcome of handling a request.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResponse {
    /// The handler completed; carries its result value.
    Success(Value),

    /// The request failed at resolution, validation, or execution.
    Failure { kind: ErrorKind, message: String },
}

impl ToolResponse {
    /// Create a success response.
    pub fn success(result: Value) -> Self {
        Self::Success(result)
    }

    /// Create a failure response.
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Whether this is a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<ToolError> for ToolResponse {
    fn from(error: ToolError) -> Self {
        Self::Failure {
            kind: ErrorKind::from(&error),
            message: error.to_string(),
        }
    }
}

/// The request dispatcher.
///
/// Holds the read-only registry behind an `Arc`; handling may run
/// concurrently across requests without locking.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over a built registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Handle a single request.
    ///
    /// The handler is invoked at most once; validation failures short-circuit
    /// before invocation.
    #[instrument(skip_all, fields(tool = %request.tool))]
    pub async fn handle(&self, request: ToolRequest) -> ToolResponse {
        let descriptor = match self.registry.resolve(&request.tool) {
            Ok(descriptor) => descriptor,
            Err(error) => {
                warn!("Unknown tool requested: {}", request.tool);
                return error.into();
            }
        };

        if let Err(error) = descriptor.schema().validate(&request.arguments) {
            warn!("Argument validation failed for '{}': {}", request.tool, error);
            return error.into();
        }

        info!("Invoking tool: {}", request.tool);
        match descriptor.invoke(request.arguments).await {
            Ok(result) => ToolResponse::success(result),
            Err(error) => {
                warn!("Tool '{}' failed: {}", request.tool, error);
                error.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::ToolHandler;
    use crate::domains::tools::registry::ToolDescriptor;
    use crate::domains::tools::schema::{ParamSpec, ParamType, ToolSchema};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Handler that counts its invocations.
    struct CountingHandler {
        calls: Arc<AtomicUsize>,
        result: Value,
    }

    #[async_trait::async_trait]
    impl ToolHandler for CountingHandler {
        async fn call(&self, _arguments: Map<String, Value>) -> Result<Value, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.result.clone())
        }
    }

    /// Handler that always fails.
    struct FailingHandler;

    #[async_trait::async_trait]
    impl ToolHandler for FailingHandler {
        async fn call(&self, _arguments: Map<String, Value>) -> Result<Value, ToolError> {
            Err(ToolError::execution("boom"))
        }
    }

    fn dispatcher_with(descriptor: ToolDescriptor) -> Dispatcher {
        let mut registry = ToolRegistry::new();
        registry.register(descriptor).unwrap();
        Dispatcher::new(Arc::new(registry))
    }

    fn greet_schema() -> ToolSchema {
        ToolSchema::new(vec![ParamSpec::required(
            "name",
            ParamType::String,
            "who to greet",
        )])
    }

    #[tokio::test]
    async fn test_unknown_tool_is_not_found() {
        let dispatcher = Dispatcher::new(Arc::new(ToolRegistry::new()));
        let response = dispatcher.handle(ToolRequest::new("missing", Map::new())).await;

        match response {
            ToolResponse::Failure { kind, message } => {
                assert_eq!(kind, ErrorKind::NotFound);
                assert!(message.contains("missing"));
            }
            ToolResponse::Success(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_missing_required_argument_never_invokes_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_with(ToolDescriptor::new(
            "greet",
            "greets",
            greet_schema(),
            Arc::new(CountingHandler {
                calls: calls.clone(),
                result: json!("hello"),
            }),
        ));

        let response = dispatcher.handle(ToolRequest::new("greet", Map::new())).await;

        match response {
            ToolResponse::Failure { kind, message } => {
                assert_eq!(kind, ErrorKind::InvalidArguments);
                assert!(message.contains("name"));
            }
            ToolResponse::Success(_) => panic!("expected failure"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_invokes_handler_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_with(ToolDescriptor::new(
            "greet",
            "greets",
            greet_schema(),
            Arc::new(CountingHandler {
                calls: calls.clone(),
                result: json!({"greeting": "hello"}),
            }),
        ));

        let args = json!({"name": "world"}).as_object().cloned().unwrap();
        let response = dispatcher.handle(ToolRequest::new("greet", args)).await;

        assert_eq!(response, ToolResponse::success(json!({"greeting": "hello"})));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_handler_error_translates_to_failure() {
        let dispatcher = dispatcher_with(ToolDescriptor::new(
            "broken",
            "always fails",
            ToolSchema::empty(),
            Arc::new(FailingHandler),
        ));

        let response = dispatcher.handle(ToolRequest::new("broken", Map::new())).await;

        match response {
            ToolResponse::Failure { kind, message } => {
                assert_eq!(kind, ErrorKind::Handler);
                assert!(message.contains("boom"));
            }
            ToolResponse::Success(_) => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn test_unknown_argument_rejected_before_invocation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_with(ToolDescriptor::new(
            "greet",
            "greets",
            greet_schema(),
            Arc::new(CountingHandler {
                calls: calls.clone(),
                result: json!("hello"),
            }),
        ));

        let args = json!({"name": "world", "shout": true})
            .as_object()
            .cloned()
            .unwrap();
        let response = dispatcher.handle(ToolRequest::new("greet", args)).await;

        assert!(!response.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_kind_serialization() {
        assert_eq!(
            serde_json::to_value(ErrorKind::NotFound).unwrap(),
            json!("not_found")
        );
        assert_eq!(
            serde_json::to_value(ErrorKind::InvalidArguments).unwrap(),
            json!("invalid_arguments")
        );
        assert_eq!(
            serde_json::to_value(ErrorKind::Handler).unwrap(),
            json!("handler_error")
        );
    }
}
