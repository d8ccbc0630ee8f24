//! HTTP transport implementation.
//!
//! Plain HTTP surface over the tool server:
//!
//! - `POST /tool/{name}` - invoke a tool with a JSON object body
//! - `GET /tools` - list tools and their schemas
//! - `GET /resource/{uri}` - read a resource
//! - `GET /resources` - list resources
//! - `POST /prompt/{name}` - render a prompt
//! - `GET /prompts` - list prompts
//! - `GET /health`, `GET /` - liveness and API info
//!
//! Success responses carry `{"result": ...}`; failures carry
//! `{"error": {"kind", "message"}}` with the status code derived from the
//! failure kind (404 not_found, 400 invalid_arguments, 500 handler_error).

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::ToolServer;
use crate::domains::prompts::PromptError;
use crate::domains::resources::ResourceError;
use crate::domains::tools::{ErrorKind, ToolResponse};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    /// The tool server instance.
    server: ToolServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(self, server: ToolServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState { server };

        let mut app = Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .route("/tools", get(list_tools))
            .route("/tool/{name}", post(call_tool))
            .route("/resources", get(list_resources))
            .route("/resource/{*uri}", get(read_resource))
            .route("/prompts", get(list_prompts))
            .route("/prompt/{name}", post(render_prompt))
            .with_state(state);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }
        let app = app.layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Tools:     POST /tool/{{name}}");
        info!("  → Resources: GET  /resource/{{uri}}");
        info!("  → Health:    GET  /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

// ============================================================================
// Response Helpers
// ============================================================================

/// HTTP status for a failure kind.
fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidArguments => StatusCode::BAD_REQUEST,
        ErrorKind::Handler => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Success body: `{"result": ...}`.
fn result_body(result: Value) -> Json<Value> {
    Json(serde_json::json!({ "result": result }))
}

/// Failure body: `{"error": {"kind", "message"}}`.
fn error_body(kind: ErrorKind, message: impl Into<String>) -> Json<Value> {
    Json(serde_json::json!({
        "error": {
            "kind": kind,
            "message": message.into(),
        }
    }))
}

/// Failure kind for a resource error.
fn resource_error_kind(error: &ResourceError) -> ErrorKind {
    match error {
        ResourceError::NotFound(_) => ErrorKind::NotFound,
        ResourceError::InvalidUri(_) => ErrorKind::InvalidArguments,
        ResourceError::Io(_) | ResourceError::Internal(_) => ErrorKind::Handler,
    }
}

/// Failure kind for a prompt error.
fn prompt_error_kind(error: &PromptError) -> ErrorKind {
    match error {
        PromptError::NotFound(_) => ErrorKind::NotFound,
        PromptError::MissingArgument(_) => ErrorKind::InvalidArguments,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "endpoints": {
            "tools": "/tools",
            "tool": "/tool/{name}",
            "resources": "/resources",
            "resource": "/resource/{uri}",
            "prompts": "/prompts",
            "prompt": "/prompt/{name}",
            "health": "/health"
        },
        "documentation": "POST a JSON object of arguments to /tool/{name}"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle tool invocation.
#[instrument(skip_all, fields(tool = %name))]
async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    info!("Received tool call: {}", name);

    let arguments = match body {
        None | Some(Json(Value::Null)) => Map::new(),
        Some(Json(Value::Object(map))) => map,
        Some(_) => {
            return (
                StatusCode::BAD_REQUEST,
                error_body(
                    ErrorKind::InvalidArguments,
                    "request body must be a JSON object",
                ),
            );
        }
    };

    match state.server.call_tool(&name, arguments).await {
        ToolResponse::Success(result) => (StatusCode::OK, result_body(result)),
        ToolResponse::Failure { kind, message } => (status_for(kind), error_body(kind, message)),
    }
}

/// Handle tool listing.
async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    let tools = state.server.list_tools();
    result_body(serde_json::json!({ "tools": tools }))
}

/// Handle resource read.
#[instrument(skip_all, fields(uri = %uri))]
async fn read_resource(
    State(state): State<AppState>,
    Path(uri): Path<String>,
) -> impl IntoResponse {
    info!("Reading resource: {}", uri);

    match state.server.read_resource(&uri).await {
        Ok(result) => (StatusCode::OK, result_body(result.to_json())),
        Err(error) => {
            let kind = resource_error_kind(&error);
            (status_for(kind), error_body(kind, error.to_string()))
        }
    }
}

/// Handle resource listing.
async fn list_resources(State(state): State<AppState>) -> impl IntoResponse {
    let resources = state.server.list_resources().await;
    result_body(serde_json::json!({ "resources": resources }))
}

/// Handle prompt listing.
async fn list_prompts(State(state): State<AppState>) -> impl IntoResponse {
    let prompts = state.server.list_prompts().await;
    result_body(serde_json::json!({ "prompts": prompts }))
}

/// Handle prompt rendering.
#[instrument(skip_all, fields(prompt = %name))]
async fn render_prompt(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    info!("Rendering prompt: {}", name);

    // Keep only string-valued arguments
    let arguments: Option<HashMap<String, String>> = body.and_then(|Json(value)| {
        value.as_object().map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
    });

    match state.server.get_prompt(&name, arguments).await {
        Ok(result) => (
            StatusCode::OK,
            result_body(serde_json::to_value(result).unwrap_or(Value::Null)),
        ),
        Err(error) => {
            let kind = prompt_error_kind(&error);
            (status_for(kind), error_body(kind, error.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::InvalidArguments), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorKind::Handler),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let Json(body) = error_body(ErrorKind::NotFound, "unknown tool 'x'");
        assert_eq!(body["error"]["kind"], "not_found");
        assert_eq!(body["error"]["message"], "unknown tool 'x'");
    }

    #[test]
    fn test_result_body_shape() {
        let Json(body) = result_body(serde_json::json!({"ok": true}));
        assert_eq!(body["result"]["ok"], true);
    }

    #[test]
    fn test_resource_error_kinds() {
        assert_eq!(
            resource_error_kind(&ResourceError::not_found("x")),
            ErrorKind::NotFound
        );
        assert_eq!(
            resource_error_kind(&ResourceError::invalid_uri("x")),
            ErrorKind::InvalidArguments
        );
        assert_eq!(
            resource_error_kind(&ResourceError::internal("x")),
            ErrorKind::Handler
        );
    }

    #[test]
    fn test_prompt_error_kinds() {
        assert_eq!(
            prompt_error_kind(&PromptError::not_found("x")),
            ErrorKind::NotFound
        );
        assert_eq!(
            prompt_error_kind(&PromptError::missing_argument("x")),
            ErrorKind::InvalidArguments
        );
    }
}
