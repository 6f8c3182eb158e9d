//! HTTP transport implementation.
//!
//! REST-style HTTP server exposing the tool contract:
//! - `GET  /mcp/tools` lists tools
//! - `POST /mcp/tools/{toolName}/call` calls a tool with a JSON argument object
//!
//! Failed calls are answered with problem payloads (see [`ProblemDetails`]),
//! including calls whose body is not JSON.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use rmcp::model::Content;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info, instrument, warn};

use super::{HttpConfig, ProblemDetails, TransportError, TransportResult};
use crate::core::McpServer;
use crate::core::server::ToolInfo;

/// Path of the tool listing endpoint.
pub const TOOLS_PATH: &str = "/mcp/tools";

/// Path of the tool call endpoint.
pub const CALL_TOOL_PATH: &str = "/mcp/tools/{tool_name}/call";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The server instance.
    server: McpServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C is received.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Tools:  GET  {}", TOOLS_PATH);
        info!("  → Call:   POST {}", CALL_TOOL_PATH);
        info!("  → Health: GET  /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router serving the tool endpoints.
pub fn build_router(server: McpServer, enable_cors: bool) -> Router {
    let state = AppState { server };

    let mut app = Router::new()
        .route(TOOLS_PATH, get(list_tools))
        .route(CALL_TOOL_PATH, post(call_tool))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Resolve when the process is asked to stop.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "tools": TOOLS_PATH,
            "call": CALL_TOOL_PATH,
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// List available tools.
#[instrument(skip_all)]
async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolInfo>> {
    info!("Processing tool listing request");
    Json(state.server.list_tools())
}

/// Call a tool by name with the request body as arguments.
///
/// The body is taken raw and parsed by the controller after the tool is
/// resolved, so parse failures come back as problem payloads too. The
/// content type is not checked.
///
/// The cancellation token fires if axum drops this future, i.e. when the
/// client disconnects before the tool finishes.
#[instrument(skip_all, fields(tool = %tool_name))]
async fn call_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    body: Bytes,
) -> Result<Json<Vec<Content>>, ProblemDetails> {
    info!("Processing tool call request");

    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let content = state
        .server
        .call_tool_with_body(&tool_name, &body, cancel)
        .await?;
    Ok(Json(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::server::ToolsCapability;
    use crate::domains::tools::{ToolArguments, ToolHandler, ToolRegistry, ToolResult};
    use axum::body::Body;
    use http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use rmcp::model::JsonObject;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::oneshot;
    use tower::ServiceExt;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.sensenet.mock_delay_ms = 1;
        config
    }

    fn test_router() -> Router {
        let server = McpServer::new(test_config()).unwrap();
        build_router(server, true)
    }

    fn disabled_router() -> Router {
        let server = McpServer::with_tools(test_config(), ToolsCapability::Disabled);
        build_router(server, false)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, content_type, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn call_request(tool: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/mcp/tools/{}/call", tool))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_tools() {
        let (status, _, body) = send(test_router(), get_request("/mcp/tools")).await;
        assert_eq!(status, StatusCode::OK);

        let tools = body.as_array().unwrap();
        assert_eq!(tools.len(), 1);
        let tool = &tools[0];
        assert_eq!(tool["name"], "GetSenseNetContentDetails");
        assert_eq!(
            tool["description"],
            "Retrieves details for a specific content item from SenseNet."
        );
        assert!(tool["inputSchema"].is_object());
        assert_eq!(tool["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn test_list_tools_disabled_is_empty() {
        let (status, _, body) = send(disabled_router(), get_request("/mcp/tools")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_call_returns_mock_data() {
        let request = call_request(
            "GetSenseNetContentDetails",
            json!({ "contentId": "integration-test-123" }),
        );
        let (status, _, body) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::OK);

        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["type"], "text");
        assert_eq!(
            items[0]["text"],
            "Mock details for content: integration-test-123"
        );
    }

    #[tokio::test]
    async fn test_call_is_idempotent() {
        let app = test_router();
        let body = json!({ "contentId": "same-id" });
        let (_, _, first) = send(
            app.clone(),
            call_request("GetSenseNetContentDetails", body.clone()),
        )
        .await;
        let (_, _, second) = send(app, call_request("GetSenseNetContentDetails", body)).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_call_unknown_tool_is_not_found() {
        let request = call_request("NonExistentTool", json!({ "arg": "value" }));
        let (status, content_type, body) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/problem+json"));
        assert_eq!(body["detail"], "Tool 'NonExistentTool' not found.");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_call_name_match_is_case_sensitive() {
        let request = call_request(
            "getsensenetcontentdetails",
            json!({ "contentId": "abc" }),
        );
        let (status, _, _) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_call_missing_argument_is_bad_request() {
        let request = call_request("GetSenseNetContentDetails", json!({ "otherArg": "value" }));
        let (status, _, body) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["title"].as_str().unwrap().contains("MCP Tool Error"));
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_call_non_object_bodies_are_bad_request() {
        for payload in [json!(["integration-test-123"]), json!("abc"), json!(7), json!(null)] {
            let request = call_request("GetSenseNetContentDetails", payload);
            let (status, _, body) = send(test_router(), request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["title"].as_str().unwrap().contains("MCP Tool Error"));
        }
    }

    fn raw_call_request(tool: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/mcp/tools/{}/call", tool))
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_call_malformed_body_is_problem() {
        for body in ["{not json", ""] {
            let request = raw_call_request("GetSenseNetContentDetails", body);
            let (status, content_type, problem) = send(test_router(), request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
            assert_eq!(content_type.as_deref(), Some("application/problem+json"));
            assert_eq!(problem["status"], 400);
            assert_eq!(problem["title"], "Invalid request body");
            assert!(
                problem["detail"]
                    .as_str()
                    .unwrap()
                    .starts_with("The request body is not valid JSON")
            );
        }
    }

    #[tokio::test]
    async fn test_call_unknown_tool_is_not_found_for_any_body() {
        for body in ["{}", "{not json", ""] {
            let request = raw_call_request("NonExistentTool", body);
            let (status, content_type, problem) = send(test_router(), request).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "body {:?}", body);
            assert_eq!(content_type.as_deref(), Some("application/problem+json"));
            assert_eq!(problem["detail"], "Tool 'NonExistentTool' not found.");
        }
    }

    #[tokio::test]
    async fn test_call_without_content_type_is_dispatched() {
        let request = raw_call_request("GetSenseNetContentDetails", r#"{"contentId":"plain"}"#);
        let (status, _, body) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["text"], "Mock details for content: plain");
    }

    #[tokio::test]
    async fn test_call_disabled_is_internal_error() {
        let request = call_request("GetSenseNetContentDetails", json!({ "contentId": "x" }));
        let (status, _, body) = send(disabled_router(), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("not configured"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, _, body) = send(test_router(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let (status, _, body) = send(test_router(), get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "sensenet-mcp-bridge");
        assert_eq!(body["endpoints"]["tools"], TOOLS_PATH);
    }

    /// Parks until cancelled and reports the cancellation on a channel that
    /// outlives the tool future.
    struct ParkedTool {
        cancelled: Mutex<Option<oneshot::Sender<()>>>,
    }

    #[async_trait::async_trait]
    impl ToolHandler for ParkedTool {
        fn name(&self) -> &str {
            "Parked"
        }

        fn description(&self) -> &str {
            "Waits for cancellation"
        }

        fn input_schema(&self) -> Arc<JsonObject> {
            Arc::new(json!({ "type": "object" }).as_object().cloned().unwrap())
        }

        async fn execute(
            &self,
            _arguments: &ToolArguments,
            cancel: CancellationToken,
        ) -> ToolResult {
            let notify = self.cancelled.lock().unwrap().take();
            tokio::spawn(async move {
                cancel.cancelled().await;
                if let Some(tx) = notify {
                    let _ = tx.send(());
                }
            });
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_dropped_request_cancels_tool() {
        let (tx, rx) = oneshot::channel();
        let tool = ParkedTool {
            cancelled: Mutex::new(Some(tx)),
        };
        let registry = ToolRegistry::builder()
            .register(Arc::new(tool))
            .build();
        let server = McpServer::with_tools(
            test_config(),
            ToolsCapability::Enabled(Arc::new(registry)),
        );
        let app = build_router(server, false);

        let pending = app.oneshot(call_request("Parked", json!({})));
        let outcome = tokio::time::timeout(Duration::from_millis(50), pending).await;
        assert!(outcome.is_err());

        tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("token should fire once the request is dropped")
            .unwrap();
    }
}
