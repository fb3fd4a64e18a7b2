//! HTTP/SSE transport
//!
//! | Route                     | Purpose                                   |
//! |---------------------------|-------------------------------------------|
//! | `GET /health`             | liveness                                  |
//! | `GET /tools`              | tool descriptors                          |
//! | `POST /mcp/tools/{name}`  | call one tool, body = arguments           |
//! | `POST /mcp`               | JSON-RPC (same methods as stdio)          |
//! | `POST /chat`              | free-text message → intent → tool call    |
//! | `GET /sse`                | notifications of HTTP tool results        |

mod error;
mod events;
mod routes;
mod sse;

pub use error::{HttpError, ServerError};
pub use events::{EventHub, PublishingExecutor, ToolEvent};
pub use sse::{SseMessage, connection_stream};

use crate::mcp::McpHandler;
use axum::Router;
use axum::routing::{get, post};
use senpex_application::{HandleChatUseCase, ToolExecutorPort};
use senpex_domain::IntentClassifier;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Server tuning
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub heartbeat: Duration,
    pub event_buffer: usize,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            heartbeat: Duration::from_secs(15),
            event_buffer: 64,
        }
    }
}

/// Shared state behind every route.
///
/// `executor` publishes each result to `hub`, so every tool call made over
/// HTTP (direct, JSON-RPC or chat) reaches SSE subscribers.
pub struct AppState {
    pub executor: Arc<dyn ToolExecutorPort>,
    pub mcp: McpHandler,
    pub chat: HandleChatUseCase,
    pub hub: Arc<EventHub>,
    pub heartbeat: Duration,
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        executor: Arc<dyn ToolExecutorPort>,
        classifier: Arc<IntentClassifier>,
        options: ServerOptions,
        shutdown: CancellationToken,
    ) -> Self {
        let hub = Arc::new(EventHub::with_capacity(options.event_buffer));
        let executor: Arc<dyn ToolExecutorPort> =
            Arc::new(PublishingExecutor::new(executor, hub.clone()));
        Self {
            mcp: McpHandler::new(executor.clone()),
            chat: HandleChatUseCase::new(classifier, executor.clone()),
            executor,
            hub,
            heartbeat: options.heartbeat,
            shutdown,
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/tools", get(routes::list_tools))
        .route("/mcp/tools/{name}", post(routes::call_tool))
        .route("/mcp", post(routes::json_rpc))
        .route("/chat", post(routes::chat))
        .route("/sse", get(routes::sse))
        .with_state(state)
}

/// Bind `addr` and serve until `state.shutdown` is cancelled.
///
/// Open SSE streams receive `close` and end, which lets the graceful
/// shutdown complete.
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    let local = listener.local_addr()?;
    info!("HTTP server listening on http://{}", local);

    let shutdown = state.shutdown.clone();
    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::handler::test_support::StubExecutor;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use senpex_domain::senpex_tool_spec;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        let classifier =
            Arc::new(IntentClassifier::new("demo@example.com", &senpex_tool_spec()).unwrap());
        Arc::new(AppState::new(
            Arc::new(StubExecutor::new()),
            classifier,
            ServerOptions::default(),
            CancellationToken::new(),
        ))
    }

    async fn send(state: Arc<AppState>, request: Request<Body>) -> (StatusCode, Value) {
        let resp = build_app(state).oneshot(request).await.unwrap();
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = send(test_state(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["tools"], 13);
        assert!(json.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_tools() {
        let (status, json) = send(test_state(), get("/tools")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tools"].as_array().unwrap().len(), 13);
        assert_eq!(json["tools"][1]["name"], "get_pickup_quote");
    }

    #[tokio::test]
    async fn test_call_tool_publishes_event() {
        let state = test_state();
        let mut rx = state.hub.subscribe();

        let (status, json) = send(
            state.clone(),
            post_json("/mcp/tools/track_order_by_id", r#"{"order_id": "42"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({"content": [{"type": "text", "text": "track_order_by_id ok"}], "isError": false})
        );

        let event = rx.try_recv().unwrap();
        assert_eq!(event.tool_name, "track_order_by_id");
    }

    #[tokio::test]
    async fn test_call_tool_empty_body() {
        let (status, json) = send(
            test_state(),
            Request::builder()
                .method("POST")
                .uri("/mcp/tools/get_order_list")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["isError"], false);
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let (status, json) = send(test_state(), post_json("/mcp/tools/cancel_order", "{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["text"], "Error: Unknown tool: cancel_order");
    }

    #[tokio::test]
    async fn test_call_tool_bad_json() {
        let (status, json) =
            send(test_state(), post_json("/mcp/tools/get_order_list", "{oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_json_rpc_over_http() {
        let (status, json) = send(
            test_state(),
            post_json("/mcp", r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"]["tools"].as_array().unwrap().len(), 13);

        let (status, _) = send(
            test_state(),
            post_json("/mcp", r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_chat() {
        let state = test_state();
        let mut rx = state.hub.subscribe();

        let (status, json) =
            send(state.clone(), post_json("/chat", r#"{"message": "Track order 12345"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["intent"], "tracking");
        assert_eq!(json["response"], "track_order_by_id ok");
        assert_eq!(json["tool_calls"][0]["name"], "track_order_by_id");
        assert_eq!(rx.try_recv().unwrap().tool_name, "track_order_by_id");
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message() {
        let (status, _) = send(test_state(), post_json("/chat", r#"{"message": "  "}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(test_state(), post_json("/chat", r#"{"text": "hi"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sse_after_shutdown() {
        let state = test_state();
        state.shutdown.cancel();

        let resp = build_app(state).oneshot(get("/sse")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "text/event-stream"
        );
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("event: connected"));
        assert!(text.contains("event: close"));
    }

    #[tokio::test]
    async fn test_bind_failure() {
        let state = test_state();
        let err = serve(state, "not-an-address").await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
