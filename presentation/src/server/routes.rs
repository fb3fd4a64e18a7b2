//! HTTP route handlers

use super::error::HttpError;
use super::sse::connection_stream;
use super::AppState;
use crate::mcp::CallToolResult;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, Sse};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use futures::{Stream, StreamExt};
use senpex_application::ChatReply;
use serde::Deserialize;
use serde_json::{Value, json};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::info;

pub(super) async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "tools": state.executor.tool_spec().len(),
    }))
}

pub(super) async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "tools": state.mcp.list_tools() }))
}

/// Body is the arguments object; an empty body means no arguments.
pub(super) async fn call_tool(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Response, HttpError> {
    let arguments = parse_body(&body)?;
    let status = if state.executor.has_tool(&name) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    let result = state.executor.call(&name, arguments).await;
    Ok((status, Json(CallToolResult::from(&result))).into_response())
}

pub(super) async fn json_rpc(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let raw = String::from_utf8_lossy(&body);
    match state.mcp.handle_message(&raw).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatRequest {
    message: String,
}

pub(super) async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatReply>, HttpError> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|e| HttpError::bad_request(format!("Invalid chat request: {}", e)))?;
    if request.message.trim().is_empty() {
        return Err(HttpError::bad_request("message must not be empty"));
    }
    Ok(Json(state.chat.execute(&request.message).await))
}

pub(super) async fn sse(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!(
        "SSE client connected ({} active)",
        state.hub.subscriber_count() + 1
    );
    let stream = connection_stream(
        state.hub.subscribe(),
        state.heartbeat,
        state.shutdown.clone(),
    )
    .map(|message| Ok(message.into_event()));
    Sse::new(stream)
}

fn parse_body(body: &Bytes) -> Result<Value, HttpError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|e| HttpError::bad_request(format!("Invalid JSON body: {}", e)))
}

