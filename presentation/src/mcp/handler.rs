//! MCP method dispatch shared by the stdio and HTTP transports

use super::protocol::{
    CallToolParams, CallToolResult, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JsonRpcRequest,
    JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, ToolDescriptor, initialize_result,
};
use senpex_application::ToolExecutorPort;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers JSON-RPC requests on top of a [`ToolExecutorPort`].
///
/// Notifications (requests without an `id`) never produce a response.
#[derive(Clone)]
pub struct McpHandler {
    executor: Arc<dyn ToolExecutorPort>,
}

impl McpHandler {
    pub fn new(executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self { executor }
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.executor
            .tool_spec()
            .all()
            .map(ToolDescriptor::from)
            .collect()
    }

    /// Handle one raw message; malformed JSON gets a `-32700` reply
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => self.handle_value(value).await,
            Err(e) => {
                warn!("Unparseable JSON-RPC message: {}", e);
                Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ))
            }
        }
    }

    /// Handle an already parsed message; a non-request shape gets `-32600`
    pub async fn handle_value(&self, value: Value) -> Option<JsonRpcResponse> {
        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                id,
                INVALID_REQUEST,
                format!("Invalid request: {}", e),
            )),
        }
    }

    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!("MCP request: {}", request.method);

        let Some(id) = request.id else {
            debug!("MCP notification: {}", request.method);
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, json!({ "tools": self.list_tools() })),
            "tools/call" => self.call_tool(id, request.params).await,
            other => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        };
        Some(response)
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let parsed = params
            .map(serde_json::from_value::<CallToolParams>)
            .transpose();
        let params = match parsed {
            Ok(Some(params)) => params,
            Ok(None) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params for tools/call");
            }
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid params for tools/call: {}", e),
                );
            }
        };

        let result = self.executor.call(&params.name, params.arguments).await;
        match serde_json::to_value(CallToolResult::from(&result)) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        }
    }
}
