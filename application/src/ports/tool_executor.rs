//! Tool Executor port
//!
//! Defines the interface transports use to list and execute tools.

use async_trait::async_trait;
use senpex_domain::ToolError;
use senpex_domain::tool::{RenderedResult, ToolCall, ToolSpec};
use serde_json::Value;

/// Port for tool execution
///
/// The MCP handlers, the HTTP server and the CLI depend on this trait rather
/// than on the concrete dispatcher.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available (aliases included)
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().resolve(name).is_some()
    }

    /// Get names of all available tools, in registration order
    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Execute a tool call. Never fails: errors come back with `is_error` set.
    async fn execute(&self, call: &ToolCall) -> RenderedResult;

    /// Execute a tool from a raw JSON arguments value (`null` means none)
    async fn call(&self, tool_name: &str, arguments: Value) -> RenderedResult {
        match ToolCall::from_value(tool_name, arguments) {
            Ok(call) => self.execute(&call).await,
            Err(reason) => {
                RenderedResult::failure(tool_name, &ToolError::invalid("arguments", reason))
            }
        }
    }
}
