//! Model Context Protocol transports
//!
//! [`McpHandler`] implements the JSON-RPC methods once; [`stdio`] and the
//! HTTP server both feed it.

pub mod handler;
pub mod protocol;
pub mod stdio;

pub use handler::McpHandler;
pub use protocol::{CallToolResult, JsonRpcRequest, JsonRpcResponse, ToolDescriptor};
pub use stdio::serve_stdio;
