//! Application layer for senpex-mcp
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    senpex_api::{ApiError, SenpexApiPort},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::call_tool::ToolDispatcher;
pub use use_cases::handle_chat::{ChatReply, ChatToolCall, HandleChatUseCase};
