//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod call_tool;
pub mod handle_chat;
pub(crate) mod tool_helpers;
