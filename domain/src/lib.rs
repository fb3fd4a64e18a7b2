//! Domain layer for senpex-mcp
//!
//! This crate contains the tool catalogue and the pure logic around it. It
//! has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! Every Senpex operation is a [`ToolDefinition`] in one ordered
//! [`ToolSpec`]. A [`ToolCall`] is validated into [`ResolvedArguments`],
//! which is the single place where declared defaults are applied.
//!
//! ## Senpex mapping
//!
//! - **Builder**: resolved arguments → [`ExternalRequest`]
//! - **Renderer**: [`ExternalResponse`] → text, or an upstream [`ToolError`]
//!
//! ## Chat
//!
//! [`IntentClassifier`] maps a free-text message to at most one tool call
//! using ordered regex rules.

pub mod chat;
pub mod core;
pub mod senpex;
pub mod tool;

// Re-export commonly used types
pub use chat::{ChatAnalysis, Intent, IntentClassifier};
pub use core::error::{CREDENTIALS_NOT_CONFIGURED, ToolError};
pub use core::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use senpex::{
    ExternalRequest, ExternalResponse, HttpMethod, build_request, prepare, render,
    senpex_tool_spec,
};
pub use tool::{
    ParamType, RenderedResult, ResolvedArguments, ToolCall, ToolDefinition, ToolParameter,
    ToolSpec,
};
