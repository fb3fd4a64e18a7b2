//! Tool domain value objects: the result envelope returned to callers

use crate::core::error::ToolError;
use serde::{Deserialize, Serialize};

/// Terminal artifact of a tool invocation.
///
/// Every call produces one of these, success or not. On the wire only
/// `text` and `isError` are part of the contract; `tool_name` and
/// `error_code` are carried for logging and the notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedResult {
    /// Canonical name of the tool that was executed (or the requested name
    /// when it could not be resolved)
    #[serde(rename = "toolName")]
    pub tool_name: String,
    /// Human-readable output or error message
    pub text: String,
    /// Whether the invocation failed
    #[serde(rename = "isError")]
    pub is_error: bool,
    /// Error code from [`ToolError::code`] (for failed execution)
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none", default)]
    pub error_code: Option<String>,
}

impl RenderedResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            text: text.into(),
            is_error: false,
            error_code: None,
        }
    }

    /// Create a failed result; the text is `Error: <message>`
    pub fn failure(tool_name: impl Into<String>, error: &ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            text: format!("Error: {}", error),
            is_error: true,
            error_code: Some(error.code().to_string()),
        }
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        !self.is_error
    }
}
