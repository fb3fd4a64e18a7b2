//! Domain error types
//!
//! Every failure a tool invocation can hit is one of these variants. They
//! never escape the dispatcher as `Err`; they are folded into a
//! [`RenderedResult`](crate::tool::value_objects::RenderedResult) with
//! `is_error = true`.

use thiserror::Error;

/// Fixed message returned when the Senpex credentials are missing.
pub const CREDENTIALS_NOT_CONFIGURED: &str = "Senpex API credentials not configured. \
     Please set SENPEX_CLIENT_ID and SENPEX_SECRET_ID environment variables.";

/// Error raised while dispatching a single tool call.
///
/// | Code | Variants | Detected |
/// |------|----------|----------|
/// | `CONFIGURATION` | [`Configuration`](Self::Configuration) | before building |
/// | `INVALID_ARGUMENT` | [`MissingArgument`](Self::MissingArgument), [`InvalidArgument`](Self::InvalidArgument), [`InvalidCombination`](Self::InvalidCombination) | before any network call |
/// | `TRANSPORT` | [`Transport`](Self::Transport) | DNS, connect, timeout |
/// | `UPSTREAM` | [`Upstream`](Self::Upstream) | non-2xx or embedded error code |
/// | `NOT_FOUND` | [`UnknownTool`](Self::UnknownTool) | name resolution |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("{CREDENTIALS_NOT_CONFIGURED}")]
    Configuration,

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("{0}")]
    InvalidCombination(String),

    #[error("Request to Senpex API failed: {0}")]
    Transport(String),

    #[error("HTTP {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    pub fn missing(name: impl Into<String>) -> Self {
        ToolError::MissingArgument(name.into())
    }

    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code, used in logs and in the result envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::Configuration => "CONFIGURATION",
            ToolError::MissingArgument(_)
            | ToolError::InvalidArgument { .. }
            | ToolError::InvalidCombination(_) => "INVALID_ARGUMENT",
            ToolError::Transport(_) => "TRANSPORT",
            ToolError::Upstream { .. } => "UPSTREAM",
            ToolError::UnknownTool(_) => "NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_is_fixed() {
        assert_eq!(
            ToolError::Configuration.to_string(),
            "Senpex API credentials not configured. Please set SENPEX_CLIENT_ID and SENPEX_SECRET_ID environment variables."
        );
    }

    #[test]
    fn test_missing_argument_names_field() {
        let err = ToolError::missing("pickup_addr");
        assert_eq!(err.to_string(), "Missing required argument: pickup_addr");
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_upstream_display() {
        let err = ToolError::Upstream {
            status: 401,
            body: r#"{"code":"1","message":"Invalid credentials"}"#.to_string(),
        };
        let text = err.to_string();
        assert!(text.starts_with("HTTP 401 - "));
        assert!(text.contains("Invalid credentials"));
    }

    #[test]
    fn test_codes() {
        assert_eq!(ToolError::UnknownTool("x".into()).code(), "NOT_FOUND");
        assert_eq!(ToolError::Transport("refused".into()).code(), "TRANSPORT");
        assert_eq!(ToolError::Configuration.code(), "CONFIGURATION");
        assert_eq!(ToolError::InvalidCombination("x".into()).code(), "INVALID_ARGUMENT");
    }
}
