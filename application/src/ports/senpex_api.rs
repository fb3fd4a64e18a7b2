//! Senpex API port
//!
//! Defines how the application layer reaches the Senpex REST API. The
//! reqwest adapter lives in the infrastructure layer.

use async_trait::async_trait;
use senpex_domain::{ExternalRequest, ExternalResponse, ToolError};
use thiserror::Error;

/// Failure to obtain a 2xx response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// DNS, connection, TLS or timeout failure
    #[error("{0}")]
    Transport(String),

    /// Non-2xx status, body kept verbatim
    #[error("HTTP {status} - {body}")]
    Upstream { status: u16, body: String },
}

impl From<ApiError> for ToolError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(msg) => ToolError::Transport(msg),
            ApiError::Upstream { status, body } => ToolError::Upstream { status, body },
        }
    }
}

/// Gateway to the Senpex REST API
///
/// One call is one HTTP request: no retries, no caching.
#[async_trait]
pub trait SenpexApiPort: Send + Sync {
    /// Whether both credentials are available
    fn is_configured(&self) -> bool;

    /// Send a request and return the 2xx response
    async fn send(&self, request: &ExternalRequest) -> Result<ExternalResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_to_tool_error() {
        let err: ToolError = ApiError::Upstream {
            status: 401,
            body: r#"{"code":"1","message":"Invalid credentials"}"#.into(),
        }
        .into();
        assert_eq!(err.code(), "UPSTREAM");
        assert_eq!(
            err.to_string(),
            r#"HTTP 401 - {"code":"1","message":"Invalid credentials"}"#
        );

        let err: ToolError = ApiError::Transport("operation timed out".into()).into();
        assert_eq!(err.code(), "TRANSPORT");
    }
}
