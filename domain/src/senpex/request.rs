//! Outbound request and inbound response shapes for the Senpex REST API.

use serde_json::Value;
use std::fmt;

/// HTTP verb of a Senpex endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to send to the Senpex API, relative to the configured base URL.
///
/// The path is kept as raw segments so the HTTP adapter can percent-encode
/// caller-supplied identifiers (`order_id`, `api_token`, ...) one segment at
/// a time. An empty trailing segment produces a trailing slash.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalRequest {
    pub method: HttpMethod,
    pub path_segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ExternalRequest {
    pub fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            path_segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Get, segments)
    }

    pub fn post<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Post, segments).with_body(body)
    }

    pub fn put<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Put, segments).with_body(body)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Unencoded path, always starting with `/` (e.g. `/orders/dropoff/quote`)
    pub fn path(&self) -> String {
        format!("/{}", self.path_segments.join("/"))
    }

    /// Whether the path lies under `prefix` (e.g. `/orders/`)
    pub fn path_starts_with(&self, prefix: &str) -> bool {
        self.path().starts_with(prefix)
    }
}

/// A 2xx response from the Senpex API.
///
/// Non-2xx responses never reach the renderer; the API adapter turns them
/// into errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalResponse {
    pub status: u16,
    pub body: String,
}

impl ExternalResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with a JSON body (mostly for tests and fixtures)
    pub fn ok_json(body: &Value) -> Self {
        Self::new(200, body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_rendering() {
        let req = ExternalRequest::post(["orders", "dropoff", "quote"], json!({}));
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path(), "/orders/dropoff/quote");
        assert!(req.path_starts_with("/orders/"));
    }

    #[test]
    fn test_trailing_slash_segment() {
        let req = ExternalRequest::get(["orders", "42", "driver-location", ""]);
        assert_eq!(req.path(), "/orders/42/driver-location/");
    }

    #[test]
    fn test_order_list_is_not_under_orders_prefix() {
        let req = ExternalRequest::get(["order-list"]).with_query("start", "20");
        assert!(!req.path_starts_with("/orders/"));
        assert_eq!(req.query, vec![("start".to_string(), "20".to_string())]);
    }
}
