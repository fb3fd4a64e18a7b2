//! reqwest adapter for [`SenpexApiPort`]

use crate::config::FileSenpexConfig;
use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use senpex_application::{ApiError, SenpexApiPort};
use senpex_domain::{ExternalRequest, ExternalResponse, HttpMethod};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure to construct the client (invalid config, TLS backend)
#[derive(Error, Debug)]
pub enum SenpexClientError {
    #[error("Invalid Senpex base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// HTTP client for the Senpex REST API.
///
/// Adds the `clientid` / `secretid` headers to every request and the
/// `Country` header to order endpoints. Non-2xx statuses are returned as
/// [`ApiError::Upstream`] with the body untouched.
#[derive(Debug, Clone)]
pub struct SenpexHttpClient {
    http: Client,
    base_url: Url,
    client_id: String,
    secret_id: String,
    country: String,
    order_path_prefix: String,
}

impl SenpexHttpClient {
    pub fn new(config: &FileSenpexConfig) -> Result<Self, SenpexClientError> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        config: &FileSenpexConfig,
        timeout: Duration,
    ) -> Result<Self, SenpexClientError> {
        let invalid = |reason: &str| SenpexClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: reason.to_string(),
        };
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| invalid(&e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("cannot be a base URL"));
        }

        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            base_url,
            client_id: config.client_id.clone().unwrap_or_default(),
            secret_id: config.secret_id.clone().unwrap_or_default(),
            country: config.country.clone(),
            order_path_prefix: config.order_path_prefix.clone(),
        })
    }

    /// Full URL with each path segment percent-encoded
    pub fn url_for(&self, request: &ExternalRequest) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(&request.path_segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        }
    }
}

#[async_trait]
impl SenpexApiPort for SenpexHttpClient {
    fn is_configured(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.secret_id.trim().is_empty()
    }

    async fn send(&self, request: &ExternalRequest) -> Result<ExternalResponse, ApiError> {
        let url = self.url_for(request)?;
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http
            .request(Self::method(request.method), url)
            .header("clientid", &self.client_id)
            .header("secretid", &self.secret_id);
        if request.path_starts_with(&self.order_path_prefix) {
            builder = builder.header("Country", &self.country);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status.is_success() {
            Ok(ExternalResponse::new(status.as_u16(), body))
        } else {
            Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: String) -> FileSenpexConfig {
        FileSenpexConfig {
            base_url,
            client_id: Some("cid".to_string()),
            secret_id: Some("sid".to_string()),
            ..FileSenpexConfig::default()
        }
    }

    fn client(server: &MockServer) -> SenpexHttpClient {
        SenpexHttpClient::new(&config(format!("{}/api/v4", server.uri()))).unwrap()
    }

    #[test]
    fn test_is_configured() {
        let configured = SenpexHttpClient::new(&config("http://localhost".into())).unwrap();
        assert!(configured.is_configured());

        let mut partial = config("http://localhost".into());
        partial.secret_id = Some(String::new());
        assert!(!SenpexHttpClient::new(&partial).unwrap().is_configured());
        assert!(
            !SenpexHttpClient::new(&FileSenpexConfig::default())
                .unwrap()
                .is_configured()
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = SenpexHttpClient::new(&config("not a url".into())).unwrap_err();
        assert!(matches!(err, SenpexClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_url_encodes_segments() {
        let client = SenpexHttpClient::new(&config("https://api.example.com/v4/".into())).unwrap();
        let request = ExternalRequest::get(["orders", "a/b c", "driver-location", ""]);
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "https://api.example.com/v4/orders/a%2Fb%20c/driver-location/"
        );

        let request = ExternalRequest::get(["order-list"]).with_query("start", "20");
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "https://api.example.com/v4/order-list?start=20"
        );
        assert_eq!(
            client.url_for(&ExternalRequest::get(["order-list"])).unwrap().as_str(),
            "https://api.example.com/v4/order-list"
        );
    }

    #[tokio::test]
    async fn test_post_sends_credentials_country_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v4/orders/dropoff/quote"))
            .and(header("clientid", "cid"))
            .and(header("secretid", "sid"))
            .and(header("Country", "US"))
            .and(body_json(json!({"user_email": "ops@example.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "0"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = ExternalRequest::post(
            ["orders", "dropoff", "quote"],
            json!({"user_email": "ops@example.com"}),
        );
        let response = client(&server).send(&request).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"code":"0"}"#);
    }

    #[tokio::test]
    async fn test_country_header_only_on_order_paths() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v4/order-list"))
            .and(query_param("start", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let request = ExternalRequest::get(["order-list"]).with_query("start", "10");
        client(&server).send(&request).await.unwrap();

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].headers.get("country").is_none());
        assert_eq!(received[0].headers.get("clientid").unwrap(), "cid");
    }

    #[tokio::test]
    async fn test_non_2xx_is_upstream_error() {
        let server = MockServer::start().await;
        let body = r#"{"code":"1","message":"Invalid credentials"}"#;
        Mock::given(method("PUT"))
            .and(path("/api/v4/points/dropoff-delivery-ready"))
            .respond_with(ResponseTemplate::new(401).set_body_string(body))
            .mount(&server)
            .await;

        let request = ExternalRequest::put(["points", "dropoff-delivery-ready"], json!({"id": "9"}));
        let err = client(&server).send(&request).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Upstream {
                status: 401,
                body: body.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = SenpexHttpClient::with_timeout(
            &config(server.uri()),
            Duration::from_millis(50),
        )
        .unwrap();
        let err = client
            .send(&ExternalRequest::get(["order-list"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = SenpexHttpClient::new(&config("http://127.0.0.1:9".into())).unwrap();
        let err = client
            .send(&ExternalRequest::get(["order-list"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
