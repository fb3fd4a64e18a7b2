//! Senpex API configuration from TOML (`[senpex]` section)

use serde::{Deserialize, Serialize};

/// Sandbox endpoint of the Senpex REST API
pub const DEFAULT_BASE_URL: &str = "https://api.sandbox.senpex.com/api/restfull/v4";

/// Raw Senpex API configuration from TOML
///
/// Credentials normally come from `SENPEX_CLIENT_ID` / `SENPEX_SECRET_ID`;
/// the loader maps those variables onto this section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSenpexConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    pub client_id: Option<String>,
    pub secret_id: Option<String>,
    /// Value of the `Country` header on order endpoints
    pub country: String,
    /// Requests whose path starts with this prefix carry the `Country` header
    pub order_path_prefix: String,
}

impl Default for FileSenpexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: None,
            secret_id: None,
            country: "US".to_string(),
            order_path_prefix: "/orders/".to_string(),
        }
    }
}

impl FileSenpexConfig {
    /// Both credentials present and non-empty
    pub fn has_credentials(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.client_id) && set(&self.secret_id)
    }
}
