//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys fall back to their defaults.

mod chat;
mod senpex;
mod server;

pub use chat::FileChatConfig;
pub use senpex::{DEFAULT_BASE_URL, FileSenpexConfig};
pub use server::FileServerConfig;

use reqwest::Url;
use senpex_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Senpex API endpoint and credentials
    pub senpex: FileSenpexConfig,
    /// HTTP/SSE transport settings
    pub server: FileServerConfig,
    /// Chat entry point settings
    pub chat: FileChatConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue is a warning: missing credentials still let the server
    /// start and answer each tool call with a configuration error.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match Url::parse(&self.senpex.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidValue {
                    field: "senpex.base_url".to_string(),
                    value: self.senpex.base_url.clone(),
                },
                format!(
                    "senpex.base_url: '{}' is not an http(s) URL",
                    self.senpex.base_url
                ),
            )),
        }

        if !self.senpex.has_credentials() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingCredentials,
                "Senpex credentials are not set; every tool call will fail until \
                 SENPEX_CLIENT_ID and SENPEX_SECRET_ID are provided",
            ));
        }

        if self.server.bind.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "server.bind".to_string(),
                },
                "server.bind is empty",
            ));
        }

        if self.server.heartbeat_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidValue {
                    field: "server.heartbeat_secs".to_string(),
                    value: "0".to_string(),
                },
                "server.heartbeat_secs must be at least 1",
            ));
        }

        if self.chat.default_email.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "chat.default_email".to_string(),
                },
                "chat.default_email is empty; chat quotes will be rejected",
            ));
        }

        issues
    }
}
