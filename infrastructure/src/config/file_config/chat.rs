//! Chat configuration from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// `user_email` used for quotes planned from chat messages
    pub default_email: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            default_email: "demo@example.com".to_string(),
        }
    }
}
