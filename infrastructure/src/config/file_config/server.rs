//! HTTP/SSE server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address, `host:port`
    pub bind: String,
    /// Seconds between SSE heartbeat events
    pub heartbeat_secs: u64,
    /// Buffered SSE events per subscriber before lagging ones are dropped
    pub event_buffer: usize,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            heartbeat_secs: 15,
            event_buffer: 64,
        }
    }
}
