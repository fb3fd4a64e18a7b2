//! Configuration file loading for senpex-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SENPEX_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./senpex-mcp.toml` or `./.senpex-mcp.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/senpex-mcp/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BASE_URL, FileChatConfig, FileConfig, FileSenpexConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
