//! Infrastructure layer for senpex-mcp
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the reqwest client for the Senpex API and
//! configuration file loading.

pub mod config;
pub mod senpex;

// Re-export commonly used types
pub use config::{
    ConfigLoader, DEFAULT_BASE_URL, FileChatConfig, FileConfig, FileSenpexConfig,
    FileServerConfig,
};
pub use senpex::{SenpexClientError, SenpexHttpClient};
