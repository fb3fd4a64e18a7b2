//! Presentation layer for senpex-mcp
//!
//! This crate contains the CLI definitions, the MCP transports (stdio and
//! JSON-RPC handling), the axum HTTP/SSE server and console output.

pub mod cli;
pub mod mcp;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use mcp::{McpHandler, serve_stdio};
pub use output::console::ConsoleFormatter;
pub use server::{AppState, ServerError, ServerOptions, build_app, serve};
