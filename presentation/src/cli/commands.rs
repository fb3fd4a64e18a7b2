//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `tools`, `call` and `chat`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for senpex-mcp
#[derive(Parser, Debug)]
#[command(name = "senpex-mcp")]
#[command(author, version, about = "MCP server for the Senpex delivery API")]
#[command(long_about = r#"
senpex-mcp exposes the Senpex courier API (quotes, orders, tracking,
status updates) as MCP tools over stdio or HTTP/SSE.

Credentials are read from SENPEX_CLIENT_ID and SENPEX_SECRET_ID.

Configuration files are loaded from (in priority order):
1. SENPEX_* environment variables
2. --config <path>         Explicit config file
3. ./senpex-mcp.toml       Project-level config
4. ~/.config/senpex-mcp/config.toml   Global config

Example:
  senpex-mcp stdio
  senpex-mcp serve --bind 127.0.0.1:8080
  senpex-mcp call track_order_by_id --args '{"order_id": "12345"}'
  senpex-mcp chat "Get a quote from 123 Market St, SF to 456 Main St, LA"
"#)]
pub struct Cli {
    /// What to run (defaults to `stdio`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and validation issues, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve MCP over HTTP with an SSE notification channel
    Serve {
        /// Listen address (overrides `[server] bind`)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Serve MCP over stdin/stdout
    Stdio,
    /// List the available tools
    Tools,
    /// Call one tool and print the result
    Call {
        /// Tool name or alias
        tool: String,
        /// Arguments as a JSON object
        #[arg(short, long, value_name = "JSON", default_value = "{}")]
        args: String,
    },
    /// Answer a free-text message
    Chat {
        /// The message (several words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Stdio)
    }
}
