//! CLI entrypoint for senpex-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use senpex_application::{HandleChatUseCase, ToolDispatcher, ToolExecutorPort};
use senpex_domain::IntentClassifier;
use senpex_infrastructure::{ConfigLoader, FileConfig, SenpexHttpClient};
use senpex_presentation::{
    AppState, Cli, Command, ConsoleFormatter, McpHandler, OutputFormat, ServerOptions, serve,
    serve_stdio,
};
use serde_json::Value;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        let issues = load_config(&cli)?.validate();
        if !issues.is_empty() {
            print!("\n{}", ConsoleFormatter::format_issues(&issues));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;
    info!("Starting senpex-mcp");

    let config = load_config(&cli)?;
    for issue in config.validate() {
        warn!("{}", issue);
    }

    // === Dependency Injection ===
    let client = SenpexHttpClient::new(&config.senpex)?;
    let dispatcher: Arc<dyn ToolExecutorPort> = Arc::new(ToolDispatcher::new(Arc::new(client)));
    let classifier = Arc::new(IntentClassifier::new(
        config.chat.default_email.clone(),
        dispatcher.tool_spec(),
    )?);

    let shutdown = CancellationToken::new();
    spawn_signal_handler(shutdown.clone());

    match cli.command() {
        Command::Stdio => {
            serve_stdio(McpHandler::new(dispatcher), shutdown).await?;
        }
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.server.bind.clone());
            let options = ServerOptions {
                heartbeat: Duration::from_secs(config.server.heartbeat_secs),
                event_buffer: config.server.event_buffer,
            };
            let state = Arc::new(AppState::new(dispatcher, classifier, options, shutdown));
            serve(state, &addr).await?;
        }
        Command::Tools => {
            let spec = dispatcher.tool_spec();
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_tools(spec.all()),
                OutputFormat::Json => ConsoleFormatter::format_json(
                    &McpHandler::new(dispatcher.clone()).list_tools(),
                ),
            };
            println!("{}", output);
        }
        Command::Call { tool, args } => {
            let arguments: Value =
                serde_json::from_str(&args).context("--args must be valid JSON")?;
            let result = dispatcher.call(&tool, arguments).await;
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_result(&result),
                OutputFormat::Json => ConsoleFormatter::format_json(&result),
            };
            println!("{}", output);
            if result.is_error {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Chat { message } => {
            let chat = HandleChatUseCase::new(classifier, dispatcher);
            let reply = chat.execute(&message.join(" ")).await;
            let output = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_chat(&reply),
                OutputFormat::Json => ConsoleFormatter::format_json(&reply),
            };
            println!("{}", output);
            if reply.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr (stdout belongs to the stdio transport), plus a daily
/// file when `log_dir` is set. `-v` wins over `RUST_LOG`.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "senpex-mcp.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    config.context("Failed to load configuration")
}

fn spawn_signal_handler(shutdown: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            shutdown.cancel();
        }
    });
}
