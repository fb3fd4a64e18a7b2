//! Newline-delimited JSON-RPC over stdin/stdout
//!
//! stdout carries protocol messages only; logs go to stderr.

use super::handler::McpHandler;
use super::protocol::{JsonRpcResponse, PARSE_ERROR};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Serve MCP on the process's stdin/stdout until EOF or cancellation
pub async fn serve_stdio(handler: McpHandler, cancel: CancellationToken) -> std::io::Result<()> {
    info!("MCP stdio transport started");
    let result = run(
        &handler,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        cancel,
    )
    .await;
    info!("MCP stdio transport stopped");
    result
}

/// Read one request per line and write one response per line.
///
/// Blank lines are skipped; notifications produce no output. A line that is
/// not valid UTF-8 gets a `-32700` reply and the session continues.
pub async fn run<R, W>(
    handler: &McpHandler,
    reader: R,
    mut writer: W,
    cancel: CancellationToken,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = reader;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            read = reader.read_until(b'\n', &mut buf) => read?,
        };
        if read == 0 {
            debug!("stdin closed");
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                handler.handle_message(line).await
            }
            Err(e) => {
                warn!("Discarding non UTF-8 stdin line: {}", e);
                Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ))
            }
        };

        if let Some(response) = response {
            let mut out = serde_json::to_string(&response)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }
    }
    Ok(())
}
