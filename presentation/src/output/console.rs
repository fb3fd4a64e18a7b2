//! Console output formatter for tools, tool results and chat replies

use colored::Colorize;
use senpex_application::ChatReply;
use senpex_domain::ConfigIssue;
use senpex_domain::core::validation::Severity;
use senpex_domain::tool::{RenderedResult, ToolDefinition};
use serde::Serialize;

/// Formats CLI output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Tool catalogue with required parameters
    pub fn format_tools<'a>(tools: impl IntoIterator<Item = &'a ToolDefinition>) -> String {
        let mut output = Self::header("Senpex MCP Tools");
        output.push('\n');

        for tool in tools {
            output.push_str(&format!("\n{}\n", tool.name.yellow().bold()));
            output.push_str(&format!("  {}\n", tool.description));

            let required: Vec<&str> = tool
                .required_parameters()
                .map(|p| p.name.as_str())
                .collect();
            if !required.is_empty() {
                output.push_str(&format!(
                    "  {} {}\n",
                    "required:".dimmed(),
                    required.join(", ")
                ));
            }
        }

        output
    }

    /// One tool result; errors are highlighted
    pub fn format_result(result: &RenderedResult) -> String {
        let title = if result.is_error {
            format!("── {} (failed) ──", result.tool_name).red().bold()
        } else {
            format!("── {} ──", result.tool_name).green().bold()
        };
        format!("{}\n{}\n", title, result.text)
    }

    /// Chat reply followed by the tool calls it made
    pub fn format_chat(reply: &ChatReply) -> String {
        let mut output = format!(
            "{} {}\n\n{}\n",
            "Intent:".cyan().bold(),
            reply.intent,
            reply.response
        );

        if !reply.tool_calls.is_empty() {
            output.push_str(&format!("\n{}\n", "Tool calls:".dimmed()));
            for call in &reply.tool_calls {
                let marker = if call.result.is_error {
                    "✗".red()
                } else {
                    "✓".green()
                };
                output.push_str(&format!("  {} {}\n", marker, call.name));
            }
        }

        output
    }

    /// Configuration issues, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}\n", "error:".red().bold(), issue.message),
                Severity::Warning => {
                    format!("{} {}\n", "warning:".yellow().bold(), issue.message)
                }
            })
            .collect()
    }

    /// Pretty JSON for `--output json`
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
