//! Shared helpers for tool use cases.

use senpex_domain::core::string::truncate;
use senpex_domain::tool::ToolCall;

/// Extract a short preview string from tool call arguments for log lines.
///
/// Looks for identifying keys (`order_id`, `route_id`, `access_key`,
/// `pickup_addr`, `order_name`) first, then falls back to the first string
/// value found. Tokens and e-mail addresses are never previewed.
pub(crate) fn tool_args_preview(call: &ToolCall) -> String {
    let keys = ["order_id", "route_id", "access_key", "pickup_addr", "order_name"];
    for key in &keys {
        if let Some(serde_json::Value::String(s)) = call.arguments.get(*key) {
            return truncate(s, 50);
        }
    }
    call.arguments
        .iter()
        .filter(|(k, _)| !is_sensitive(k))
        .find_map(|(_, v)| v.as_str())
        .map(|s| truncate(s, 50))
        .unwrap_or_default()
}

fn is_sensitive(key: &str) -> bool {
    key.contains("token") || key.contains("email") || key.contains("phone")
}
