//! Response Renderer: Senpex JSON payloads → human-readable text.
//!
//! Rendering is a pure function of the tool definition, the resolved
//! arguments and the response body. Envelopes carrying a non-zero `code`
//! become [`ToolError::Upstream`]; payloads without the expected shape are
//! echoed as `<Label> response: <raw>`.

pub mod format;
mod orders;
mod quote;
mod status;
mod tracking;

use super::catalog::*;
use super::request::ExternalResponse;
use crate::core::error::ToolError;
use crate::tool::{ResolvedArguments, ToolDefinition};
use serde_json::Value;

/// Parsed response body plus the raw text for fallbacks.
pub(crate) struct Payload<'a> {
    pub json: Value,
    pub raw: &'a str,
}

impl Payload<'_> {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.json.get(key)
    }

    /// The `data` member as an array, if it is one
    pub fn data_array(&self) -> Option<&Vec<Value>> {
        self.get("data").and_then(Value::as_array)
    }

    pub fn unexpected(&self, label: &str) -> String {
        format!("{} response: {}", label, self.raw)
    }
}

/// Render a successful (2xx) Senpex response for `definition`.
pub fn render(
    definition: &ToolDefinition,
    args: &ResolvedArguments,
    response: &ExternalResponse,
) -> Result<String, ToolError> {
    let label = fallback_label(&definition.name);
    let json: Value = match serde_json::from_str(&response.body) {
        Ok(json) => json,
        Err(_) => return Ok(format!("{} response: {}", label, response.body)),
    };

    if let Some(code) = json.get("code")
        && !is_success_code(code)
    {
        return Err(ToolError::Upstream {
            status: response.status,
            body: response.body.clone(),
        });
    }

    let payload = Payload {
        json,
        raw: &response.body,
    };

    let text = match definition.name.as_str() {
        GET_DROPOFF_QUOTE => quote::dropoff(&payload, args),
        GET_PICKUP_QUOTE => quote::pickup(&payload, args),
        CONFIRM_DROPOFF => orders::confirmation(&payload, args, orders::Confirm::Dropoff),
        CONFIRM_PICKUP => orders::confirmation(&payload, args, orders::Confirm::Pickup),
        GET_ORDER_LIST => orders::list(&payload, args),
        GET_ROUTE_DETAILS => orders::route_details(&payload, args),
        GET_ORDER_BY_TOKEN => orders::by_token(&payload, args),
        TRACK_ORDER_BY_ID => tracking::track(&payload, "ID", args.str_or_empty("order_id")),
        TRACK_ORDER_BY_ACCESS_KEY => {
            tracking::track(&payload, "Access Key", args.str_or_empty("access_key"))
        }
        GET_DRIVER_LOCATION => tracking::driver(&payload, args),
        SET_DELIVERY_READY => status::update(&payload, args, "ready for delivery"),
        SET_LABORATORY_READY => {
            status::update(&payload, args, "ready for pick-up from laboratory")
        }
        SET_DROPOFF_RECEIVED => status::update(&payload, args, "received at drop-off location"),
        other => return Err(ToolError::UnknownTool(other.to_string())),
    };
    Ok(text)
}

/// `"0"` and `0` mean success; anything else is an embedded error
fn is_success_code(code: &Value) -> bool {
    match code {
        Value::String(s) => s.trim() == "0",
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Null => true,
        _ => false,
    }
}

fn fallback_label(tool: &str) -> &'static str {
    match tool {
        GET_DROPOFF_QUOTE | GET_PICKUP_QUOTE => "Quote",
        CONFIRM_DROPOFF | CONFIRM_PICKUP => "Order creation",
        GET_ORDER_LIST => "Order list",
        GET_ROUTE_DETAILS => "Route details",
        GET_ORDER_BY_TOKEN => "Order",
        TRACK_ORDER_BY_ID | TRACK_ORDER_BY_ACCESS_KEY => "Tracking",
        GET_DRIVER_LOCATION => "Driver location",
        _ => "Status update",
    }
}
