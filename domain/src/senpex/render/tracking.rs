use super::Payload;
use super::format::{TextBlock, display, present};
use super::orders::coordinates;
use crate::tool::ResolvedArguments;
use serde_json::Value;

/// Tracking listing for an order id or access key
pub(super) fn track(payload: &Payload<'_>, key_label: &str, key: &str) -> String {
    let Some(items) = payload.data_array() else {
        return payload.unexpected("Tracking");
    };
    if items.is_empty() {
        return "No tracking information found.".to_string();
    }

    let mut out = TextBlock::new();
    out.line(format!("Order Tracking ({}: {}):", key_label, key)).blank();
    for item in items {
        out.field("Delivery ID", item.get("id"))
            .field("Address", item.get("rec_address"))
            .field("Recipient", item.get("rec_name"))
            .field("Phone", item.get("rec_phone"))
            .field("Pack Status", item.get("pack_status"))
            .field("Route Status", item.get("route_status"));

        if let Some(name) = present(item.get("courier_name")) {
            out.blank()
                .line("Courier Information:")
                .line(format!("  Name: {}", full_name(name, item.get("courier_surname"))))
                .field("  Phone", item.get("courier_cell"));
        }

        if located(item) {
            out.blank().line("Last Known Location:");
            coordinates(&mut out, "  Coordinates", item, "last_lat", "last_lng");
            out.field("  Updated", item.get("last_location_date"));
        }

        if let Some(code) = present(item.get("tracking_code")) {
            out.blank().line(format!("Tracking Code: {}", display(code)));
        }
        out.blank();
    }
    out.finish()
}

pub(super) fn driver(payload: &Payload<'_>, args: &ResolvedArguments) -> String {
    let order_id = args.str_or_empty("order_id");
    if payload.get("code").is_none() {
        return payload.unexpected("Driver location");
    }
    let Some(data) = present(payload.get("data")).filter(|d| d.is_object()) else {
        return format!("No driver assigned to order {} yet.", order_id);
    };

    let mut out = TextBlock::new();
    out.line(format!("Driver Details for Order {}:", order_id))
        .blank()
        .field("Package Status", data.get("pack_status"))
        .field("Order Status", data.get("order_status"))
        .blank();

    let driver: Vec<String> = [data.get("courier_name"), data.get("courier_surname")]
        .into_iter()
        .filter_map(present)
        .map(display)
        .collect();
    if !driver.is_empty() {
        out.line(format!("Driver: {}", driver.join(" ")));
    }
    out.field("Phone", data.get("courier_phone_number")).blank();

    if located(data) {
        out.line("Current Location:");
        coordinates(&mut out, "  GPS Coordinates", data, "last_lat", "last_lng");
        out.field("  Timezone", data.get("last_timezone"))
            .field_with("  Location Updated", data.get("last_location_date"), utc)
            .field_with("  Last Seen", data.get("last_seen_date"), utc);
    } else {
        out.line("Location: Not available yet");
    }

    out.blank()
        .line("Notification Settings:")
        .line(format!("  Email: {}", enabled(data.get("snpx_email"))))
        .line(format!("  Push Notifications: {}", enabled(data.get("snpx_nots"))))
        .line(format!("  SMS: {}", enabled(data.get("snpx_sms"))))
        .line(format!(
            "  Instant Notifications: {}",
            enabled(data.get("snpx_instant_not"))
        ))
        .field("  Instant Notification URL", data.get("instant_not_url"));
    out.finish()
}

fn located(item: &Value) -> bool {
    present(item.get("last_lat")).is_some() && present(item.get("last_lng")).is_some()
}

fn full_name(name: &Value, surname: Option<&Value>) -> String {
    match present(surname) {
        Some(surname) => format!("{} {}", display(name), display(surname)),
        None => display(name),
    }
}

fn utc(value: &Value) -> String {
    format!("{} (UTC)", display(value))
}

/// Senpex flags are `1` when on; anything else reads as disabled
fn enabled(flag: Option<&Value>) -> &'static str {
    let on = match flag {
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => s == "1",
        Some(Value::Bool(b)) => *b,
        _ => false,
    };
    if on { "Enabled" } else { "Disabled" }
}
