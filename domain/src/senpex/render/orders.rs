use super::Payload;
use super::format::{TextBlock, display, miles, money, present, seconds};
use crate::tool::ResolvedArguments;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Confirm {
    Dropoff,
    Pickup,
}

pub(super) fn confirmation(payload: &Payload<'_>, args: &ResolvedArguments, kind: Confirm) -> String {
    let data = &payload.json;
    if data.get("code").is_none() {
        return payload.unexpected("Order creation");
    }

    let (title, distance_label, subject) = match kind {
        Confirm::Dropoff => ("Order Confirmed Successfully!", "Distance", "Your order"),
        Confirm::Pickup => (
            "Pickup Order Confirmed Successfully!",
            "Total Distance",
            "Your pickup order",
        ),
    };

    let mut out = TextBlock::new();
    out.line(title)
        .blank()
        .field("Order ID", data.get("inserted_id"))
        .field_with(distance_label, data.get("distance"), miles)
        .field_with("Estimated Time", data.get("distance_time"), seconds)
        .field_with("Tip Added", args.value("tip_amount"), money);

    let next = if args.i64("search_courier") == Some(1) {
        "the system is now searching for a courier."
    } else {
        "is waiting for manual courier assignment."
    };
    out.blank()
        .line(format!("{} has been created and {}", subject, next));
    out.finish()
}

pub(super) fn list(payload: &Payload<'_>, args: &ResolvedArguments) -> String {
    let Some(orders) = payload.data_array() else {
        return payload.unexpected("Order list");
    };
    if orders.is_empty() {
        return "No orders found.".to_string();
    }

    let mut out = TextBlock::new();
    out.line(format!(
        "Orders List (starting from row {}):",
        args.i64("start").unwrap_or(0)
    ))
    .blank();

    for order in orders {
        out.field("Order ID", order.get("id"))
            .field("  Name", order.get("order_name"));
        if let Some(status) = present(order.get("order_status_text")) {
            let id = present(order.get("pack_status"))
                .map(|s| format!(" (ID: {})", display(s)))
                .unwrap_or_default();
            out.line(format!("  Status: {}{}", display(status), id));
        }
        out.field("  From", order.get("pack_from_text"))
            .field("  To", order.get("last_pack_to_text"));
        person(&mut out, "  Recipient", order, "last_receiver_name", "last_receiver_phone_number");
        out.field_with("  Price", order.get("pack_price"), money)
            .field_with("  Distance", order.get("distance_miles"), miles);
        if let Some(name) = present(order.get("courier_name")) {
            let mut courier = display(name);
            if let Some(surname) = present(order.get("courier_surname")) {
                courier.push(' ');
                courier.push_str(&display(surname));
            }
            if let Some(cell) = present(order.get("courier_cell")) {
                courier.push_str(&format!(" ({})", display(cell)));
            }
            out.line(format!("  Courier: {}", courier));
        }
        out.blank();
    }
    out.finish()
}

pub(super) fn route_details(payload: &Payload<'_>, args: &ResolvedArguments) -> String {
    let Some(routes) = payload.data_array() else {
        return payload.unexpected("Route details");
    };
    if routes.is_empty() {
        return "No route details found.".to_string();
    }

    let mut out = TextBlock::new();
    out.line(format!("Route Details (ID: {}):", args.str_or_empty("route_id")))
        .blank();
    for route in routes {
        out.field("Address", route.get("route_to_text"));
        coordinates(&mut out, "Location", route, "route_to_lat", "route_to_lng");
        out.field("Recipient", route.get("rec_name"))
            .field("Phone", route.get("rec_phone"))
            .field("Status", route.get("route_status"))
            .field_with("Distance", route.get("route_distance"), miles)
            .field_with("Travel Time", route.get("route_distance_time"), |v| {
                format!("{} seconds", display(v))
            })
            .field("Delivery Date", route.get("route_delivery_date"))
            .blank();
    }
    out.finish()
}

pub(super) fn by_token(payload: &Payload<'_>, args: &ResolvedArguments) -> String {
    let Some(orders) = payload.data_array() else {
        return payload.unexpected("Order");
    };
    let Some(order) = orders.first() else {
        return "No order found with this token.".to_string();
    };

    let mut out = TextBlock::new();
    out.line(format!(
        "Order Details (Token: {}):",
        args.str_or_empty("api_token")
    ))
    .blank()
    .field("Order ID", order.get("pack_id"))
    .field("Order Name", order.get("order_name"))
    .field_with("Price", order.get("order_price"), money)
    .field_with("Original Price", order.get("original_order_price"), money)
    .field_with("Discount", order.get("order_discount"), money);

    if let Some(tariff) = present(order.get("tariff_name")) {
        let desc = present(order.get("tariff_desc"))
            .map(|d| format!(" - {}", display(d)))
            .unwrap_or_default();
        out.line(format!("Tariff: {}{}", display(tariff), desc));
    }

    out.field("From", order.get("pack_from_text"))
        .field_with("Distance", order.get("distance_miles"), miles)
        .field_with("Duration", order.get("distance_time_seconds"), |v| {
            format!("{} seconds", display(v))
        })
        .field("Route Count", order.get("route_count"))
        .field("Package Size", order.get("pack_size_id"))
        .field("Transport", order.get("transport_id"))
        .field_with("Item Value", order.get("item_value"), money)
        .field("Schedule Date", order.get("schedule_date"))
        .field("Expires", order.get("expires_date"));

    if let Some(routes) = present(order.get("routes_json")).and_then(Value::as_array) {
        out.blank().line("Routes:");
        for (i, route) in routes.iter().enumerate() {
            out.line(format!(
                "  {}. {}",
                i + 1,
                route.get("route_to_text").map(display).unwrap_or_default()
            ));
            person(&mut out, "     Recipient", route, "rec_name", "rec_phone");
        }
    }
    out.finish()
}

/// `<label>: <name> (<phone>)`, phone part only when present
pub(super) fn person(out: &mut TextBlock, label: &str, item: &Value, name: &str, phone: &str) {
    if let Some(name) = present(item.get(name)) {
        let phone = present(item.get(phone))
            .map(|p| format!(" ({})", display(p)))
            .unwrap_or_default();
        out.line(format!("{}: {}{}", label, display(name), phone));
    }
}

/// `<label>: (<lat>, <lng>)` when both coordinates are present
pub(super) fn coordinates(out: &mut TextBlock, label: &str, item: &Value, lat: &str, lng: &str) {
    if let (Some(lat), Some(lng)) = (present(item.get(lat)), present(item.get(lng))) {
        out.line(format!("{}: ({}, {})", label, display(lat), display(lng)));
    }
}
