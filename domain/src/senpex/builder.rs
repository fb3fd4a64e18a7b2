//! Request Builder: resolved tool arguments → Senpex REST request.
//!
//! All validation happens here or in [`ResolvedArguments::resolve`], so a
//! failing call never reaches the network.

use super::catalog::*;
use super::request::ExternalRequest;
use crate::core::error::ToolError;
use crate::tool::{ResolvedArguments, ToolCall, ToolDefinition};
use serde_json::{Map, Value, json};

const SCHEDULE_REQUIRED: &str =
    "schedule_date_local is required when taken_asap=0 (scheduled delivery)";
const PICKUP_REQUIRED: &str = "At least one pickup address is required";

/// Validate `call` against `definition` and build the outbound request.
///
/// Returns the resolved arguments too, since renderers echo some of them
/// (addresses, order ids, tip amount).
pub fn prepare(
    definition: &ToolDefinition,
    call: &ToolCall,
) -> Result<(ResolvedArguments, ExternalRequest), ToolError> {
    let args = ResolvedArguments::resolve(definition, call)?;
    let request = build_request(definition, &args)?;
    Ok((args, request))
}

/// Map resolved arguments to the request shape of the tool's endpoint.
pub fn build_request(
    definition: &ToolDefinition,
    args: &ResolvedArguments,
) -> Result<ExternalRequest, ToolError> {
    match definition.name.as_str() {
        GET_DROPOFF_QUOTE => dropoff_quote(args),
        GET_PICKUP_QUOTE => pickup_quote(args),
        CONFIRM_DROPOFF => confirm_dropoff(args),
        CONFIRM_PICKUP => confirm_pickup(args),
        GET_ORDER_LIST => Ok(order_list(args)),
        GET_ROUTE_DETAILS => Ok(ExternalRequest::get([
            "orders",
            "routes",
            args.require_str("route_id")?,
        ])),
        GET_ORDER_BY_TOKEN => Ok(ExternalRequest::get([
            "orders",
            "tokens",
            args.require_str("api_token")?,
        ])),
        TRACK_ORDER_BY_ID => Ok(ExternalRequest::get([
            "points",
            "dropoff",
            "track",
            args.require_str("order_id")?,
        ])),
        TRACK_ORDER_BY_ACCESS_KEY => Ok(ExternalRequest::get([
            "points",
            "dropoff",
            "track",
            "access_key",
            args.require_str("access_key")?,
        ])),
        GET_DRIVER_LOCATION => Ok(ExternalRequest::get([
            "orders",
            args.require_str("order_id")?,
            "driver-location",
            "",
        ])),
        SET_DELIVERY_READY => status_update("dropoff-delivery-ready", args),
        SET_LABORATORY_READY => status_update("dropoff-laboratory-ready", args),
        SET_DROPOFF_RECEIVED => status_update("dropoff-received", args),
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}

fn check_schedule(args: &ResolvedArguments) -> Result<(), ToolError> {
    if args.i64("taken_asap") == Some(0) && args.non_empty_str("schedule_date_local").is_none() {
        return Err(ToolError::InvalidCombination(SCHEDULE_REQUIRED.to_string()));
    }
    Ok(())
}

fn dropoff_quote(args: &ResolvedArguments) -> Result<ExternalRequest, ToolError> {
    check_schedule(args)?;

    let mut body = Map::new();
    args.copy_into("user_email", &mut body, "email");
    args.copy_into("order_name", &mut body, "order_name");
    args.copy_into("pickup_addr", &mut body, "pack_from_text");
    for key in [
        "transport_id",
        "item_value",
        "pack_size_id",
        "taken_asap",
        "payment_type",
        "order_desc",
    ] {
        args.copy_into(key, &mut body, key);
    }
    args.copy_into("pickup_instructions", &mut body, "route_desc");
    body.insert(
        "routes".to_string(),
        json!([{
            "route_to_text": args.str_or_empty("dropoff_addr"),
            "route_desc": args.str_or_empty("dropoff_instructions"),
            "rec_name": args.str_or_empty("recipient_name"),
            "rec_phone": args.str_or_empty("recipient_phone"),
        }]),
    );
    args.copy_non_empty("schedule_date_local", &mut body, "schedule_date_local");

    Ok(ExternalRequest::post(
        ["orders", "dropoff", "quote"],
        Value::Object(body),
    ))
}

fn pickup_quote(args: &ResolvedArguments) -> Result<ExternalRequest, ToolError> {
    check_schedule(args)?;

    let pickups = args.array("pickup_addresses").map(Vec::as_slice).unwrap_or(&[]);
    if pickups.is_empty() {
        return Err(ToolError::InvalidCombination(PICKUP_REQUIRED.to_string()));
    }

    let mut routes = Vec::with_capacity(pickups.len());
    for (i, pickup) in pickups.iter().enumerate() {
        let stop = pickup.as_object().ok_or_else(|| {
            ToolError::invalid("pickup_addresses", format!("entry {} is not an object", i + 1))
        })?;
        let mut route = Map::new();
        for key in ["route_to_text", "rec_name", "rec_phone", "route_desc"] {
            let value = stop.get(key).cloned().unwrap_or_else(|| Value::from(""));
            route.insert(key.to_string(), value);
        }
        routes.push(Value::Object(route));
    }

    let mut body = Map::new();
    args.copy_into("user_email", &mut body, "email");
    for key in [
        "order_name",
        "transport_id",
        "item_value",
        "pack_size_id",
        "taken_asap",
        "order_desc",
    ] {
        args.copy_into(key, &mut body, key);
    }
    args.copy_into("dropoff_instructions", &mut body, "route_desc");
    args.copy_into("dropoff_recipient_name", &mut body, "rec_name");
    args.copy_into("dropoff_recipient_phone", &mut body, "rec_phone");
    body.insert("routes".to_string(), Value::Array(routes));
    args.copy_into("show_one_price", &mut body, "show_one_price");
    args.copy_non_empty("schedule_date_local", &mut body, "schedule_date_local");
    args.copy_non_empty("promo_code", &mut body, "promo_code");

    Ok(ExternalRequest::post(
        ["orders", "pickup", "quote"],
        Value::Object(body),
    ))
}

/// Fields both confirmation calls always send, plus non-empty overrides.
fn confirmation_body(args: &ResolvedArguments, with_payment_type: bool) -> Map<String, Value> {
    let mut body = Map::new();
    args.copy_into("api_token", &mut body, "api_token");
    args.copy_into("user_email", &mut body, "email");
    if with_payment_type {
        args.copy_into("payment_type", &mut body, "payment_type");
    }
    for key in [
        "tip_amount",
        "snpx_user_email",
        "snpx_order_email",
        "snpx_order_not",
        "search_courier",
    ] {
        args.copy_into(key, &mut body, key);
    }
    for key in ["sender_name", "sender_cell", "sender_desc", "order_desc"] {
        args.copy_non_empty(key, &mut body, key);
    }
    body
}

fn confirm_dropoff(args: &ResolvedArguments) -> Result<ExternalRequest, ToolError> {
    let mut body = confirmation_body(args, true);

    let mut update = Map::new();
    args.copy_non_empty("recipient_name", &mut update, "rec_name");
    args.copy_non_empty("recipient_phone", &mut update, "rec_phone");
    if !update.is_empty() {
        body.insert("routes".to_string(), json!([update]));
    }

    Ok(ExternalRequest::put(["orders", "dropoff"], Value::Object(body)))
}

fn confirm_pickup(args: &ResolvedArguments) -> Result<ExternalRequest, ToolError> {
    let mut body = confirmation_body(args, false);

    let mut routes = Vec::new();
    for (i, entry) in args.array("pickup_updates").into_iter().flatten().enumerate() {
        let entry = entry.as_object().ok_or_else(|| {
            ToolError::invalid("pickup_updates", format!("entry {} is not an object", i + 1))
        })?;
        let update: Map<String, Value> = ["rec_name", "rec_phone"]
            .into_iter()
            .filter_map(|key| {
                entry
                    .get(key)
                    .filter(|v| !v.is_null())
                    .map(|v| (key.to_string(), v.clone()))
            })
            .collect();
        if !update.is_empty() {
            routes.push(Value::Object(update));
        }
    }
    if !routes.is_empty() {
        body.insert("routes".to_string(), Value::Array(routes));
    }

    Ok(ExternalRequest::put(["orders", "pickup"], Value::Object(body)))
}

fn order_list(args: &ResolvedArguments) -> ExternalRequest {
    let request = ExternalRequest::get(["order-list"]);
    match args.i64("start") {
        Some(start) if start > 0 => request.with_query("start", start.to_string()),
        _ => request,
    }
}

fn status_update(endpoint: &str, args: &ResolvedArguments) -> Result<ExternalRequest, ToolError> {
    let order_id = args.require_str("order_id")?;
    Ok(ExternalRequest::put(
        ["points", endpoint],
        json!({ "id": order_id }),
    ))
}
