//! The Senpex tool catalogue.
//!
//! Every parameter default is declared here and nowhere else; request
//! builders read optional values through [`ResolvedArguments`](crate::tool::ResolvedArguments).

use crate::tool::{ParamType, ToolDefinition, ToolParameter, ToolSpec};

pub const GET_DROPOFF_QUOTE: &str = "get_dropoff_quote";
pub const GET_PICKUP_QUOTE: &str = "get_pickup_quote";
pub const CONFIRM_DROPOFF: &str = "confirm_dropoff";
pub const CONFIRM_PICKUP: &str = "confirm_pickup";
pub const GET_ORDER_LIST: &str = "get_order_list";
pub const GET_ROUTE_DETAILS: &str = "get_route_details";
pub const GET_ORDER_BY_TOKEN: &str = "get_order_by_token";
pub const TRACK_ORDER_BY_ID: &str = "track_order_by_id";
pub const TRACK_ORDER_BY_ACCESS_KEY: &str = "track_order_by_access_key";
pub const GET_DRIVER_LOCATION: &str = "get_driver_location";
pub const SET_DELIVERY_READY: &str = "set_delivery_ready";
pub const SET_LABORATORY_READY: &str = "set_laboratory_ready";
pub const SET_DROPOFF_RECEIVED: &str = "set_dropoff_received";

/// Canonical tool names in registration order
pub const TOOL_NAMES: [&str; 13] = [
    GET_DROPOFF_QUOTE,
    GET_PICKUP_QUOTE,
    CONFIRM_DROPOFF,
    CONFIRM_PICKUP,
    GET_ORDER_LIST,
    GET_ROUTE_DETAILS,
    GET_ORDER_BY_TOKEN,
    TRACK_ORDER_BY_ID,
    TRACK_ORDER_BY_ACCESS_KEY,
    GET_DRIVER_LOCATION,
    SET_DELIVERY_READY,
    SET_LABORATORY_READY,
    SET_DROPOFF_RECEIVED,
];

const TRANSPORT_DESC: &str =
    "Transport type ID (1=Car, 3=SUV, 8=Pickup Truck, 9=Large Van, etc.)";
const PACK_SIZE_DESC: &str = "Package size ID (1=Small 1-25lbs, 2=Medium 26-50lbs, \
     3=Large 51-70lbs, 4=Heavy 71-150lbs)";
const SCHEDULE_DESC: &str =
    "Schedule date in UTC format \"YYYY-MM-DD HH:MM\" (required if taken_asap=0)";

/// Build the full Senpex tool registry with its aliases.
pub fn senpex_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(dropoff_quote())
        .register(pickup_quote())
        .register(confirm_dropoff())
        .register(confirm_pickup())
        .register(order_list())
        .register(single_id(
            GET_ROUTE_DETAILS,
            "Get detailed information about a specific route: address, status, \
             recipient, distance and delivery date.",
            "route_id",
            "The route ID to retrieve details for",
        ))
        .register(single_id(
            GET_ORDER_BY_TOKEN,
            "Get order details (pricing, routes, schedule) using the API token of a \
             previously quoted or created order.",
            "api_token",
            "The API token associated with the order",
        ))
        .register(single_id(
            TRACK_ORDER_BY_ID,
            "Track order status using the order ID: status, courier details and \
             real-time location.",
            "order_id",
            "The order ID to track",
        ))
        .register(single_id(
            TRACK_ORDER_BY_ACCESS_KEY,
            "Track order status using the order's access key.",
            "access_key",
            "The access key associated with the order",
        ))
        .register(single_id(
            GET_DRIVER_LOCATION,
            "Get driver details and real-time location for an order. Reports when no \
             driver is assigned yet.",
            "order_id",
            "The order ID to get driver information for",
        ))
        .register(single_id(
            SET_DELIVERY_READY,
            "Mark an order as ready for delivery (after creation, for drafts, or after \
             a failed or returned delivery attempt).",
            "order_id",
            "The order ID to mark as ready for delivery",
        ))
        .register(single_id(
            SET_LABORATORY_READY,
            "Change order status from 'Delivered to recipient' to 'Ready for pick-up'.",
            "order_id",
            "The order ID to mark as ready for pick-up from laboratory",
        ))
        .register(single_id(
            SET_DROPOFF_RECEIVED,
            "Change order status from 'Delivered to laboratory' to 'Drop-off received'.",
            "order_id",
            "The order ID to mark as received at drop-off location",
        ))
        .register_aliases([
            ("track_order", TRACK_ORDER_BY_ID),
            ("quote", GET_DROPOFF_QUOTE),
            ("order_list", GET_ORDER_LIST),
        ])
}

fn integer(name: &str, description: &str, default: i64) -> ToolParameter {
    ToolParameter::optional(name, description)
        .with_type(ParamType::Integer)
        .with_default(default)
}

fn number(name: &str, description: &str, default: f64) -> ToolParameter {
    ToolParameter::optional(name, description)
        .with_type(ParamType::Number)
        .with_default(default)
}

fn text(name: &str, description: &str, default: &str) -> ToolParameter {
    ToolParameter::optional(name, description).with_default(default)
}

fn single_id(tool: &str, description: &str, param: &str, param_desc: &str) -> ToolDefinition {
    ToolDefinition::new(tool, description).with_parameter(ToolParameter::required(param, param_desc))
}

fn dropoff_quote() -> ToolDefinition {
    ToolDefinition::new(
        GET_DROPOFF_QUOTE,
        "Get a quote price for a single pickup and dropoff delivery.",
    )
    .with_parameter(ToolParameter::required(
        "user_email",
        "Email address of the user requesting the quote",
    ))
    .with_parameter(ToolParameter::required(
        "pickup_addr",
        "Pick-up address (full address string)",
    ))
    .with_parameter(ToolParameter::required(
        "dropoff_addr",
        "Drop-off address (full address string)",
    ))
    .with_parameter(text("recipient_name", "Name of the recipient", "Recipient"))
    .with_parameter(text(
        "recipient_phone",
        "Phone number of recipient with country code",
        "+1234567890",
    ))
    .with_parameter(text("order_name", "Name/title for the order", "Delivery Order"))
    .with_parameter(integer("transport_id", TRANSPORT_DESC, 1))
    .with_parameter(integer("pack_size_id", PACK_SIZE_DESC, 1))
    .with_parameter(number("item_value", "Declared value of items in USD", 100.0))
    .with_parameter(integer(
        "taken_asap",
        "1 for urgent/immediate delivery, 0 for scheduled",
        1,
    ))
    .with_parameter(integer("payment_type", "Payment type", 5))
    .with_parameter(text(
        "order_desc",
        "Description of the package",
        "Package delivery",
    ))
    .with_parameter(text(
        "pickup_instructions",
        "Special instructions for pickup",
        "",
    ))
    .with_parameter(text(
        "dropoff_instructions",
        "Special instructions for dropoff",
        "",
    ))
    .with_parameter(ToolParameter::optional("schedule_date_local", SCHEDULE_DESC))
}

fn pickup_quote() -> ToolDefinition {
    ToolDefinition::new(
        GET_PICKUP_QUOTE,
        "Get a quote price for multiple pickup addresses delivered to one dropoff \
         location (reverse logistics).",
    )
    .with_parameter(ToolParameter::required(
        "user_email",
        "Email address of the user requesting the quote",
    ))
    .with_parameter(ToolParameter::required("order_name", "Name/title for the order"))
    .with_parameter(ToolParameter::required(
        "dropoff_addr",
        "Drop-off address (final destination)",
    ))
    .with_parameter(ToolParameter::required(
        "dropoff_recipient_name",
        "Name of recipient at dropoff location",
    ))
    .with_parameter(ToolParameter::required(
        "dropoff_recipient_phone",
        "Phone number of recipient at dropoff",
    ))
    .with_parameter(
        ToolParameter::required(
            "pickup_addresses",
            "List of pickup locations, each with keys 'route_to_text', 'rec_name', \
             'rec_phone', 'route_desc'",
        )
        .with_type(ParamType::Array),
    )
    .with_parameter(integer("transport_id", TRANSPORT_DESC, 1))
    .with_parameter(integer("pack_size_id", PACK_SIZE_DESC, 1))
    .with_parameter(number("item_value", "Declared value of items in USD", 100.0))
    .with_parameter(integer(
        "taken_asap",
        "1 for urgent/immediate, 0 for scheduled",
        1,
    ))
    .with_parameter(text(
        "order_desc",
        "General delivery notes (gate code, apartment number, etc.)",
        "Package pickup and delivery",
    ))
    .with_parameter(text(
        "dropoff_instructions",
        "Delivery notes for the dropoff address",
        "",
    ))
    .with_parameter(integer(
        "show_one_price",
        "1=show only one price, 0=show both prices",
        0,
    ))
    .with_parameter(ToolParameter::optional("schedule_date_local", SCHEDULE_DESC))
    .with_parameter(ToolParameter::optional("promo_code", "Promo code if available"))
}

/// Notification and tip parameters shared by both confirmation tools
fn confirmation_flags(definition: ToolDefinition) -> ToolDefinition {
    definition
        .with_parameter(number("tip_amount", "Tip amount to add to the order", 0.0))
        .with_parameter(integer(
            "snpx_user_email",
            "1=send email with password if user doesn't exist, 0=don't send",
            0,
        ))
        .with_parameter(integer(
            "snpx_order_email",
            "1=send order emails, 0=don't send",
            1,
        ))
        .with_parameter(integer(
            "snpx_order_not",
            "1=send push notifications if device_id provided, 0=don't send",
            1,
        ))
        .with_parameter(integer(
            "search_courier",
            "1=start searching for courier immediately, 0=wait for manual trigger",
            1,
        ))
        .with_parameter(ToolParameter::optional(
            "sender_name",
            "Name of sender/store/restaurant",
        ))
        .with_parameter(ToolParameter::optional("sender_cell", "Phone number of sender"))
        .with_parameter(ToolParameter::optional(
            "sender_desc",
            "Sender's notes and instructions",
        ))
        .with_parameter(ToolParameter::optional(
            "order_desc",
            "Delivery notes (gate code, apartment number, etc.)",
        ))
}

fn confirm_dropoff() -> ToolDefinition {
    let definition = ToolDefinition::new(
        CONFIRM_DROPOFF,
        "Confirm and create an order using the API token from get_dropoff_quote. \
         The token expires in 60 minutes and creates at most one order.",
    )
    .with_parameter(ToolParameter::required(
        "api_token",
        "Token received from get_dropoff_quote",
    ))
    .with_parameter(ToolParameter::required(
        "user_email",
        "Email of API account owner",
    ))
    .with_parameter(integer("payment_type", "Payment type ID", 3));

    confirmation_flags(definition)
        .with_parameter(ToolParameter::optional(
            "recipient_name",
            "Receiver name (if updating from quote)",
        ))
        .with_parameter(ToolParameter::optional(
            "recipient_phone",
            "Receiver phone (if updating from quote)",
        ))
}

fn confirm_pickup() -> ToolDefinition {
    let definition = ToolDefinition::new(
        CONFIRM_PICKUP,
        "Confirm and create a pickup order (multiple pickups to one dropoff) using \
         the API token from get_pickup_quote.",
    )
    .with_parameter(ToolParameter::required(
        "api_token",
        "Token received from get_pickup_quote",
    ))
    .with_parameter(ToolParameter::required(
        "user_email",
        "Email of API account owner",
    ));

    confirmation_flags(definition).with_parameter(
        ToolParameter::optional(
            "pickup_updates",
            "List of pickup location updates with 'rec_name' and/or 'rec_phone'",
        )
        .with_type(ParamType::Array),
    )
}

fn order_list() -> ToolDefinition {
    ToolDefinition::new(
        GET_ORDER_LIST,
        "Get a paginated list of orders created for the account.",
    )
    .with_parameter(integer(
        "start",
        "Starting row number to retrieve orders from",
        0,
    ))
}
