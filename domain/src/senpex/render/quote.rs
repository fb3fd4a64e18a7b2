use super::Payload;
use super::format::{TextBlock, display, miles, money, numeric, present, seconds};
use crate::tool::ResolvedArguments;
use serde_json::Value;

pub(super) fn dropoff(payload: &Payload<'_>, args: &ResolvedArguments) -> String {
    let Some(data) = payload.get("data").filter(|d| d.is_object()) else {
        return payload.unexpected("Quote");
    };

    let mut out = TextBlock::new();
    out.line("Senpex Delivery Quote:")
        .line(format!("Order: {}", args.str_or_empty("order_name")))
        .line(format!("Pickup: {}", args.str_or_empty("pickup_addr")))
        .line(format!("Dropoff: {}", args.str_or_empty("dropoff_addr")))
        .blank()
        .field_with("Price", data.get("price"), money)
        .field_with("Distance", data.get("distance"), miles)
        .field_with("Estimated Duration", data.get("duration"), |v| {
            format!("{} mins", display(v))
        })
        .field("Quote Token", data.get("token"));
    out.finish()
}

pub(super) fn pickup(payload: &Payload<'_>, args: &ResolvedArguments) -> String {
    let data = &payload.json;
    if data.get("code").is_none() {
        return payload.unexpected("Quote");
    }

    let stops = args.array("pickup_addresses").map_or(0, Vec::len);
    let mut out = TextBlock::new();
    out.line("Senpex Pickup Quote:")
        .line(format!("Order: {}", args.str_or_empty("order_name")))
        .line(format!("Dropoff: {}", args.str_or_empty("dropoff_addr")))
        .line(format!("Pickup Locations: {}", stops))
        .blank()
        .field_with("Price", data.get("order_price"), money);

    let discounted = data
        .get("order_discount")
        .and_then(numeric)
        .is_some_and(|d| d > 0.0);
    if discounted {
        out.field_with("Original Price", data.get("original_order_price"), money)
            .field_with("Discount", data.get("order_discount"), money);
    }

    out.field_with("Distance", data.get("distance_miles"), miles)
        .field_with(
            "Estimated Duration",
            data.get("distance_time_seconds"),
            seconds,
        )
        .field_with("Tariff Duration", data.get("tariff_duration_mins"), |v| {
            format!("{} minutes", display(v))
        });

    if let Some(token) = present(data.get("api_token")) {
        let expires = present(data.get("expire_mins")).map_or_else(|| "60".to_string(), display);
        out.blank()
            .line(format!("API Token: {}", display(token)))
            .line(format!("Token Expires In: {} minutes", expires));
    }
    out.field("Promo Code Applied", data.get("promo_code_info"));

    if let Some(routes) = present(data.get("routes_json")).and_then(Value::as_array) {
        out.blank().line("Pickup Routes:");
        for (i, route) in routes.iter().enumerate() {
            out.line(format!(
                "  {}. {}",
                i + 1,
                route.get("route_to_text").map(display).unwrap_or_default()
            ));
            if let Some(name) = present(route.get("route_rec_name")) {
                let phone = present(route.get("route_rec_phone"))
                    .map(|p| format!(" ({})", display(p)))
                    .unwrap_or_default();
                out.line(format!("     Recipient: {}{}", display(name), phone));
            }
            out.field_with("     Distance", route.get("route_distance"), miles);
        }
    }
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::senpex::catalog::{GET_DROPOFF_QUOTE, GET_PICKUP_QUOTE};
    use crate::tool::ToolCall;
    use serde_json::{Value, json};

    fn dropoff_call() -> ToolCall {
        ToolCall::new(GET_DROPOFF_QUOTE)
            .with_arg("user_email", "ops@example.com")
            .with_arg("pickup_addr", "123 Market St, SF")
            .with_arg("dropoff_addr", "456 Main St, LA")
    }

    fn pickup_call() -> ToolCall {
        ToolCall::new(GET_PICKUP_QUOTE)
            .with_arg("user_email", "ops@example.com")
            .with_arg("order_name", "Lab run")
            .with_arg("dropoff_addr", "1 Lab Way")
            .with_arg("dropoff_recipient_name", "Lab")
            .with_arg("dropoff_recipient_phone", "+1")
            .with_arg(
                "pickup_addresses",
                json!([{"route_to_text": "2 Clinic Rd"}, {"route_to_text": "3 Clinic Rd"}]),
            )
    }

    #[test]
    fn test_dropoff_quote_example() {
        let text = render_json(
            dropoff_call(),
            &json!({"data": {"price": 18.50, "distance": 1.2, "duration": 12, "token": "abc"}}),
        )
        .unwrap();

        let expected = "Senpex Delivery Quote:\n\
                        Order: Delivery Order\n\
                        Pickup: 123 Market St, SF\n\
                        Dropoff: 456 Main St, LA\n\
                        \n\
                        Price: $18.50\n\
                        Distance: 1.2 miles\n\
                        Estimated Duration: 12 mins\n\
                        Quote Token: abc";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_dropoff_quote_field_presence() {
        assert_field_presence(
            &dropoff_call(),
            &json!({"data": {"price": 18.5, "distance": 1.2, "duration": 12, "token": "abc"}}),
            &[
                ("price", "Price:"),
                ("distance", "Distance:"),
                ("duration", "Estimated Duration:"),
                ("token", "Quote Token:"),
            ],
            |v| &mut v["data"],
        );
    }

    #[test]
    fn test_dropoff_quote_without_data() {
        let text = render_json(dropoff_call(), &json!({"status": "queued"})).unwrap();
        assert_eq!(text, r#"Quote response: {"status":"queued"}"#);
    }

    fn pickup_payload() -> Value {
        json!({
            "code": "0",
            "order_price": 42.1,
            "original_order_price": 50,
            "order_discount": 7.9,
            "distance_miles": 8.4,
            "distance_time_seconds": 1260,
            "tariff_duration_mins": 45,
            "api_token": "tok-1",
            "expire_mins": 30,
            "promo_code_info": "SPRING -10%",
            "routes_json": [
                {"route_to_text": "2 Clinic Rd", "route_rec_name": "Ann", "route_rec_phone": "+1", "route_distance": 3.2},
                {"route_to_text": "3 Clinic Rd", "route_rec_name": "Bo", "route_rec_phone": "+2"}
            ]
        })
    }

    #[test]
    fn test_pickup_quote_rendering() {
        let text = render_json(pickup_call(), &pickup_payload()).unwrap();
        assert!(text.starts_with("Senpex Pickup Quote:\nOrder: Lab run\nDropoff: 1 Lab Way\nPickup Locations: 2\n"));
        assert!(text.contains("Price: $42.10\nOriginal Price: $50.00\nDiscount: $7.90\n"));
        assert!(text.contains("Estimated Duration: 1260 seconds (21 minutes)"));
        assert!(text.contains("\n\nAPI Token: tok-1\nToken Expires In: 30 minutes\n"));
        assert!(text.contains("Pickup Routes:\n  1. 2 Clinic Rd\n     Recipient: Ann (+1)\n     Distance: 3.2 miles\n  2. 3 Clinic Rd\n     Recipient: Bo (+2)"));
    }

    #[test]
    fn test_pickup_quote_field_presence() {
        assert_field_presence(
            &pickup_call(),
            &pickup_payload(),
            &[
                ("order_price", "Price:"),
                ("order_discount", "Discount:"),
                ("order_discount", "Original Price:"),
                ("original_order_price", "Original Price:"),
                ("distance_miles", "Distance:"),
                ("distance_time_seconds", "Estimated Duration:"),
                ("tariff_duration_mins", "Tariff Duration:"),
                ("api_token", "API Token:"),
                ("promo_code_info", "Promo Code Applied:"),
                ("routes_json", "Pickup Routes:"),
            ],
            |v| v,
        );
    }

    #[test]
    fn test_pickup_quote_defaults_expiry_and_hides_zero_discount() {
        let mut payload = pickup_payload();
        payload["order_discount"] = json!(0);
        payload.as_object_mut().unwrap().remove("expire_mins");
        let text = render_json(pickup_call(), &payload).unwrap();
        assert!(!text.contains("Original Price"));
        assert!(text.contains("Token Expires In: 60 minutes"));
    }

    #[test]
    fn test_pickup_quote_without_envelope() {
        let text = render_json(pickup_call(), &json!({"order_price": 1})).unwrap();
        assert_eq!(text, r#"Quote response: {"order_price":1}"#);
    }
}
