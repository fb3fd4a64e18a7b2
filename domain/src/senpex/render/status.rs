use super::Payload;
use crate::tool::ResolvedArguments;

/// Status mutations report success only for `inserted_id == -1`.
pub(super) fn update(payload: &Payload<'_>, args: &ResolvedArguments, outcome: &str) -> String {
    if payload.get("code").is_none() {
        return payload.unexpected("Status update");
    }
    match payload.get("inserted_id").and_then(|v| v.as_i64()) {
        Some(-1) => format!(
            "Success: Order {} marked as {}.",
            args.str_or_empty("order_id"),
            outcome
        ),
        _ => format!("Order status updated. Response: {}", payload.raw),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::senpex::catalog::*;
    use crate::tool::ToolCall;
    use serde_json::json;

    #[test]
    fn test_status_success_sentences() {
        let cases = [
            (SET_DELIVERY_READY, "Success: Order 98765 marked as ready for delivery."),
            (
                SET_LABORATORY_READY,
                "Success: Order 98765 marked as ready for pick-up from laboratory.",
            ),
            (
                SET_DROPOFF_RECEIVED,
                "Success: Order 98765 marked as received at drop-off location.",
            ),
        ];
        for (tool, expected) in cases {
            let text = render_json(
                ToolCall::new(tool).with_arg("order_id", "98765"),
                &json!({"code": "0", "inserted_id": -1}),
            )
            .unwrap();
            assert_eq!(text, expected);
        }
    }

    #[test]
    fn test_status_other_inserted_id_echoes_response() {
        let body = r#"{"code":"0","inserted_id":12}"#;
        let text = render_raw(
            ToolCall::new(SET_DELIVERY_READY).with_arg("order_id", "98765"),
            body,
        )
        .unwrap();
        assert_eq!(text, format!("Order status updated. Response: {}", body));
    }

    #[test]
    fn test_status_embedded_error() {
        let err = render_json(
            ToolCall::new(SET_DROPOFF_RECEIVED).with_arg("order_id", "98765"),
            &json!({"code": "5", "message": "Order is not delivered yet"}),
        )
        .unwrap_err();
        assert_eq!(err.code(), "UPSTREAM");
    }
}
