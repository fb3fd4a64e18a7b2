//! Argument resolution against a [`ToolDefinition`].
//!
//! [`ResolvedArguments::resolve`] is the only place where declared defaults
//! are applied. Request builders read every value through it, so the
//! defaults advertised in the tool schema and the defaults actually sent
//! upstream come from the same [`ToolParameter::default`] field.

use super::entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, json_kind};
use crate::core::error::ToolError;
use serde_json::{Map, Number, Value};

/// Arguments of one call after validation, coercion and default filling.
///
/// Contains exactly the declared parameters that were supplied or have a
/// default. Undeclared arguments are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArguments {
    values: Map<String, Value>,
}

impl ResolvedArguments {
    /// Validate `call` against `definition`.
    ///
    /// Fails with [`ToolError::MissingArgument`] for the first required
    /// parameter (in declaration order) that is absent or `null`, and with
    /// [`ToolError::InvalidArgument`] when a value cannot be coerced to the
    /// declared type.
    pub fn resolve(definition: &ToolDefinition, call: &ToolCall) -> Result<Self, ToolError> {
        let mut values = Map::new();

        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                Some(value) if !value.is_null() => {
                    values.insert(param.name.clone(), coerce(param, value)?);
                }
                _ => {
                    if let Some(default) = &param.default {
                        values.insert(param.name.clone(), default.clone());
                    } else if param.required {
                        return Err(ToolError::missing(&param.name));
                    }
                }
            }
        }

        Ok(Self { values })
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// String value, if present (may be empty)
    pub fn str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_str())
    }

    /// String value, or `""` when absent
    pub fn str_or_empty(&self, name: &str) -> &str {
        self.str(name).unwrap_or("")
    }

    /// String value only when present and non-empty
    pub fn non_empty_str(&self, name: &str) -> Option<&str> {
        self.str(name).filter(|s| !s.is_empty())
    }

    /// String value of a parameter the definition marks as required
    pub fn require_str(&self, name: &str) -> Result<&str, ToolError> {
        self.str(name).ok_or_else(|| ToolError::missing(name))
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(|v| v.as_i64())
    }

    pub fn f64(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(|v| v.as_f64())
    }

    pub fn array(&self, name: &str) -> Option<&Vec<Value>> {
        self.values.get(name).and_then(|v| v.as_array())
    }

    /// Copy a value into a request body under `key`, when present.
    pub fn copy_into(&self, name: &str, body: &mut Map<String, Value>, key: &str) {
        if let Some(value) = self.values.get(name) {
            body.insert(key.to_string(), value.clone());
        }
    }

    /// Copy a string into a request body only when it is non-empty.
    pub fn copy_non_empty(&self, name: &str, body: &mut Map<String, Value>, key: &str) {
        if let Some(value) = self.non_empty_str(name) {
            body.insert(key.to_string(), Value::from(value));
        }
    }
}

fn coerce(param: &ToolParameter, value: &Value) -> Result<Value, ToolError> {
    let mismatch = || {
        ToolError::invalid(
            &param.name,
            format!("expected {}, got {}", param.param_type, json_kind(value)),
        )
    };

    match param.param_type {
        ParamType::String => match value {
            Value::String(_) => Ok(value.clone()),
            Value::Number(n) => Ok(Value::from(n.to_string())),
            _ => Err(mismatch()),
        },
        ParamType::Integer => match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(Value::from)
                .ok_or_else(mismatch),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| mismatch()),
            _ => Err(mismatch()),
        },
        ParamType::Number => match value {
            Value::Number(_) => Ok(value.clone()),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(mismatch),
            _ => Err(mismatch()),
        },
        ParamType::Array => match value {
            Value::Array(_) => Ok(value.clone()),
            _ => Err(mismatch()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition() -> ToolDefinition {
        ToolDefinition::new("test", "test tool")
            .with_parameter(ToolParameter::required("email", "Email"))
            .with_parameter(
                ToolParameter::optional("transport_id", "Vehicle")
                    .with_type(ParamType::Integer)
                    .with_default(1),
            )
            .with_parameter(
                ToolParameter::optional("item_value", "Value")
                    .with_type(ParamType::Number)
                    .with_default(100.0),
            )
            .with_parameter(ToolParameter::optional("promo_code", "Promo"))
            .with_parameter(
                ToolParameter::optional("stops", "Stops").with_type(ParamType::Array),
            )
    }

    #[test]
    fn test_defaults_applied() {
        let call = ToolCall::new("test").with_arg("email", "a@b.c");
        let args = ResolvedArguments::resolve(&definition(), &call).unwrap();

        assert_eq!(args.str("email"), Some("a@b.c"));
        assert_eq!(args.i64("transport_id"), Some(1));
        assert_eq!(args.f64("item_value"), Some(100.0));
        assert!(!args.contains("promo_code"));
        assert!(!args.contains("stops"));
    }

    #[test]
    fn test_missing_required() {
        let call = ToolCall::new("test").with_arg("transport_id", 3);
        let err = ResolvedArguments::resolve(&definition(), &call).unwrap_err();
        assert_eq!(err, ToolError::missing("email"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let call = ToolCall::new("test").with_arg("email", Value::Null);
        let err = ResolvedArguments::resolve(&definition(), &call).unwrap_err();
        assert_eq!(err, ToolError::missing("email"));
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let call = ToolCall::new("test")
            .with_arg("email", "a@b.c")
            .with_arg("transport_id", "8")
            .with_arg("item_value", "49.99");
        let args = ResolvedArguments::resolve(&definition(), &call).unwrap();
        assert_eq!(args.i64("transport_id"), Some(8));
        assert_eq!(args.f64("item_value"), Some(49.99));
    }

    #[test]
    fn test_number_for_string_param_is_stringified() {
        let call = ToolCall::new("test").with_arg("email", 12345);
        let args = ResolvedArguments::resolve(&definition(), &call).unwrap();
        assert_eq!(args.str("email"), Some("12345"));
    }

    #[test]
    fn test_out_of_range_enum_passes_through() {
        let call = ToolCall::new("test")
            .with_arg("email", "a@b.c")
            .with_arg("transport_id", 42);
        let args = ResolvedArguments::resolve(&definition(), &call).unwrap();
        assert_eq!(args.i64("transport_id"), Some(42));
    }

    #[test]
    fn test_type_mismatch() {
        let call = ToolCall::new("test")
            .with_arg("email", "a@b.c")
            .with_arg("transport_id", "car");
        let err = ResolvedArguments::resolve(&definition(), &call).unwrap_err();
        match err {
            ToolError::InvalidArgument { name, reason } => {
                assert_eq!(name, "transport_id");
                assert!(reason.contains("expected integer"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let call = ToolCall::new("test")
            .with_arg("email", "a@b.c")
            .with_arg("stops", json!({"route_to_text": "x"}));
        assert!(ResolvedArguments::resolve(&definition(), &call).is_err());
    }

    #[test]
    fn test_undeclared_arguments_dropped() {
        let call = ToolCall::new("test")
            .with_arg("email", "a@b.c")
            .with_arg("user_name", "Jane");
        let args = ResolvedArguments::resolve(&definition(), &call).unwrap();
        assert!(!args.contains("user_name"));
    }

    #[test]
    fn test_copy_helpers() {
        let call = ToolCall::new("test")
            .with_arg("email", "a@b.c")
            .with_arg("promo_code", "");
        let args = ResolvedArguments::resolve(&definition(), &call).unwrap();

        let mut body = Map::new();
        args.copy_into("transport_id", &mut body, "transport_id");
        args.copy_non_empty("promo_code", &mut body, "promo_code");
        args.copy_into("stops", &mut body, "routes");

        assert_eq!(body.get("transport_id"), Some(&json!(1)));
        assert!(!body.contains_key("promo_code"));
        assert!(!body.contains_key("routes"));
    }
}
