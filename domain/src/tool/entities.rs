//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// JSON type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Array,
}

impl ParamType {
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Number => "number",
            ParamType::Array => "array",
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool exposed to MCP clients
///
/// Immutable once registered. The parameter list is ordered; its order is
/// the order of the generated JSON Schema properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_dropoff_quote")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// JSON type of the parameter
    pub param_type: ParamType,
    /// Value substituted when the caller omits the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// JSON Schema for the tool arguments (MCP `inputSchema`).
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &self.parameters {
            let mut prop = Map::new();
            prop.insert("type".to_string(), Value::from(param.param_type.as_str()));
            prop.insert(
                "description".to_string(),
                Value::from(param.description.as_str()),
            );
            if param.param_type == ParamType::Array {
                prop.insert("items".to_string(), serde_json::json!({ "type": "object" }));
            }
            if let Some(default) = &param.default {
                prop.insert("default".to_string(), default.clone());
            }
            properties.insert(param.name.clone(), Value::Object(prop));

            if param.required {
                required.push(Value::from(param.name.as_str()));
            }
        }

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

impl ToolParameter {
    /// A required string parameter
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            param_type: ParamType::String,
            default: None,
        }
    }

    /// An optional string parameter with no default (omitted when absent)
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }

    /// Attach a default value; a defaulted parameter is never required.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self.required = false;
        self
    }
}

/// Registry of available tools, in registration order
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
    /// Alias → canonical name mapping (e.g. "track_order" → "track_order_by_id")
    aliases: HashMap<String, String>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            aliases: HashMap::new(),
        }
    }

    /// Register a tool; a later registration with the same name replaces the
    /// earlier one in place.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        match self.tools.iter_mut().find(|t| t.name == tool.name) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
        self
    }

    /// Register multiple aliases at once (builder pattern)
    pub fn register_aliases(
        mut self,
        mappings: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        for (alias, canonical) in mappings {
            self.aliases.insert(alias.into(), canonical.into());
        }
        self
    }

    /// Resolve an alias to its canonical name (aliases only, not canonical names)
    pub fn resolve_alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| s.as_str())
    }

    /// Resolve a name: returns canonical name if it's a registered tool,
    /// or resolves alias, or None if unknown
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.get(name).is_some() {
            Some(name)
        } else {
            self.resolve_alias(name)
        }
    }

    /// Get tool definition by canonical name or alias
    pub fn get_resolved(&self, name: &str) -> Option<&ToolDefinition> {
        self.resolve(name).and_then(|canonical| self.get(canonical))
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: Map::new(),
        }
    }

    /// Build a call from a raw arguments value; `null` means no arguments.
    pub fn from_value(tool_name: impl Into<String>, arguments: Value) -> Result<Self, String> {
        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(format!(
                    "Tool arguments must be a JSON object, got {}",
                    json_kind(&other)
                ));
            }
        };
        Ok(Self {
            tool_name: tool_name.into(),
            arguments,
        })
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("track_order_by_id", "Track an order")
            .with_parameter(ToolParameter::required("order_id", "Order to track"));

        assert_eq!(tool.name, "track_order_by_id");
        assert_eq!(tool.parameters.len(), 1);
        assert!(tool.parameter("order_id").unwrap().required);
        assert_eq!(tool.required_parameters().count(), 1);
    }

    #[test]
    fn test_with_default_clears_required() {
        let param = ToolParameter::required("transport_id", "Vehicle class")
            .with_type(ParamType::Integer)
            .with_default(1);
        assert!(!param.required);
        assert_eq!(param.default, Some(json!(1)));
    }

    #[test]
    fn test_input_schema() {
        let tool = ToolDefinition::new("get_order_list", "List orders")
            .with_parameter(
                ToolParameter::optional("start", "First row")
                    .with_type(ParamType::Integer)
                    .with_default(0),
            )
            .with_parameter(ToolParameter::required("user_email", "Account email"));

        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["start"]["type"], "integer");
        assert_eq!(schema["properties"]["start"]["default"], 0);
        assert_eq!(schema["properties"]["user_email"]["type"], "string");
        assert_eq!(schema["required"], json!(["user_email"]));
    }

    #[test]
    fn test_tool_spec_preserves_registration_order() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("b_tool", "B"))
            .register(ToolDefinition::new("a_tool", "A"))
            .register(ToolDefinition::new("c_tool", "C"));

        let names: Vec<&str> = spec.names().collect();
        assert_eq!(names, vec!["b_tool", "a_tool", "c_tool"]);
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn test_tool_spec_reregister_replaces_in_place() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("a", "first"))
            .register(ToolDefinition::new("b", "B"))
            .register(ToolDefinition::new("a", "second"));

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.names().next(), Some("a"));
        assert_eq!(spec.get("a").unwrap().description, "second");
    }

    #[test]
    fn test_tool_spec_aliases() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("track_order_by_id", "Track"))
            .register(ToolDefinition::new("get_dropoff_quote", "Quote"))
            .register_aliases([
                ("track_order", "track_order_by_id"),
                ("quote", "get_dropoff_quote"),
            ]);

        // resolve_alias only resolves aliases, not canonical names
        assert_eq!(spec.resolve_alias("track_order"), Some("track_order_by_id"));
        assert_eq!(spec.resolve_alias("track_order_by_id"), None);

        // resolve returns canonical for both registered tools and aliases
        assert_eq!(spec.resolve("quote"), Some("get_dropoff_quote"));
        assert_eq!(spec.resolve("get_dropoff_quote"), Some("get_dropoff_quote"));
        assert_eq!(spec.resolve("unknown"), None);

        assert_eq!(
            spec.get_resolved("track_order").unwrap().name,
            "track_order_by_id"
        );
        // get() is exact match only
        assert!(spec.get("track_order").is_none());
    }

    #[test]
    fn test_tool_call_from_value() {
        let call = ToolCall::from_value("track_order_by_id", json!({"order_id": "12345"})).unwrap();
        assert_eq!(call.arguments["order_id"], "12345");

        let empty = ToolCall::from_value("get_order_list", Value::Null).unwrap();
        assert!(empty.arguments.is_empty());

        let err = ToolCall::from_value("get_order_list", json!([1, 2])).unwrap_err();
        assert!(err.contains("array"));
    }
}
