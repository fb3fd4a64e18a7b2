//! Tool domain module
//!
//! Defines the schema side of the **Tool System**: what a tool is, how a
//! call names it, and how arguments are validated against it.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────────┐    ┌────────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ResolvedArguments │───▶│ RenderedResult │
//! │ (registry)   │    │ (invocation) │    │ (defaults filled) │    │ (output)       │
//! └──────┬───────┘    └──────────────┘    └───────────────────┘    └────────────────┘
//!        │
//!        ├─ aliases: "track_order" → "track_order_by_id"
//!        └─ tools:   "track_order_by_id" → ToolDefinition
//! ```
//!
//! # Tool Name Alias System
//!
//! Chat front ends and older clients use short names (`track_order`,
//! `quote`). [`ToolSpec::resolve`] maps them to canonical names without
//! listing them as separate tools.
//!
//! # Defaults
//!
//! A parameter's default lives only in [`ToolParameter::default`](entities::ToolParameter).
//! The JSON Schema returned by `tools/list` and the body sent upstream both
//! read it from there.

pub mod arguments;
pub mod entities;
pub mod value_objects;

pub use arguments::ResolvedArguments;
pub use entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use value_objects::RenderedResult;
