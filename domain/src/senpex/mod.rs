//! Senpex delivery API mapping
//!
//! ```text
//! ToolCall ──▶ builder::prepare ──▶ ExternalRequest ──▶ (HTTP) ──▶ ExternalResponse ──▶ render ──▶ text
//!                  │                                                                    ▲
//!                  └────────────────────── ResolvedArguments ───────────────────────────┘
//! ```
//!
//! The catalogue, builder and renderer are pure; the HTTP hop lives in the
//! infrastructure layer behind the `SenpexApiPort`.

pub mod builder;
pub mod catalog;
pub mod render;
pub mod request;

pub use builder::{build_request, prepare};
pub use catalog::senpex_tool_spec;
pub use render::render;
pub use request::{ExternalRequest, ExternalResponse, HttpMethod};
