//! Chat analysis entities

use crate::tool::ToolCall;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intent category recognised in a free-text message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Quote,
    Tracking,
    ServiceListing,
    ToolListing,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::Quote => "quote",
            Intent::Tracking => "tracking",
            Intent::ServiceListing => "service_listing",
            Intent::ToolListing => "tool_listing",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying one chat message.
///
/// `tools` holds at most one call today. When the intent is recognised but
/// its parameters cannot be extracted, `tools` is empty and
/// `needs_clarification` is set; this is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnalysis {
    pub intent: Intent,
    pub tools: Vec<ToolCall>,
    pub response: String,
    #[serde(default)]
    pub needs_clarification: bool,
}

impl ChatAnalysis {
    /// Plan a single tool call
    pub fn tool(intent: Intent, call: ToolCall, response: impl Into<String>) -> Self {
        Self {
            intent,
            tools: vec![call],
            response: response.into(),
            needs_clarification: false,
        }
    }

    /// Answer directly, without calling a tool
    pub fn reply(intent: Intent, response: impl Into<String>) -> Self {
        Self {
            intent,
            tools: Vec::new(),
            response: response.into(),
            needs_clarification: false,
        }
    }

    /// Ask the user for the parameters that could not be extracted
    pub fn clarify(intent: Intent, response: impl Into<String>) -> Self {
        Self {
            needs_clarification: true,
            ..Self::reply(intent, response)
        }
    }
}
