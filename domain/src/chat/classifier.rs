//! Ordered regex intent rules for the chat entry point.
//!
//! Rules are evaluated in declaration order and the first match wins:
//! quote → tracking → service listing → tool listing → fallback.

use super::entities::{ChatAnalysis, Intent};
use crate::senpex::catalog::{GET_DROPOFF_QUOTE, TRACK_ORDER_BY_ID};
use crate::tool::{ToolCall, ToolSpec};
use regex::Regex;

type Planner = fn(&IntentClassifier, &str) -> ChatAnalysis;

/// One (pattern, planner) pair
struct IntentRule {
    pattern: Regex,
    plan: Planner,
}

const QUOTE_PATTERN: &str = r"(?i)\b(quote|price|cost|how much|estimate)\b";
const TRACKING_PATTERN: &str = r"(?i)\b(track|tracking|status|where is|where's)\b";
const SERVICE_PATTERN: &str =
    r"(?i)\b(services?|vehicles?|transport types?|package sizes?|what do you (offer|deliver))\b";
const TOOL_PATTERN: &str = r"(?i)\b(tools|what can you do|help|capabilities)\b";

const FROM_TO_PATTERN: &str = r"(?i)\bfrom\s+(.+?)\s+to\s+(.+?)\s*[.?!]?\s*$";
const ADDRESS_PATTERN: &str = r"\b\d{1,6}(?:\s+[A-Za-z0-9.'-]+){0,4}?\s+(?i:St|Street|Ave|Avenue|Rd|Road|Blvd|Boulevard|Dr|Drive|Ln|Lane|Way|Ct|Court|Pl|Place|Pkwy|Parkway|Hwy|Highway)\b\.?(?:,\s*[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*)?";
const ORDER_ID_PATTERNS: [&str; 3] = [
    r"(?i)\border(?:\s+id)?\s*:\s*([A-Za-z0-9_-]+)",
    r"#([A-Za-z0-9_-]+)",
    r"\b(\d{5,})\b",
];

const SERVICES_TEXT: &str = "Senpex offers on-demand and scheduled deliveries.\n\
     Vehicles: 1=Car, 3=SUV, 8=Pickup Truck, 9=Large Van.\n\
     Package sizes: 1=Small (1-25 lbs), 2=Medium (26-50 lbs), 3=Large (51-70 lbs), 4=Heavy (71-150 lbs).\n\
     Ask me for a quote, e.g. \"Get a quote from 123 Market St, SF to 456 Main St, LA\".";

/// Regex-based intent classifier.
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    from_to: Regex,
    address: Regex,
    order_ids: Vec<Regex>,
    default_email: String,
    tools: Vec<(String, String)>,
}

impl IntentClassifier {
    /// Build the classifier; `default_email` is used as `user_email` for
    /// planned quotes and `spec` feeds the tool-listing reply.
    pub fn new(default_email: impl Into<String>, spec: &ToolSpec) -> Result<Self, regex::Error> {
        let rules = vec![
            IntentRule {
                pattern: Regex::new(QUOTE_PATTERN)?,
                plan: Self::plan_quote,
            },
            IntentRule {
                pattern: Regex::new(TRACKING_PATTERN)?,
                plan: Self::plan_tracking,
            },
            IntentRule {
                pattern: Regex::new(SERVICE_PATTERN)?,
                plan: |_, _| ChatAnalysis::reply(Intent::ServiceListing, SERVICES_TEXT),
            },
            IntentRule {
                pattern: Regex::new(TOOL_PATTERN)?,
                plan: Self::plan_tool_listing,
            },
        ];

        Ok(Self {
            rules,
            from_to: Regex::new(FROM_TO_PATTERN)?,
            address: Regex::new(ADDRESS_PATTERN)?,
            order_ids: ORDER_ID_PATTERNS
                .iter()
                .map(|p| Regex::new(p))
                .collect::<Result<_, _>>()?,
            default_email: default_email.into(),
            tools: spec
                .all()
                .map(|t| (t.name.clone(), t.description.clone()))
                .collect(),
        })
    }

    pub fn classify(&self, message: &str) -> ChatAnalysis {
        let message = message.trim();
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(message))
            .map(|rule| (rule.plan)(self, message))
            .unwrap_or_else(|| {
                ChatAnalysis::reply(
                    Intent::General,
                    format!(
                        "I understand you're asking about: {}. How can I help you with delivery services?",
                        message
                    ),
                )
            })
    }

    /// Pickup and dropoff: `from A to B` first, else the first two
    /// street-address-shaped substrings.
    pub fn extract_locations(&self, message: &str) -> Option<(String, String)> {
        if let Some(caps) = self.from_to.captures(message) {
            let pickup = caps.get(1)?.as_str().trim();
            let dropoff = caps.get(2)?.as_str().trim();
            if !pickup.is_empty() && !dropoff.is_empty() {
                return Some((pickup.to_string(), dropoff.to_string()));
            }
        }

        let mut found = self.address.find_iter(message).map(|m| m.as_str().to_string());
        let pickup = found.next()?;
        let dropoff = found.next()?;
        Some((pickup, dropoff))
    }

    /// Order id: `order: <id>`, then `#<id>`, then a 5+ digit run.
    pub fn extract_order_id(&self, message: &str) -> Option<String> {
        self.order_ids.iter().find_map(|re| {
            re.captures(message)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
    }

    fn plan_quote(&self, message: &str) -> ChatAnalysis {
        match self.extract_locations(message) {
            Some((pickup, dropoff)) => {
                let response = format!("Getting a delivery quote from {} to {}.", pickup, dropoff);
                let call = ToolCall::new(GET_DROPOFF_QUOTE)
                    .with_arg("user_email", self.default_email.as_str())
                    .with_arg("pickup_addr", pickup)
                    .with_arg("dropoff_addr", dropoff);
                ChatAnalysis::tool(Intent::Quote, call, response)
            }
            None => ChatAnalysis::clarify(
                Intent::Quote,
                "I can get you a delivery quote. Please tell me the pickup and drop-off \
                 addresses, e.g. \"from 123 Market St, SF to 456 Main St, LA\".",
            ),
        }
    }

    fn plan_tracking(&self, message: &str) -> ChatAnalysis {
        match self.extract_order_id(message) {
            Some(order_id) => {
                let response = format!("Tracking order {}.", order_id);
                let call = ToolCall::new(TRACK_ORDER_BY_ID).with_arg("order_id", order_id);
                ChatAnalysis::tool(Intent::Tracking, call, response)
            }
            None => ChatAnalysis::clarify(
                Intent::Tracking,
                "I can track your order. Please provide the order ID, e.g. \"Track order 12345\".",
            ),
        }
    }

    fn plan_tool_listing(&self, _message: &str) -> ChatAnalysis {
        let mut text = String::from("I can use these tools:");
        for (name, description) in &self.tools {
            text.push_str(&format!("\n- {}: {}", name, description));
        }
        ChatAnalysis::reply(Intent::ToolListing, text)
    }
}
