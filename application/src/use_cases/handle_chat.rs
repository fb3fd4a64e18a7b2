//! Handle Chat use case.
//!
//! Free text → [`IntentClassifier`] → at most one tool call through the
//! shared executor. When a tool runs, its rendered text is the reply;
//! otherwise the classifier's own answer (listing, clarification,
//! fallback) is returned.

use crate::ports::tool_executor::ToolExecutorPort;
use senpex_domain::chat::{ChatAnalysis, Intent, IntentClassifier};
use senpex_domain::core::string::truncate;
use senpex_domain::tool::{RenderedResult, ToolCall};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// One tool call made while answering a chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatToolCall {
    pub name: String,
    pub arguments: serde_json::Map<String, serde_json::Value>,
    pub result: RenderedResult,
}

/// Reply to a chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub intent: Intent,
    pub needs_clarification: bool,
    pub tool_calls: Vec<ChatToolCall>,
}

impl ChatReply {
    /// Whether any tool call failed
    pub fn has_errors(&self) -> bool {
        self.tool_calls.iter().any(|c| c.result.is_error)
    }
}

/// Use case for answering a chat message.
#[derive(Clone)]
pub struct HandleChatUseCase {
    classifier: Arc<IntentClassifier>,
    executor: Arc<dyn ToolExecutorPort>,
}

impl HandleChatUseCase {
    pub fn new(classifier: Arc<IntentClassifier>, executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self {
            classifier,
            executor,
        }
    }

    /// Classify without executing anything
    pub fn analyze(&self, message: &str) -> ChatAnalysis {
        self.classifier.classify(message)
    }

    pub async fn execute(&self, message: &str) -> ChatReply {
        let analysis = self.analyze(message);
        info!(
            "Chat intent {} for: {}",
            analysis.intent,
            truncate(message, 100)
        );

        let mut tool_calls = Vec::with_capacity(analysis.tools.len());
        for call in &analysis.tools {
            debug!("Chat planned tool call: {}", call.tool_name);
            let result = self.executor.execute(call).await;
            tool_calls.push(chat_tool_call(call, result));
        }

        let response = if tool_calls.is_empty() {
            analysis.response
        } else {
            tool_calls
                .iter()
                .map(|c| c.result.text.as_str())
                .collect::<Vec<_>>()
                .join("\n\n")
        };

        ChatReply {
            response,
            intent: analysis.intent,
            needs_clarification: analysis.needs_clarification,
            tool_calls,
        }
    }
}

fn chat_tool_call(call: &ToolCall, result: RenderedResult) -> ChatToolCall {
    ChatToolCall {
        name: result.tool_name.clone(),
        arguments: call.arguments.clone(),
        result,
    }
}
