//! Broadcast hub for tool results shown on the SSE channel

use async_trait::async_trait;
use chrono::Utc;
use senpex_application::ToolExecutorPort;
use senpex_domain::tool::{RenderedResult, ToolCall, ToolSpec};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::trace;

/// One tool call made through the HTTP transport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolEvent {
    #[serde(rename = "toolName")]
    pub tool_name: String,
    pub text: String,
    #[serde(rename = "isError")]
    pub is_error: bool,
    pub timestamp: String,
}

impl From<&RenderedResult> for ToolEvent {
    fn from(result: &RenderedResult) -> Self {
        Self {
            tool_name: result.tool_name.clone(),
            text: result.text.clone(),
            is_error: result.is_error,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Fan-out of [`ToolEvent`]s to every connected SSE client.
///
/// Publishing with no subscriber drops the event.
pub struct EventHub {
    tx: broadcast::Sender<ToolEvent>,
}

impl EventHub {
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToolEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: ToolEvent) {
        if self.tx.send(event).is_err() {
            trace!("No SSE subscribers; tool event dropped");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Executor decorator that publishes every result to an [`EventHub`]
pub struct PublishingExecutor {
    inner: Arc<dyn ToolExecutorPort>,
    hub: Arc<EventHub>,
}

impl PublishingExecutor {
    pub fn new(inner: Arc<dyn ToolExecutorPort>, hub: Arc<EventHub>) -> Self {
        Self { inner, hub }
    }
}

#[async_trait]
impl ToolExecutorPort for PublishingExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        self.inner.tool_spec()
    }

    async fn execute(&self, call: &ToolCall) -> RenderedResult {
        let result = self.inner.execute(call).await;
        self.hub.publish(ToolEvent::from(&result));
        result
    }

    async fn call(&self, tool_name: &str, arguments: Value) -> RenderedResult {
        let result = self.inner.call(tool_name, arguments).await;
        self.hub.publish(ToolEvent::from(&result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::handler::test_support::StubExecutor;
    use serde_json::json;

    #[test]
    fn test_publish_without_subscribers() {
        let hub = EventHub::with_capacity(4);
        hub.publish(ToolEvent::from(&RenderedResult::success("t", "x")));
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_publishing_executor_forwards_results() {
        let hub = Arc::new(EventHub::with_capacity(4));
        let mut rx = hub.subscribe();
        let executor = PublishingExecutor::new(Arc::new(StubExecutor::new()), hub.clone());

        let result = executor
            .call("get_driver_location", json!({"order_id": "7"}))
            .await;
        assert!(result.is_success());

        let event = rx.recv().await.unwrap();
        assert_eq!(event.tool_name, "get_driver_location");
        assert_eq!(event.text, "get_driver_location ok");
        assert!(!event.is_error);
    }

    #[tokio::test]
    async fn test_lagging_subscriber_skips_events() {
        let hub = EventHub::with_capacity(1);
        let mut rx = hub.subscribe();
        for name in ["a", "b", "c"] {
            hub.publish(ToolEvent::from(&RenderedResult::success(name, "x")));
        }
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(2))
        ));
        assert_eq!(rx.recv().await.unwrap().tool_name, "c");
    }
}
