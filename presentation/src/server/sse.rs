//! SSE notification channel
//!
//! Each connection sees `connected` once, then `heartbeat` / `message`
//! events until shutdown, which sends `close` and ends the stream.

use super::events::ToolEvent;
use axum::response::sse::Event;
use futures::Stream;
use serde_json::json;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

/// One SSE frame before encoding
#[derive(Debug, Clone, PartialEq)]
pub enum SseMessage {
    Connected { connection_id: Uuid },
    Heartbeat,
    Message(ToolEvent),
    Close,
}

impl SseMessage {
    pub fn event_name(&self) -> &str {
        match self {
            SseMessage::Connected { .. } => "connected",
            SseMessage::Heartbeat => "heartbeat",
            SseMessage::Message(_) => "message",
            SseMessage::Close => "close",
        }
    }

    pub fn into_event(self) -> Event {
        let name = self.event_name().to_string();
        let data = match self {
            SseMessage::Connected { connection_id } => {
                json!({ "connection_id": connection_id.to_string() })
            }
            SseMessage::Heartbeat => json!({ "timestamp": chrono::Utc::now().to_rfc3339() }),
            SseMessage::Message(event) => json!(event),
            SseMessage::Close => json!({ "reason": "shutdown" }),
        };
        Event::default().event(name).data(data.to_string())
    }
}

enum Phase {
    Start,
    Streaming,
    Done,
}

struct Connection {
    id: Uuid,
    phase: Phase,
    rx: broadcast::Receiver<ToolEvent>,
    heartbeat: Interval,
    cancel: CancellationToken,
}

/// Frames for one connection; `heartbeat` is clamped to at least one second.
pub fn connection_stream(
    rx: broadcast::Receiver<ToolEvent>,
    heartbeat: Duration,
    cancel: CancellationToken,
) -> impl Stream<Item = SseMessage> + Send + 'static {
    let connection = Connection {
        id: Uuid::new_v4(),
        phase: Phase::Start,
        rx,
        heartbeat: heartbeat_interval(heartbeat),
        cancel,
    };
    futures::stream::unfold(connection, next_message)
}

/// First tick one period from now; a stalled consumer gets one late
/// heartbeat, not a burst of missed ones.
fn heartbeat_interval(heartbeat: Duration) -> Interval {
    let period = heartbeat.max(Duration::from_secs(1));
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

async fn next_message(mut conn: Connection) -> Option<(SseMessage, Connection)> {
    match conn.phase {
        Phase::Start => {
            debug!("SSE connection {} opened", conn.id);
            conn.phase = Phase::Streaming;
            let id = conn.id;
            Some((SseMessage::Connected { connection_id: id }, conn))
        }
        Phase::Done => None,
        Phase::Streaming => loop {
            tokio::select! {
                biased;
                _ = conn.cancel.cancelled() => {
                    debug!("SSE connection {} closing", conn.id);
                    conn.phase = Phase::Done;
                    return Some((SseMessage::Close, conn));
                }
                received = conn.rx.recv() => match received {
                    Ok(event) => return Some((SseMessage::Message(event), conn)),
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        warn!("SSE connection {} skipped {} events", conn.id, missed);
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        conn.phase = Phase::Done;
                        return Some((SseMessage::Close, conn));
                    }
                },
                _ = conn.heartbeat.tick() => return Some((SseMessage::Heartbeat, conn)),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::events::EventHub;
    use futures::StreamExt;
    use senpex_domain::tool::RenderedResult;

    #[tokio::test]
    async fn test_connected_then_message_then_close() {
        let hub = EventHub::with_capacity(8);
        let cancel = CancellationToken::new();
        let stream = connection_stream(hub.subscribe(), Duration::from_secs(60), cancel.clone());
        futures::pin_mut!(stream);

        assert!(matches!(
            stream.next().await,
            Some(SseMessage::Connected { .. })
        ));

        hub.publish(ToolEvent::from(&RenderedResult::success("get_order_list", "No orders found.")));
        match stream.next().await {
            Some(SseMessage::Message(event)) => assert_eq!(event.text, "No orders found."),
            other => panic!("unexpected frame: {:?}", other),
        }

        cancel.cancel();
        assert_eq!(stream.next().await, Some(SseMessage::Close));
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_heartbeat_when_idle() {
        let hub = EventHub::with_capacity(8);
        let stream = connection_stream(
            hub.subscribe(),
            Duration::from_secs(1),
            CancellationToken::new(),
        );
        futures::pin_mut!(stream);

        stream.next().await;
        let frame = tokio::time::timeout(Duration::from_secs(3), stream.next())
            .await
            .unwrap();
        assert_eq!(frame, Some(SseMessage::Heartbeat));
    }

    #[tokio::test]
    async fn test_heartbeat_interval_delays_missed_ticks() {
        let interval = heartbeat_interval(Duration::from_millis(10));
        assert_eq!(interval.period(), Duration::from_secs(1));
        assert_eq!(interval.missed_tick_behavior(), MissedTickBehavior::Delay);

        let interval = heartbeat_interval(Duration::from_secs(15));
        assert_eq!(interval.period(), Duration::from_secs(15));
    }

    #[test]
    fn test_event_names() {
        assert_eq!(SseMessage::Heartbeat.event_name(), "heartbeat");
        assert_eq!(SseMessage::Close.event_name(), "close");
        assert_eq!(
            SseMessage::Connected {
                connection_id: Uuid::nil()
            }
            .event_name(),
            "connected"
        );
    }
}
