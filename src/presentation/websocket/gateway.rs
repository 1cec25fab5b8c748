//! WebSocket Gateway
//!
//! Fans events out to every connected subscriber through a tokio broadcast
//! channel. A subscriber that falls more than `capacity` events behind skips
//! the oldest ones.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::domain::Message;

/// Events pushed to subscribers, serialized as `{"event": ..., "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum GatewayEvent {
    /// A message was saved
    MessageUpdate(MessageUpdateEvent),
}

impl GatewayEvent {
    pub fn message_update(msg: Message) -> Self {
        Self::MessageUpdate(MessageUpdateEvent { msg })
    }

    /// Get the event name for dispatch
    pub fn event_name(&self) -> &'static str {
        match self {
            GatewayEvent::MessageUpdate(_) => "messageUpdate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageUpdateEvent {
    pub msg: Message,
}

pub struct Gateway {
    sender: broadcast::Sender<GatewayEvent>,
}

impl Gateway {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to all current subscribers. Returns how many received it;
    /// zero subscribers is not an error.
    pub fn publish(&self, event: GatewayEvent) -> usize {
        let name = event.event_name();
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!(event = name, "No subscribers for event");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GatewayEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
