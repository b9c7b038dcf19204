use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

use crate::id::WindowId;

/// Outbound notifications published by the window manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellEvent {
    ActiveWindowChanged(WindowId),
    NotificationClicked { id: String },
    ContentNotificationClicked { kind: String, id: String },
    ActivityRequested(Value),
    Named { topic: String, detail: Value },
    #[serde(other)]
    Unknown,
}

impl ShellEvent {
    /// Topic string the event is published under.
    pub fn topic(&self) -> &str {
        match self {
            ShellEvent::ActiveWindowChanged(_) => "activewindowchanged",
            ShellEvent::NotificationClicked { .. } => "notification-clicked",
            ShellEvent::ContentNotificationClicked { .. } => "content-notification-event",
            ShellEvent::ActivityRequested(_) => "activity-requested",
            ShellEvent::Named { topic, .. } => topic,
            ShellEvent::Unknown => "unknown",
        }
    }
}

pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ShellEvent) -> usize {
        tracing::trace!(topic = event.topic(), "publish");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
