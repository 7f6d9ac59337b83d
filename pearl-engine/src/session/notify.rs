//! User-facing notices
//!
//! Screens subscribe and render these as toasts. Notice text is always
//! safe to show to the end user; raw error detail stays in the
//! operator log at the call site.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Capacity of the notice channel
const CHANNEL_CAPACITY: usize = 256;

/// Generic message for any failed store write
pub const GENERIC_WRITE_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One notification to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

/// Notice broadcast handle
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Error, message.into());
    }

    fn publish(&self, level: NoticeLevel, message: String) {
        let _ = self.tx.send(Notice {
            id: Uuid::new_v4(),
            level,
            message,
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
