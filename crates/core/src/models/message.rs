//! Message model and conversation filtering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A direct message between a coach and a client.
///
/// Messages are append-only; the read flag is the only mutable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    pub fn new(sender_id: Uuid, receiver_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            content,
            created_at: Utc::now(),
            read: false,
        }
    }

    pub fn format_timestamp(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }

    pub fn format_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// The order-preserving subsequence of messages exchanged between `a` and
/// `b`, matched on the unordered {sender, receiver} pair.
pub fn conversation(messages: &[Message], a: Uuid, b: Uuid) -> Vec<&Message> {
    messages
        .iter()
        .filter(|m| {
            (m.sender_id == a && m.receiver_id == b)
                || (m.sender_id == b && m.receiver_id == a)
        })
        .collect()
}
