//! Direct message entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum direct message body length in characters
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// A direct message between two users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl DirectMessage {
    /// Create a new DirectMessage with a fresh id
    pub fn new(sender_id: Uuid, recipient_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            recipient_id,
            body,
            sent_at: Utc::now(),
        }
    }
}
