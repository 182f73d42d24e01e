//! Direct message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use pulse_core::DirectMessage;

/// Database model for the messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl From<MessageModel> for DirectMessage {
    fn from(model: MessageModel) -> Self {
        DirectMessage {
            id: model.id,
            sender_id: model.sender_id,
            recipient_id: model.recipient_id,
            body: model.body,
            sent_at: model.sent_at,
        }
    }
}
