//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use pulse_core::{DirectMessage, EngagementCounts, Post};

use crate::services::ToggleOutcome;

/// Post with its engagement counters
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub engagement: EngagementResponse,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            content: post.content,
            engagement: EngagementResponse::from(post.counts),
            created_at: post.created_at,
        }
    }
}

/// Engagement counters for a post
#[derive(Debug, Serialize)]
pub struct EngagementResponse {
    pub bookmarks: i64,
    pub likes: i64,
    pub dislikes: i64,
}

impl From<EngagementCounts> for EngagementResponse {
    fn from(counts: EngagementCounts) -> Self {
        Self {
            bookmarks: counts.bookmarks,
            likes: counts.likes,
            dislikes: counts.dislikes,
        }
    }
}

/// Result of a toggle, react, or remove call
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub kind: String,
    pub active: bool,
    pub count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opposing_count: Option<i64>,
}

impl From<ToggleOutcome> for ToggleResponse {
    fn from(outcome: ToggleOutcome) -> Self {
        Self {
            kind: outcome.kind.as_str().to_string(),
            active: outcome.active,
            count: outcome.count,
            opposing_count: outcome.opposing_count,
        }
    }
}

/// Membership check result
#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    pub active: bool,
}

/// Count of records removed by a bulk operation
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub removed: u64,
}

/// Direct message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl From<DirectMessage> for MessageResponse {
    fn from(message: DirectMessage) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            recipient_id: message.recipient_id,
            body: message.body,
            sent_at: message.sent_at,
        }
    }
}
