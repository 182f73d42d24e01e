//! Post entity - a content item users react to

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::EngagementCounts;

/// Maximum post content length in characters
pub const MAX_POST_LENGTH: usize = 280;

/// Post entity with embedded engagement counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub counts: EngagementCounts,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with zeroed counters and a fresh id
    pub fn new(author_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            content,
            counts: EngagementCounts::default(),
            created_at: Utc::now(),
        }
    }
}
