//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use pulse_core::{EngagementCounts, Post};

/// Database model for the posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub bookmark_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            author_id: model.author_id,
            content: model.content,
            counts: EngagementCounts::new(
                model.bookmark_count,
                model.like_count,
                model.dislike_count,
            ),
            created_at: model.created_at,
        }
    }
}
