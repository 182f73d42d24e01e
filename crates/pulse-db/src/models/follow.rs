//! Follow database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use pulse_core::Follow;

/// Database model for the follows table
#[derive(Debug, Clone, FromRow)]
pub struct FollowModel {
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<FollowModel> for Follow {
    fn from(model: FollowModel) -> Self {
        Follow {
            follower_id: model.follower_id,
            followee_id: model.followee_id,
            created_at: model.created_at,
        }
    }
}
