//! Follow entity - one user following another

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Follow relationship; at most one per (follower, followee) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn new(follower_id: Uuid, followee_id: Uuid) -> Self {
        Self {
            follower_id,
            followee_id,
            created_at: Utc::now(),
        }
    }
}
