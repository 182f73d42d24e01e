//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use pulse_core::{DomainError, Reaction, ReactionKind};

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind: ReactionKind = model
            .kind
            .parse()
            .map_err(|e| DomainError::Internal(format!("corrupt reaction row: {e}")))?;

        Ok(Reaction {
            id: model.id,
            user_id: model.user_id,
            post_id: model.post_id,
            kind,
            created_at: model.created_at,
        })
    }
}
