//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pulse_core::{Reaction, ReactionKind, ReactionRepository, RepoResult};

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, user_id, post_id, kind, created_at
            FROM reactions
            WHERE user_id = $1 AND post_id = $2 AND kind = $3
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self, reaction))]
    async fn insert(&self, reaction: &Reaction) -> RepoResult<bool> {
        // Duplicate tuples are swallowed by the store; rows_affected tells
        // us whether this call or a concurrent one materialized the row.
        let result = sqlx::query(
            r#"
            INSERT INTO reactions (id, user_id, post_id, kind, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, post_id, kind) DO NOTHING
            "#,
        )
        .bind(reaction.id)
        .bind(reaction.user_id)
        .bind(reaction.post_id)
        .bind(reaction.kind.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn remove(&self, user_id: Uuid, post_id: Uuid, kind: ReactionKind) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions WHERE user_id = $1 AND post_id = $2 AND kind = $3
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn reactors(&self, post_id: Uuid, kind: ReactionKind) -> RepoResult<Vec<Uuid>> {
        let results = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT user_id
            FROM reactions
            WHERE post_id = $1 AND kind = $2
            ORDER BY created_at
            "#,
        )
        .bind(post_id)
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn reacted_posts(&self, user_id: Uuid, kind: ReactionKind) -> RepoResult<Vec<Uuid>> {
        let results = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT post_id
            FROM reactions
            WHERE user_id = $1 AND kind = $2
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn count(&self, post_id: Uuid, kind: ReactionKind) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions WHERE post_id = $1 AND kind = $2
            "#,
        )
        .bind(post_id)
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
