//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pulse_core::{Follow, FollowRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn exists(&self, follower_id: Uuid, followee_id: Uuid) -> RepoResult<bool> {
        let found = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2
            )
            "#,
        )
        .bind(follower_id)
        .bind(followee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(found)
    }

    #[instrument(skip(self, follow))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followee_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (follower_id, followee_id) DO NOTHING
            "#,
        )
        .bind(follow.follower_id)
        .bind(follow.followee_id)
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: Uuid, followee_id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(followee_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn followers(&self, user_id: Uuid) -> RepoResult<Vec<Uuid>> {
        let results = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT follower_id FROM follows WHERE followee_id = $1 ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn following(&self, user_id: Uuid) -> RepoResult<Vec<Uuid>> {
        let results = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT followee_id FROM follows WHERE follower_id = $1 ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn delete_all_following(&self, user_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_all_followers(&self, user_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM follows WHERE followee_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
