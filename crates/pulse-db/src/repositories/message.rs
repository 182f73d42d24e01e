//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pulse_core::{DirectMessage, MessageRepository, RepoResult};

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DirectMessage>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, sender_id, recipient_id, body, sent_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DirectMessage::from))
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &DirectMessage) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, sender_id, recipient_id, body, sent_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id)
        .bind(message.sender_id)
        .bind(message.recipient_id)
        .bind(&message.body)
        .bind(message.sent_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_sent(&self, sender_id: Uuid) -> RepoResult<Vec<DirectMessage>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, sender_id, recipient_id, body, sent_at
            FROM messages
            WHERE sender_id = $1
            ORDER BY sent_at DESC
            "#,
        )
        .bind(sender_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DirectMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_received(&self, recipient_id: Uuid) -> RepoResult<Vec<DirectMessage>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, sender_id, recipient_id, body, sent_at
            FROM messages
            WHERE recipient_id = $1
            ORDER BY sent_at DESC
            "#,
        )
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DirectMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_all_sent(&self, sender_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE sender_id = $1")
            .bind(sender_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
