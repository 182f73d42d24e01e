//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pulse_core::{CounterDelta, EngagementCounts, Post, PostRepository, ReactionKind, RepoResult};

use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

/// Column holding the materialized counter for a reaction kind
fn counter_column(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Bookmark => "bookmark_count",
        ReactionKind::Like => "like_count",
        ReactionKind::Dislike => "dislike_count",
    }
}

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, content, bookmark_count, like_count, dislike_count, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, author_id, content, bookmark_count, like_count, dislike_count, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self, post))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, content, bookmark_count, like_count, dislike_count, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.id)
        .bind(post.author_id)
        .bind(&post.content)
        .bind(post.counts.bookmarks)
        .bind(post.counts.likes)
        .bind(post.counts.dislikes)
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn counts(&self, post_id: Uuid) -> RepoResult<EngagementCounts> {
        let row = sqlx::query_as::<_, (i64, i64, i64)>(
            r#"
            SELECT bookmark_count, like_count, dislike_count
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match row {
            Some((bookmarks, likes, dislikes)) => {
                Ok(EngagementCounts::new(bookmarks, likes, dislikes))
            }
            None => Err(post_not_found(post_id)),
        }
    }

    #[instrument(skip(self))]
    async fn apply_counter_delta(
        &self,
        post_id: Uuid,
        kind: ReactionKind,
        delta: CounterDelta,
    ) -> RepoResult<i64> {
        // Single-statement read-modify-write; the clamp keeps a lost
        // decrement race from driving the counter negative.
        let column = counter_column(kind);
        let sql = format!(
            "UPDATE posts SET {column} = GREATEST({column} + $1, 0) WHERE id = $2 RETURNING {column}"
        );

        let updated = sqlx::query_scalar::<_, i64>(&sql)
            .bind(delta.as_i64())
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        updated.ok_or_else(|| post_not_found(post_id))
    }

    #[instrument(skip(self))]
    async fn set_counter(&self, post_id: Uuid, kind: ReactionKind, value: i64) -> RepoResult<()> {
        let column = counter_column(kind);
        let sql = format!("UPDATE posts SET {column} = $1 WHERE id = $2");

        let result = sqlx::query(&sql)
            .bind(value.max(0))
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn all_ids(&self) -> RepoResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>("SELECT id FROM posts ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(ids)
    }
}
