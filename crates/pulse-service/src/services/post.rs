//! Post service
//!
//! Minimal post plumbing: creation, lookup, and counter reads. Counter
//! writes belong to the engagement and reconciliation services only.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use pulse_core::{DomainError, EngagementCounts, Post};

use crate::dto::CreatePostRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post with zeroed engagement counters
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: Uuid,
        request: CreatePostRequest,
    ) -> ServiceResult<Post> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let post = Post::new(author_id, request.content);
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");
        Ok(post)
    }

    /// Fetch a post by id
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Uuid) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    /// Current engagement counters for a post
    #[instrument(skip(self))]
    pub async fn get_counts(&self, post_id: Uuid) -> ServiceResult<EngagementCounts> {
        Ok(self.ctx.post_repo().counts(post_id).await?)
    }

    /// Posts authored by a user
    #[instrument(skip(self))]
    pub async fn list_by_author(&self, author_id: Uuid) -> ServiceResult<Vec<Post>> {
        Ok(self.ctx.post_repo().find_by_author(author_id).await?)
    }
}
