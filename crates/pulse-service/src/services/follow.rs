//! Follow service
//!
//! Set membership over the follows table. No counter coupling.

use tracing::{info, instrument};
use uuid::Uuid;

use pulse_core::Follow;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a follow. No-op success if the pair already exists.
    #[instrument(skip(self))]
    pub async fn follow(&self, follower_id: Uuid, followee_id: Uuid) -> ServiceResult<()> {
        if follower_id == followee_id {
            return Err(ServiceError::validation("cannot follow yourself"));
        }

        let follow = Follow::new(follower_id, followee_id);
        self.ctx.follow_repo().create(&follow).await?;

        info!(follower_id = %follower_id, followee_id = %followee_id, "Follow recorded");
        Ok(())
    }

    /// Remove a follow. Idempotent.
    #[instrument(skip(self))]
    pub async fn unfollow(&self, follower_id: Uuid, followee_id: Uuid) -> ServiceResult<()> {
        self.ctx.follow_repo().delete(follower_id, followee_id).await?;

        info!(follower_id = %follower_id, followee_id = %followee_id, "Follow removed");
        Ok(())
    }

    /// Whether follower currently follows followee
    #[instrument(skip(self))]
    pub async fn is_following(&self, follower_id: Uuid, followee_id: Uuid) -> ServiceResult<bool> {
        Ok(self.ctx.follow_repo().exists(follower_id, followee_id).await?)
    }

    /// Users following the given user
    #[instrument(skip(self))]
    pub async fn followers(&self, user_id: Uuid) -> ServiceResult<Vec<Uuid>> {
        Ok(self.ctx.follow_repo().followers(user_id).await?)
    }

    /// Users the given user follows
    #[instrument(skip(self))]
    pub async fn following(&self, user_id: Uuid) -> ServiceResult<Vec<Uuid>> {
        Ok(self.ctx.follow_repo().following(user_id).await?)
    }

    /// Remove everything the user follows
    #[instrument(skip(self))]
    pub async fn remove_all_following(&self, user_id: Uuid) -> ServiceResult<u64> {
        let removed = self.ctx.follow_repo().delete_all_following(user_id).await?;
        info!(user_id = %user_id, removed, "Removed all following");
        Ok(removed)
    }

    /// Remove all of the user's followers
    #[instrument(skip(self))]
    pub async fn remove_all_followers(&self, user_id: Uuid) -> ServiceResult<u64> {
        let removed = self.ctx.follow_repo().delete_all_followers(user_id).await?;
        info!(user_id = %user_id, removed, "Removed all followers");
        Ok(removed)
    }
}
