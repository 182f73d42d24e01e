//! Read-only engagement queries
//!
//! Membership checks and listings. Absence is `false`/empty, never an error;
//! only store failures surface.

use tracing::instrument;
use uuid::Uuid;

use pulse_core::{Post, ReactionKind};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Engagement query service
pub struct EngagementQueryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementQueryService<'a> {
    /// Create a new EngagementQueryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether the user currently holds a reaction of `kind` on the post
    #[instrument(skip(self))]
    pub async fn has_reaction(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<bool> {
        let found = self
            .ctx
            .reaction_repo()
            .find(user_id, post_id, kind)
            .await?
            .is_some();
        Ok(found)
    }

    /// Users who reacted to a post with the given kind
    #[instrument(skip(self))]
    pub async fn reactors(&self, post_id: Uuid, kind: ReactionKind) -> ServiceResult<Vec<Uuid>> {
        Ok(self.ctx.reaction_repo().reactors(post_id, kind).await?)
    }

    /// Posts the user reacted to, hydrated. Posts deleted since the
    /// reaction was recorded are skipped.
    #[instrument(skip(self))]
    pub async fn reacted_posts(
        &self,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<Vec<Post>> {
        let post_ids = self.ctx.reaction_repo().reacted_posts(user_id, kind).await?;

        let mut posts = Vec::with_capacity(post_ids.len());
        for post_id in post_ids {
            if let Some(post) = self.ctx.post_repo().find_by_id(post_id).await? {
                posts.push(post);
            }
        }

        Ok(posts)
    }

    /// Count reaction records. Repair and verification only; request paths
    /// read the materialized counter on the post instead.
    #[instrument(skip(self))]
    pub async fn count_reactions(&self, post_id: Uuid, kind: ReactionKind) -> ServiceResult<i64> {
        Ok(self.ctx.reaction_repo().count(post_id, kind).await?)
    }
}
