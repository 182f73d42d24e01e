//! Engagement service - the reaction toggle engine
//!
//! Flips a user's reaction membership and keeps the post's denormalized
//! counters in step. The reaction record is the durability anchor: membership
//! writes always commit before counter writes, so a failure between the two
//! leaves a stale counter (repaired by reconciliation), never a counter that
//! claims a reaction which does not exist.

use tracing::{info, instrument};
use uuid::Uuid;

use pulse_core::{CounterDelta, DomainError, Reaction, ReactionKind};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of a membership change on one `(user, post, kind)` tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub kind: ReactionKind,
    /// Membership state after the operation
    pub active: bool,
    /// Counter value for `kind` after the operation
    pub count: i64,
    /// New counter value for the opposing kind, when one was evicted
    pub opposing_count: Option<i64>,
}

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the membership state for `(user, post, kind)`
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<ToggleOutcome> {
        self.ensure_post(post_id).await?;

        let present = self
            .ctx
            .reaction_repo()
            .find(user_id, post_id, kind)
            .await?
            .is_some();

        if present {
            self.deactivate(user_id, post_id, kind).await
        } else {
            self.activate(user_id, post_id, kind).await
        }
    }

    /// Create-if-absent: drives the Absent→Present edge only. Success when
    /// the reaction already exists, without touching the counter.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<ToggleOutcome> {
        self.ensure_post(post_id).await?;

        if self
            .ctx
            .reaction_repo()
            .find(user_id, post_id, kind)
            .await?
            .is_some()
        {
            let count = self.ctx.post_repo().counts(post_id).await?.get(kind);
            return Ok(ToggleOutcome {
                kind,
                active: true,
                count,
                opposing_count: None,
            });
        }

        self.activate(user_id, post_id, kind).await
    }

    /// Remove-if-present: drives the Present→Absent edge only. Idempotent;
    /// the counter is decremented at most once per stored record.
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<ToggleOutcome> {
        self.ensure_post(post_id).await?;
        self.deactivate(user_id, post_id, kind).await
    }

    /// Remove every reaction of `kind` a user holds, post by post.
    /// No global lock; each record gets its own Present→Absent edge.
    #[instrument(skip(self))]
    pub async fn remove_all_by_user(&self, user_id: Uuid, kind: ReactionKind) -> ServiceResult<u64> {
        let post_ids = self.ctx.reaction_repo().reacted_posts(user_id, kind).await?;

        let mut removed = 0u64;
        for post_id in post_ids {
            if self.ctx.reaction_repo().remove(user_id, post_id, kind).await? {
                removed += 1;
                self.decrement_surviving_post(post_id, kind).await?;
            }
        }

        info!(user_id = %user_id, kind = %kind, removed, "Bulk removed reactions by user");
        Ok(removed)
    }

    /// Remove every reaction of `kind` on a post, user by user.
    #[instrument(skip(self))]
    pub async fn remove_all_for_post(
        &self,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<u64> {
        self.ensure_post(post_id).await?;
        let user_ids = self.ctx.reaction_repo().reactors(post_id, kind).await?;

        let mut removed = 0u64;
        for user_id in user_ids {
            if self.ctx.reaction_repo().remove(user_id, post_id, kind).await? {
                removed += 1;
                self.decrement_surviving_post(post_id, kind).await?;
            }
        }

        info!(post_id = %post_id, kind = %kind, removed, "Bulk removed reactions for post");
        Ok(removed)
    }

    /// Absent→Present edge: evict the opposing kind if held, insert the
    /// record, then increment the counter.
    async fn activate(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<ToggleOutcome> {
        let mut opposing_count = None;
        if let Some(opposing) = kind.opposing() {
            if self
                .ctx
                .reaction_repo()
                .remove(user_id, post_id, opposing)
                .await?
            {
                let n = self
                    .ctx
                    .post_repo()
                    .apply_counter_delta(post_id, opposing, CounterDelta::Decrement)
                    .await?;
                opposing_count = Some(n);
            }
        }

        let reaction = Reaction::new(user_id, post_id, kind);
        let inserted = self.ctx.reaction_repo().insert(&reaction).await?;

        let count = if inserted {
            self.ctx
                .post_repo()
                .apply_counter_delta(post_id, kind, CounterDelta::Increment)
                .await?
        } else {
            // A concurrent insert won the race; its increment stands and
            // ours must not be applied.
            self.ctx.post_repo().counts(post_id).await?.get(kind)
        };

        info!(
            user_id = %user_id,
            post_id = %post_id,
            kind = %kind,
            count,
            "Reaction added"
        );

        Ok(ToggleOutcome {
            kind,
            active: true,
            count,
            opposing_count,
        })
    }

    /// Present→Absent edge: remove the record, then decrement the counter
    /// only if this call actually removed something.
    async fn deactivate(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> ServiceResult<ToggleOutcome> {
        let removed = self
            .ctx
            .reaction_repo()
            .remove(user_id, post_id, kind)
            .await?;

        let count = if removed {
            self.ctx
                .post_repo()
                .apply_counter_delta(post_id, kind, CounterDelta::Decrement)
                .await?
        } else {
            self.ctx.post_repo().counts(post_id).await?.get(kind)
        };

        if removed {
            info!(
                user_id = %user_id,
                post_id = %post_id,
                kind = %kind,
                count,
                "Reaction removed"
            );
        }

        Ok(ToggleOutcome {
            kind,
            active: false,
            count,
            opposing_count: None,
        })
    }

    /// Decrement a counter during bulk removal, tolerating posts deleted
    /// since the reaction was recorded.
    async fn decrement_surviving_post(&self, post_id: Uuid, kind: ReactionKind) -> ServiceResult<()> {
        match self
            .ctx
            .post_repo()
            .apply_counter_delta(post_id, kind, CounterDelta::Decrement)
            .await
        {
            Ok(_) => Ok(()),
            Err(DomainError::PostNotFound(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_post(&self, post_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;
        Ok(())
    }
}
