//! Counter reconciliation
//!
//! Out-of-band repair of drift between reaction records and the materialized
//! counters on posts. Runs on a timer, never inline on a request path.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use pulse_core::{DomainError, EngagementCounts, ReactionKind};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Outcome of a reconciliation sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub posts_checked: u64,
    pub counters_repaired: u64,
}

/// Reconciliation service
pub struct ReconciliationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReconciliationService<'a> {
    /// Create a new ReconciliationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compare each stored counter on a post against the record count and
    /// overwrite on drift. Returns the counts after repair.
    #[instrument(skip(self))]
    pub async fn reconcile_post(&self, post_id: Uuid) -> ServiceResult<EngagementCounts> {
        let stored = self.ctx.post_repo().counts(post_id).await?;
        let mut repaired = stored;

        for kind in ReactionKind::ALL {
            let actual = self.ctx.reaction_repo().count(post_id, kind).await?;
            if stored.get(kind) != actual {
                warn!(
                    post_id = %post_id,
                    kind = %kind,
                    stored = stored.get(kind),
                    actual,
                    "Counter drift detected, overwriting"
                );
                self.ctx.post_repo().set_counter(post_id, kind, actual).await?;
                repaired.set(kind, actual);
            }
        }

        Ok(repaired)
    }

    /// Sweep every post. Posts deleted mid-sweep are skipped.
    #[instrument(skip(self))]
    pub async fn reconcile_all(&self) -> ServiceResult<ReconcileSummary> {
        let post_ids = self.ctx.post_repo().all_ids().await?;
        let mut summary = ReconcileSummary::default();

        for post_id in post_ids {
            let before = match self.ctx.post_repo().counts(post_id).await {
                Ok(counts) => counts,
                Err(DomainError::PostNotFound(_)) => continue,
                Err(e) => return Err(e.into()),
            };

            let after = match self.reconcile_post(post_id).await {
                Ok(counts) => counts,
                Err(e) => return Err(e),
            };

            summary.posts_checked += 1;
            for kind in ReactionKind::ALL {
                if before.get(kind) != after.get(kind) {
                    summary.counters_repaired += 1;
                }
            }
        }

        debug!(
            posts_checked = summary.posts_checked,
            counters_repaired = summary.counters_repaired,
            "Reconciliation sweep finished"
        );

        Ok(summary)
    }
}

/// Spawn the periodic reconciliation sweep. The first tick fires after one
/// full period, not at startup.
pub fn spawn_reconciliation_sweep(ctx: ServiceContext, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval.tick().await;

        loop {
            interval.tick().await;
            let service = ReconciliationService::new(&ctx);
            if let Err(e) = service.reconcile_all().await {
                warn!(error = %e, "Reconciliation sweep failed");
            }
        }
    })
}
