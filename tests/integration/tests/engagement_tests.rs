//! Toggle engine and reconciliation tests
//!
//! Exercises the engagement services end to end against the in-memory
//! repositories.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use integration_tests::{MemoryReactionRepository, TestContext};
use pulse_core::{Reaction, ReactionKind, ReactionRepository, RepoResult};
use pulse_service::{
    EngagementQueryService, EngagementService, ReconciliationService, ServiceContextBuilder,
};

// ============================================================================
// Toggle round trips
// ============================================================================

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);

    let on = engine
        .toggle(user_id, post_id, ReactionKind::Bookmark)
        .await
        .unwrap();
    assert!(on.active);
    assert_eq!(on.count, 1);

    let off = engine
        .toggle(user_id, post_id, ReactionKind::Bookmark)
        .await
        .unwrap();
    assert!(!off.active);
    assert_eq!(off.count, 0);
    assert!(tc.reactions.is_empty());
}

#[tokio::test]
async fn test_toggle_round_trip_restores_counter() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let engine = EngagementService::new(&tc.ctx);

    // Two other users like the post first
    for _ in 0..2 {
        engine
            .toggle(Uuid::new_v4(), post_id, ReactionKind::Like)
            .await
            .unwrap();
    }

    let user_id = Uuid::new_v4();
    engine
        .toggle(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();
    let outcome = engine
        .toggle(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();

    assert_eq!(outcome.count, 2);
}

#[tokio::test]
async fn test_toggle_unknown_post_rejected() {
    let tc = TestContext::new();
    let engine = EngagementService::new(&tc.ctx);

    let result = engine
        .toggle(Uuid::new_v4(), Uuid::new_v4(), ReactionKind::Like)
        .await;
    assert!(result.is_err());
}

// ============================================================================
// Explicit react / remove edges
// ============================================================================

#[tokio::test]
async fn test_react_is_noop_when_present() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);

    engine
        .react(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();
    let second = engine
        .react(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();

    assert!(second.active);
    assert_eq!(second.count, 1);
    assert_eq!(tc.reactions.len(), 1);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);

    engine
        .react(user_id, post_id, ReactionKind::Bookmark)
        .await
        .unwrap();

    let first = engine
        .remove(user_id, post_id, ReactionKind::Bookmark)
        .await
        .unwrap();
    assert_eq!(first.count, 0);

    // Second removal must not decrement again
    let second = engine
        .remove(user_id, post_id, ReactionKind::Bookmark)
        .await
        .unwrap();
    assert!(!second.active);
    assert_eq!(second.count, 0);
}

#[tokio::test]
async fn test_counter_clamps_at_zero() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);

    engine
        .react(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();

    // Inject drift: counter already at zero while the record still exists
    use pulse_core::PostRepository;
    tc.posts
        .set_counter(post_id, ReactionKind::Like, 0)
        .await
        .unwrap();

    let outcome = engine
        .remove(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();
    assert_eq!(outcome.count, 0);
}

// ============================================================================
// Mutual exclusion
// ============================================================================

#[tokio::test]
async fn test_like_dislike_mutual_exclusion() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);
    let queries = EngagementQueryService::new(&tc.ctx);

    engine
        .toggle(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();
    let outcome = engine
        .toggle(user_id, post_id, ReactionKind::Dislike)
        .await
        .unwrap();

    assert!(outcome.active);
    assert_eq!(outcome.count, 1);
    assert_eq!(outcome.opposing_count, Some(0));

    assert!(!queries
        .has_reaction(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap());
    assert!(queries
        .has_reaction(user_id, post_id, ReactionKind::Dislike)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_bookmark_independent_of_like() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);

    engine
        .toggle(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();
    let outcome = engine
        .toggle(user_id, post_id, ReactionKind::Bookmark)
        .await
        .unwrap();

    assert_eq!(outcome.opposing_count, None);
    assert_eq!(tc.reactions.len(), 2);
}

// ============================================================================
// Multi-user counting
// ============================================================================

#[tokio::test]
async fn test_multi_user_counts() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let engine = EngagementService::new(&tc.ctx);

    let users: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    for user in &users {
        engine
            .toggle(*user, post_id, ReactionKind::Like)
            .await
            .unwrap();
    }

    use pulse_core::PostRepository;
    assert_eq!(
        tc.posts.counts(post_id).await.unwrap().get(ReactionKind::Like),
        3
    );

    let outcome = engine
        .toggle(users[0], post_id, ReactionKind::Like)
        .await
        .unwrap();
    assert_eq!(outcome.count, 2);
}

// ============================================================================
// Duplicate insert collision
// ============================================================================

/// Delegates to the in-memory repository but reports "absent" for a fixed
/// number of membership reads, reproducing two requests that both observed
/// the Absent state before either wrote.
struct StaleReadReactionRepository {
    inner: Arc<MemoryReactionRepository>,
    stale_finds: AtomicUsize,
}

#[async_trait]
impl ReactionRepository for StaleReadReactionRepository {
    async fn find(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>> {
        let remaining = self.stale_finds.load(Ordering::SeqCst);
        if remaining > 0 {
            self.stale_finds.fetch_sub(1, Ordering::SeqCst);
            return Ok(None);
        }
        self.inner.find(user_id, post_id, kind).await
    }

    async fn insert(&self, reaction: &Reaction) -> RepoResult<bool> {
        self.inner.insert(reaction).await
    }

    async fn remove(&self, user_id: Uuid, post_id: Uuid, kind: ReactionKind) -> RepoResult<bool> {
        self.inner.remove(user_id, post_id, kind).await
    }

    async fn reactors(&self, post_id: Uuid, kind: ReactionKind) -> RepoResult<Vec<Uuid>> {
        self.inner.reactors(post_id, kind).await
    }

    async fn reacted_posts(&self, user_id: Uuid, kind: ReactionKind) -> RepoResult<Vec<Uuid>> {
        self.inner.reacted_posts(user_id, kind).await
    }

    async fn count(&self, post_id: Uuid, kind: ReactionKind) -> RepoResult<i64> {
        self.inner.count(post_id, kind).await
    }
}

#[tokio::test]
async fn test_duplicate_insert_collision_ends_at_one() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let user_id = Uuid::new_v4();

    // Both toggle invocations read membership as Absent; the store-level
    // dedup makes the second insert a no-op and its increment is skipped.
    let stale = Arc::new(StaleReadReactionRepository {
        inner: tc.reactions.clone(),
        stale_finds: AtomicUsize::new(2),
    });
    let ctx = ServiceContextBuilder::new()
        .reaction_repo(stale)
        .post_repo(tc.posts.clone())
        .follow_repo(tc.follows.clone())
        .message_repo(tc.messages.clone())
        .build()
        .unwrap();
    let engine = EngagementService::new(&ctx);

    let first = engine
        .toggle(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();
    let second = engine
        .toggle(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();

    assert_eq!(first.count, 1);
    assert_eq!(second.count, 1);
    assert_eq!(tc.reactions.len(), 1);

    use pulse_core::PostRepository;
    assert_eq!(
        tc.posts.counts(post_id).await.unwrap().get(ReactionKind::Like),
        1
    );
}

// ============================================================================
// Bulk removal
// ============================================================================

#[tokio::test]
async fn test_remove_all_by_user_decrements_each_post() {
    let tc = TestContext::new();
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);

    let post_a = tc.seed_post().await;
    let post_b = tc.seed_post().await;
    engine
        .react(user_id, post_a, ReactionKind::Bookmark)
        .await
        .unwrap();
    engine
        .react(user_id, post_b, ReactionKind::Bookmark)
        .await
        .unwrap();

    let removed = engine
        .remove_all_by_user(user_id, ReactionKind::Bookmark)
        .await
        .unwrap();
    assert_eq!(removed, 2);
    assert!(tc.reactions.is_empty());

    use pulse_core::PostRepository;
    assert_eq!(
        tc.posts
            .counts(post_a)
            .await
            .unwrap()
            .get(ReactionKind::Bookmark),
        0
    );
}

#[tokio::test]
async fn test_remove_all_for_post() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let engine = EngagementService::new(&tc.ctx);

    for _ in 0..3 {
        engine
            .react(Uuid::new_v4(), post_id, ReactionKind::Like)
            .await
            .unwrap();
    }

    let removed = engine
        .remove_all_for_post(post_id, ReactionKind::Like)
        .await
        .unwrap();
    assert_eq!(removed, 3);

    use pulse_core::PostRepository;
    assert_eq!(
        tc.posts.counts(post_id).await.unwrap().get(ReactionKind::Like),
        0
    );
}

#[tokio::test]
async fn test_bulk_removal_tolerates_deleted_posts() {
    let tc = TestContext::new();
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);

    let post_id = tc.seed_post().await;
    engine
        .react(user_id, post_id, ReactionKind::Bookmark)
        .await
        .unwrap();
    tc.posts.remove_post(post_id);

    let removed = engine
        .remove_all_by_user(user_id, ReactionKind::Bookmark)
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert!(tc.reactions.is_empty());
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_reacted_posts_skips_deleted() {
    let tc = TestContext::new();
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);
    let queries = EngagementQueryService::new(&tc.ctx);

    let kept = tc.seed_post().await;
    let deleted = tc.seed_post().await;
    engine
        .react(user_id, kept, ReactionKind::Bookmark)
        .await
        .unwrap();
    engine
        .react(user_id, deleted, ReactionKind::Bookmark)
        .await
        .unwrap();
    tc.posts.remove_post(deleted);

    let posts = queries
        .reacted_posts(user_id, ReactionKind::Bookmark)
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, kept);
}

#[tokio::test]
async fn test_reactors_listing() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let engine = EngagementService::new(&tc.ctx);
    let queries = EngagementQueryService::new(&tc.ctx);

    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();
    engine
        .react(user_a, post_id, ReactionKind::Dislike)
        .await
        .unwrap();
    engine
        .react(user_b, post_id, ReactionKind::Dislike)
        .await
        .unwrap();

    let mut reactors = queries
        .reactors(post_id, ReactionKind::Dislike)
        .await
        .unwrap();
    reactors.sort();
    let mut expected = vec![user_a, user_b];
    expected.sort();
    assert_eq!(reactors, expected);
}

// ============================================================================
// Reconciliation
// ============================================================================

#[tokio::test]
async fn test_reconcile_repairs_drift() {
    let tc = TestContext::new();
    let post_id = tc.seed_post().await;
    let user_id = Uuid::new_v4();
    let engine = EngagementService::new(&tc.ctx);

    engine
        .react(user_id, post_id, ReactionKind::Like)
        .await
        .unwrap();

    // Inject drift
    use pulse_core::PostRepository;
    tc.posts
        .set_counter(post_id, ReactionKind::Like, 7)
        .await
        .unwrap();

    let service = ReconciliationService::new(&tc.ctx);
    let counts = service.reconcile_post(post_id).await.unwrap();
    assert_eq!(counts.get(ReactionKind::Like), 1);
    assert_eq!(
        tc.posts.counts(post_id).await.unwrap().get(ReactionKind::Like),
        1
    );
}

#[tokio::test]
async fn test_reconcile_all_reports_repairs() {
    let tc = TestContext::new();
    let engine = EngagementService::new(&tc.ctx);

    let drifted = tc.seed_post().await;
    let clean = tc.seed_post().await;
    engine
        .react(Uuid::new_v4(), clean, ReactionKind::Bookmark)
        .await
        .unwrap();

    use pulse_core::PostRepository;
    tc.posts
        .set_counter(drifted, ReactionKind::Dislike, 4)
        .await
        .unwrap();

    let service = ReconciliationService::new(&tc.ctx);
    let summary = service.reconcile_all().await.unwrap();
    assert_eq!(summary.posts_checked, 2);
    assert_eq!(summary.counters_repaired, 1);

    assert_eq!(
        tc.posts
            .counts(drifted)
            .await
            .unwrap()
            .get(ReactionKind::Dislike),
        0
    );
}
