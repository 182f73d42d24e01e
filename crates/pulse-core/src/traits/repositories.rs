//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer provides
//! the implementation. All stores are externally synchronized resources with
//! per-row atomic writes; multi-row atomicity across the reactions table and
//! the post counters is neither assumed nor provided.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{DirectMessage, Follow, Post, Reaction, ReactionKind};
use crate::error::DomainError;
use crate::value_objects::{CounterDelta, EngagementCounts};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a reaction by its identifying tuple
    async fn find(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>>;

    /// Insert a reaction. Deduplicated at the store level: returns `true`
    /// if the record was inserted, `false` if an identical tuple already
    /// existed (a concurrent insert won the race).
    async fn insert(&self, reaction: &Reaction) -> RepoResult<bool>;

    /// Remove a reaction. Returns `true` if a record was removed, `false`
    /// if the tuple was already absent.
    async fn remove(&self, user_id: Uuid, post_id: Uuid, kind: ReactionKind) -> RepoResult<bool>;

    /// Users who reacted to a post with the given kind; order is the
    /// store's insertion order and not a contract.
    async fn reactors(&self, post_id: Uuid, kind: ReactionKind) -> RepoResult<Vec<Uuid>>;

    /// Posts a user reacted to with the given kind
    async fn reacted_posts(&self, user_id: Uuid, kind: ReactionKind) -> RepoResult<Vec<Uuid>>;

    /// Count matching records. Repair/verification only; the request hot
    /// path trusts the materialized counter on the post.
    async fn count(&self, post_id: Uuid, kind: ReactionKind) -> RepoResult<i64>;
}

// ============================================================================
// Post Repository (item facade storage)
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// List posts by author
    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Current engagement counters; `PostNotFound` if the post is missing
    async fn counts(&self, post_id: Uuid) -> RepoResult<EngagementCounts>;

    /// Apply a unit delta to one counter, clamped at zero, and return the
    /// new value. This is the only counter mutator on the request path.
    async fn apply_counter_delta(
        &self,
        post_id: Uuid,
        kind: ReactionKind,
        delta: CounterDelta,
    ) -> RepoResult<i64>;

    /// Overwrite one counter. Reserved for the reconciliation pass.
    async fn set_counter(&self, post_id: Uuid, kind: ReactionKind, value: i64) -> RepoResult<()>;

    /// All post ids, for the reconciliation sweep
    async fn all_ids(&self) -> RepoResult<Vec<Uuid>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Check whether follower follows followee
    async fn exists(&self, follower_id: Uuid, followee_id: Uuid) -> RepoResult<bool>;

    /// Record a follow; no-op if it already exists
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Remove a follow; no-op if absent
    async fn delete(&self, follower_id: Uuid, followee_id: Uuid) -> RepoResult<()>;

    /// Users following the given user
    async fn followers(&self, user_id: Uuid) -> RepoResult<Vec<Uuid>>;

    /// Users the given user follows
    async fn following(&self, user_id: Uuid) -> RepoResult<Vec<Uuid>>;

    /// Remove everything the user follows; returns removed count
    async fn delete_all_following(&self, user_id: Uuid) -> RepoResult<u64>;

    /// Remove all of the user's followers; returns removed count
    async fn delete_all_followers(&self, user_id: Uuid) -> RepoResult<u64>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DirectMessage>>;

    /// Persist a new message
    async fn create(&self, message: &DirectMessage) -> RepoResult<()>;

    /// Delete a message by ID; no-op if absent
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Messages sent by a user
    async fn find_sent(&self, sender_id: Uuid) -> RepoResult<Vec<DirectMessage>>;

    /// Messages received by a user
    async fn find_received(&self, recipient_id: Uuid) -> RepoResult<Vec<DirectMessage>>;

    /// Delete all messages sent by a user; returns removed count
    async fn delete_all_sent(&self, sender_id: Uuid) -> RepoResult<u64>;
}
