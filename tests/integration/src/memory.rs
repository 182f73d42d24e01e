//! In-memory repository implementations
//!
//! Mirror the PostgreSQL repositories' observable behavior: deduplicated
//! reaction inserts, clamped single-step counter deltas, and set semantics
//! for follows.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use pulse_core::{
    CounterDelta, DirectMessage, DomainError, EngagementCounts, Follow, FollowRepository,
    MessageRepository, Post, PostRepository, Reaction, ReactionKind, ReactionRepository,
    RepoResult,
};

/// In-memory ReactionRepository
#[derive(Default)]
pub struct MemoryReactionRepository {
    rows: Mutex<Vec<Reaction>>,
}

impl MemoryReactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reaction records
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    async fn find(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.user_id == user_id && r.post_id == post_id && r.kind == kind)
            .cloned())
    }

    async fn insert(&self, reaction: &Reaction) -> RepoResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let exists = rows.iter().any(|r| {
            r.user_id == reaction.user_id && r.post_id == reaction.post_id && r.kind == reaction.kind
        });
        if exists {
            return Ok(false);
        }
        rows.push(reaction.clone());
        Ok(true)
    }

    async fn remove(&self, user_id: Uuid, post_id: Uuid, kind: ReactionKind) -> RepoResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.user_id == user_id && r.post_id == post_id && r.kind == kind));
        Ok(rows.len() < before)
    }

    async fn reactors(&self, post_id: Uuid, kind: ReactionKind) -> RepoResult<Vec<Uuid>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.post_id == post_id && r.kind == kind)
            .map(|r| r.user_id)
            .collect())
    }

    async fn reacted_posts(&self, user_id: Uuid, kind: ReactionKind) -> RepoResult<Vec<Uuid>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.user_id == user_id && r.kind == kind)
            .map(|r| r.post_id)
            .collect())
    }

    async fn count(&self, post_id: Uuid, kind: ReactionKind) -> RepoResult<i64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.post_id == post_id && r.kind == kind)
            .count() as i64)
    }
}

/// In-memory PostRepository
#[derive(Default)]
pub struct MemoryPostRepository {
    posts: Mutex<HashMap<Uuid, Post>>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a post directly, bypassing any service. Used to simulate posts
    /// deleted while reactions to them still exist.
    pub fn remove_post(&self, post_id: Uuid) {
        self.posts.lock().unwrap().remove(&post_id);
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.posts.lock().unwrap().insert(post.id, post.clone());
        Ok(())
    }

    async fn counts(&self, post_id: Uuid) -> RepoResult<EngagementCounts> {
        let posts = self.posts.lock().unwrap();
        posts
            .get(&post_id)
            .map(|p| p.counts)
            .ok_or(DomainError::PostNotFound(post_id))
    }

    async fn apply_counter_delta(
        &self,
        post_id: Uuid,
        kind: ReactionKind,
        delta: CounterDelta,
    ) -> RepoResult<i64> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .get_mut(&post_id)
            .ok_or(DomainError::PostNotFound(post_id))?;
        let new_value = (post.counts.get(kind) + delta.as_i64()).max(0);
        post.counts.set(kind, new_value);
        Ok(new_value)
    }

    async fn set_counter(&self, post_id: Uuid, kind: ReactionKind, value: i64) -> RepoResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .get_mut(&post_id)
            .ok_or(DomainError::PostNotFound(post_id))?;
        post.counts.set(kind, value.max(0));
        Ok(())
    }

    async fn all_ids(&self) -> RepoResult<Vec<Uuid>> {
        Ok(self.posts.lock().unwrap().keys().copied().collect())
    }
}

/// In-memory FollowRepository
#[derive(Default)]
pub struct MemoryFollowRepository {
    rows: Mutex<Vec<Follow>>,
}

impl MemoryFollowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FollowRepository for MemoryFollowRepository {
    async fn exists(&self, follower_id: Uuid, followee_id: Uuid) -> RepoResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .any(|f| f.follower_id == follower_id && f.followee_id == followee_id))
    }

    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let exists = rows
            .iter()
            .any(|f| f.follower_id == follow.follower_id && f.followee_id == follow.followee_id);
        if !exists {
            rows.push(follow.clone());
        }
        Ok(())
    }

    async fn delete(&self, follower_id: Uuid, followee_id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|f| !(f.follower_id == follower_id && f.followee_id == followee_id));
        Ok(())
    }

    async fn followers(&self, user_id: Uuid) -> RepoResult<Vec<Uuid>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|f| f.followee_id == user_id)
            .map(|f| f.follower_id)
            .collect())
    }

    async fn following(&self, user_id: Uuid) -> RepoResult<Vec<Uuid>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|f| f.follower_id == user_id)
            .map(|f| f.followee_id)
            .collect())
    }

    async fn delete_all_following(&self, user_id: Uuid) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.follower_id != user_id);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_all_followers(&self, user_id: Uuid) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.followee_id != user_id);
        Ok((before - rows.len()) as u64)
    }
}

/// In-memory MessageRepository
#[derive(Default)]
pub struct MemoryMessageRepository {
    rows: Mutex<Vec<DirectMessage>>,
}

impl MemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for MemoryMessageRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DirectMessage>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, message: &DirectMessage) -> RepoResult<()> {
        self.rows.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.rows.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }

    async fn find_sent(&self, sender_id: Uuid) -> RepoResult<Vec<DirectMessage>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|m| m.sender_id == sender_id)
            .cloned()
            .collect())
    }

    async fn find_received(&self, recipient_id: Uuid) -> RepoResult<Vec<DirectMessage>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|m| m.recipient_id == recipient_id)
            .cloned()
            .collect())
    }

    async fn delete_all_sent(&self, sender_id: Uuid) -> RepoResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.sender_id != sender_id);
        Ok((before - rows.len()) as u64)
    }
}
