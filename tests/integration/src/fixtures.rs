//! Test fixtures
//!
//! Builds a ServiceContext over the in-memory repositories, keeping handles
//! to the repositories so tests can inspect and manipulate store state.

use std::sync::Arc;

use uuid::Uuid;

use pulse_core::{Post, PostRepository};
use pulse_service::{ServiceContext, ServiceContextBuilder};

use crate::memory::{
    MemoryFollowRepository, MemoryMessageRepository, MemoryPostRepository,
    MemoryReactionRepository,
};

/// A ServiceContext wired to in-memory repositories, with direct handles
/// to each repository for state inspection
pub struct TestContext {
    pub ctx: ServiceContext,
    pub reactions: Arc<MemoryReactionRepository>,
    pub posts: Arc<MemoryPostRepository>,
    pub follows: Arc<MemoryFollowRepository>,
    pub messages: Arc<MemoryMessageRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let reactions = Arc::new(MemoryReactionRepository::new());
        let posts = Arc::new(MemoryPostRepository::new());
        let follows = Arc::new(MemoryFollowRepository::new());
        let messages = Arc::new(MemoryMessageRepository::new());

        let ctx = ServiceContextBuilder::new()
            .reaction_repo(reactions.clone())
            .post_repo(posts.clone())
            .follow_repo(follows.clone())
            .message_repo(messages.clone())
            .build()
            .expect("all repositories provided");

        Self {
            ctx,
            reactions,
            posts,
            follows,
            messages,
        }
    }

    /// Insert a post directly into the store and return its id
    pub async fn seed_post(&self) -> Uuid {
        let post = Post::new(Uuid::new_v4(), "seeded post".to_string());
        let id = post.id;
        self.posts.create(&post).await.expect("seed post");
        id
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
