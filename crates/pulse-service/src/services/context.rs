//! Service context - dependency container for services
//!
//! Holds the repositories services operate on. Repositories are injected as
//! trait objects so tests can swap in in-memory implementations.

use std::sync::Arc;

use pulse_core::{FollowRepository, MessageRepository, PostRepository, ReactionRepository};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    post_repo: Arc<dyn PostRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    message_repo: Arc<dyn MessageRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        post_repo: Arc<dyn PostRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        message_repo: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            reaction_repo,
            post_repo,
            follow_repo,
            message_repo,
        }
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            reaction_repo: None,
            post_repo: None,
            follow_repo: None,
            message_repo: None,
        }
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
