//! # pulse-core
//!
//! Domain layer containing entities, value objects, repository traits, and errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{DirectMessage, Follow, Post, Reaction, ReactionKind, UnknownReactionKind};
pub use error::DomainError;
pub use traits::{
    FollowRepository, MessageRepository, PostRepository, ReactionRepository, RepoResult,
};
pub use value_objects::{CounterDelta, EngagementCounts};
