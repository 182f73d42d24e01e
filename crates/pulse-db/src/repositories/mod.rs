//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pulse-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod follow;
mod message;
mod post;
mod reaction;

pub use follow::PgFollowRepository;
pub use message::PgMessageRepository;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
