//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Each model carries its mapping into the corresponding domain entity.

mod follow;
mod message;
mod post;
mod reaction;

pub use follow::FollowModel;
pub use message::MessageModel;
pub use post::PostModel;
pub use reaction::ReactionModel;
