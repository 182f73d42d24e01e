//! Domain entities - core business objects

mod follow;
mod message;
mod post;
mod reaction;

pub use follow::Follow;
pub use message::{DirectMessage, MAX_MESSAGE_LENGTH};
pub use post::{Post, MAX_POST_LENGTH};
pub use reaction::{Reaction, ReactionKind, UnknownReactionKind};
