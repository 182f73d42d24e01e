//! Repository traits (ports) - the interface the domain needs from storage

mod repositories;

pub use repositories::{
    FollowRepository, MessageRepository, PostRepository, ReactionRepository, RepoResult,
};
