//! Reaction entity - one user's reaction of one kind to one post
//!
//! Membership is a set: at most one reaction exists per
//! `(user_id, post_id, kind)` tuple. Like and Dislike are mutually
//! exclusive per `(user_id, post_id)`; Bookmark is independent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of reaction a user can direct at a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Bookmark,
    Like,
    Dislike,
}

impl ReactionKind {
    /// The opposing kind that must be evicted when this one is added.
    /// Bookmark has no opposing kind.
    #[inline]
    pub const fn opposing(self) -> Option<ReactionKind> {
        match self {
            Self::Like => Some(Self::Dislike),
            Self::Dislike => Some(Self::Like),
            Self::Bookmark => None,
        }
    }

    /// Stable string form, used in storage and URL paths
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bookmark => "bookmark",
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// All reaction kinds, in counter-column order
    pub const ALL: [ReactionKind; 3] = [Self::Bookmark, Self::Like, Self::Dislike];
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a ReactionKind from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction kind: {0}")]
pub struct UnknownReactionKind(pub String);

impl std::str::FromStr for ReactionKind {
    type Err = UnknownReactionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the singular storage form and the plural route segment
        match s {
            "bookmark" | "bookmarks" => Ok(Self::Bookmark),
            "like" | "likes" => Ok(Self::Like),
            "dislike" | "dislikes" => Ok(Self::Dislike),
            other => Err(UnknownReactionKind(other.to_string())),
        }
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction with a fresh id
    pub fn new(user_id: Uuid, post_id: Uuid, kind: ReactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            post_id,
            kind,
            created_at: Utc::now(),
        }
    }
}
