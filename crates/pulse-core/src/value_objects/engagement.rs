//! Engagement counters - the materialized view of reaction records
//!
//! Each counter must equal the number of reaction records of the matching
//! kind referencing the post. The counters are a derived view, not an
//! independent source of truth; divergence is drift to be repaired, never
//! a feature.

use serde::{Deserialize, Serialize};

use crate::entities::ReactionKind;

/// Denormalized per-post reaction counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngagementCounts {
    pub bookmarks: i64,
    pub likes: i64,
    pub dislikes: i64,
}

impl EngagementCounts {
    pub const fn new(bookmarks: i64, likes: i64, dislikes: i64) -> Self {
        Self {
            bookmarks,
            likes,
            dislikes,
        }
    }

    /// Counter value for one reaction kind
    #[inline]
    pub const fn get(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Bookmark => self.bookmarks,
            ReactionKind::Like => self.likes,
            ReactionKind::Dislike => self.dislikes,
        }
    }

    /// Overwrite the counter for one reaction kind
    pub fn set(&mut self, kind: ReactionKind, value: i64) {
        match kind {
            ReactionKind::Bookmark => self.bookmarks = value,
            ReactionKind::Like => self.likes = value,
            ReactionKind::Dislike => self.dislikes = value,
        }
    }
}

/// A unit counter adjustment. Counters only ever move by one per
/// membership change, so the delta is restricted to the two legal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterDelta {
    Increment,
    Decrement,
}

impl CounterDelta {
    #[inline]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}
