//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// A concurrent insert collided with an existing reaction record.
    /// The toggle engine recovers from this locally; it is surfaced only
    /// from paths that bypass the engine.
    #[error("Reaction already exists")]
    DuplicateReaction,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Transient store failure. Retrying the whole operation is safe.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::DuplicateReaction => "DUPLICATE_REACTION",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_) | Self::MessageNotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateReaction)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ContentTooLong { .. })
    }

    /// Check if this is a transient error the caller may retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
