//! Error handling utilities for repositories

use pulse_core::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert an SQLx error to a DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StoreUnavailable(e.to_string())
}

/// Create a "post not found" error
pub fn post_not_found(id: Uuid) -> DomainError {
    DomainError::PostNotFound(id)
}
