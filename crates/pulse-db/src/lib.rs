//! # pulse-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `pulse-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives and entity mapping
//! - Repository implementations
//!
//! Counter updates are single-statement atomic deltas clamped at zero, and
//! reaction inserts are deduplicated with `ON CONFLICT DO NOTHING`, so the
//! repositories never read-modify-write shared rows.

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgFollowRepository, PgMessageRepository, PgPostRepository, PgReactionRepository,
};
