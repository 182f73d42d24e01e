//! Integration test utilities
//!
//! In-memory implementations of the repository traits and fixtures for
//! exercising the service layer end to end without a database.

pub mod fixtures;
pub mod memory;

pub use fixtures::*;
pub use memory::*;
