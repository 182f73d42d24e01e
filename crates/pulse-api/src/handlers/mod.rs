//! Request handlers
//!
//! Handlers organized by domain, thin wrappers over the service layer.

pub mod engagement;
pub mod follows;
pub mod health;
pub mod messages;
pub mod posts;
