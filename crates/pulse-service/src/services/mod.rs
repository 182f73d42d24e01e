//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod engagement;
pub mod error;
pub mod follow;
pub mod message;
pub mod post;
pub mod query;
pub mod reconcile;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::{EngagementService, ToggleOutcome};
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use message::MessageService;
pub use post::PostService;
pub use query::EngagementQueryService;
pub use reconcile::{spawn_reconciliation_sweep, ReconcileSummary, ReconciliationService};
