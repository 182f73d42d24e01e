//! # pulse-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    spawn_reconciliation_sweep, EngagementQueryService, EngagementService, FollowService,
    MessageService, PostService, ReconciliationService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, ToggleOutcome,
};
