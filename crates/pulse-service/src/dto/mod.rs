//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{CreatePostRequest, SendMessageRequest};
pub use responses::{
    EngagementResponse, MembershipResponse, MessageResponse, PostResponse, RemovedResponse,
    ToggleResponse,
};
