//! # pulse-common
//!
//! Shared utilities: configuration, application errors, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{
    AppConfig, ConfigError, CorsConfig, Environment, RateLimitConfig, ReconciliationConfig,
    ServerConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
