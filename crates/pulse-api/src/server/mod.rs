//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use pulse_common::{AppConfig, AppError};
use pulse_db::{
    create_pool, PgFollowRepository, PgMessageRepository, PgPostRepository, PgReactionRepository,
};
use pulse_service::{spawn_reconciliation_sweep, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
/// Health routes are mounted outside the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = pulse_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create repositories
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let follow_repo = Arc::new(PgFollowRepository::new(pool.clone()));
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .reaction_repo(reaction_repo)
        .post_repo(post_repo)
        .follow_repo(follow_repo)
        .message_repo(message_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Start the periodic counter reconciliation sweep
    if config.reconciliation.enabled {
        let period = Duration::from_secs(config.reconciliation.interval_secs);
        info!(period_secs = config.reconciliation.interval_secs, "Starting reconciliation sweep");
        spawn_reconciliation_sweep(service_context.clone(), period);
    } else {
        info!("Reconciliation sweep disabled");
    }

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
