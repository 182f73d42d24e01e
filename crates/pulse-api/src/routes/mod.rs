//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{engagement, follows, health, messages, posts};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(engagement_routes())
        .merge(post_routes())
        .merge(follow_routes())
        .merge(message_routes())
}

/// Reaction membership and toggle routes
fn engagement_routes() -> Router<AppState> {
    Router::new()
        // Per-user listings and bulk removal
        .route(
            "/users/:user_id/reactions/:kind",
            get(engagement::list_reacted_posts),
        )
        .route(
            "/users/:user_id/reactions/:kind",
            delete(engagement::remove_all_by_user),
        )
        // Single (user, post, kind) tuple
        .route(
            "/users/:user_id/reactions/:kind/:post_id",
            get(engagement::check_reaction),
        )
        .route(
            "/users/:user_id/reactions/:kind/:post_id",
            post(engagement::create_reaction),
        )
        .route(
            "/users/:user_id/reactions/:kind/:post_id",
            put(engagement::toggle_reaction),
        )
        .route(
            "/users/:user_id/reactions/:kind/:post_id",
            delete(engagement::remove_reaction),
        )
        // Per-post listings and bulk removal
        .route(
            "/posts/:post_id/reactions/:kind",
            get(engagement::list_reactors),
        )
        .route(
            "/posts/:post_id/reactions/:kind",
            delete(engagement::remove_all_for_post),
        )
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/posts", post(posts::create_post))
        .route("/users/:user_id/posts", get(posts::list_posts_by_author))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id/engagement", get(posts::get_engagement))
}

/// Follow routes
fn follow_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/following", get(follows::list_following))
        .route(
            "/users/:user_id/following",
            delete(follows::remove_all_following),
        )
        .route("/users/:user_id/followers", get(follows::list_followers))
        .route(
            "/users/:user_id/followers",
            delete(follows::remove_all_followers),
        )
        .route(
            "/users/:user_id/following/:target_id",
            get(follows::check_following),
        )
        .route(
            "/users/:user_id/following/:target_id",
            post(follows::follow_user),
        )
        .route(
            "/users/:user_id/following/:target_id",
            delete(follows::unfollow_user),
        )
}

/// Direct message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:user_id/messages/:recipient_id",
            post(messages::send_message),
        )
        .route("/users/:user_id/messages/sent", get(messages::list_sent))
        .route(
            "/users/:user_id/messages/sent",
            delete(messages::delete_all_sent),
        )
        .route(
            "/users/:user_id/messages/received",
            get(messages::list_received),
        )
        .route("/messages/:message_id", delete(messages::delete_message))
}
