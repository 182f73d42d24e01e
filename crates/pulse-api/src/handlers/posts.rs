//! Post handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use pulse_service::dto::{CreatePostRequest, EngagementResponse, PostResponse};
use pulse_service::PostService;

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a post
///
/// POST /users/{user_id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(user_id, request).await?;

    Ok(Created(Json(PostResponse::from(post))))
}

/// Get a post by id
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get_post(post_id).await?;

    Ok(Json(PostResponse::from(post)))
}

/// Get the engagement counters for a post
///
/// GET /posts/{post_id}/engagement
pub async fn get_engagement(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> ApiResult<Json<EngagementResponse>> {
    let service = PostService::new(state.service_context());
    let counts = service.get_counts(post_id).await?;

    Ok(Json(EngagementResponse::from(counts)))
}

/// List posts authored by a user
///
/// GET /users/{user_id}/posts
pub async fn list_posts_by_author(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_by_author(user_id).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}
