//! Follow handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use pulse_service::dto::{MembershipResponse, RemovedResponse};
use pulse_service::FollowService;

use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Follow a user
///
/// POST /users/{user_id}/following/{target_id}
pub async fn follow_user(
    State(state): State<AppState>,
    Path((user_id, target_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    let service = FollowService::new(state.service_context());
    service.follow(user_id, target_id).await?;

    Ok(NoContent)
}

/// Unfollow a user
///
/// DELETE /users/{user_id}/following/{target_id}
pub async fn unfollow_user(
    State(state): State<AppState>,
    Path((user_id, target_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    let service = FollowService::new(state.service_context());
    service.unfollow(user_id, target_id).await?;

    Ok(NoContent)
}

/// Check whether one user follows another
///
/// GET /users/{user_id}/following/{target_id}
pub async fn check_following(
    State(state): State<AppState>,
    Path((user_id, target_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<MembershipResponse>> {
    let service = FollowService::new(state.service_context());
    let active = service.is_following(user_id, target_id).await?;

    Ok(Json(MembershipResponse { active }))
}

/// List users the given user follows
///
/// GET /users/{user_id}/following
pub async fn list_following(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Uuid>>> {
    let service = FollowService::new(state.service_context());
    let users = service.following(user_id).await?;

    Ok(Json(users))
}

/// List followers of the given user
///
/// GET /users/{user_id}/followers
pub async fn list_followers(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Uuid>>> {
    let service = FollowService::new(state.service_context());
    let users = service.followers(user_id).await?;

    Ok(Json(users))
}

/// Remove everything the user follows
///
/// DELETE /users/{user_id}/following
pub async fn remove_all_following(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<RemovedResponse>> {
    let service = FollowService::new(state.service_context());
    let removed = service.remove_all_following(user_id).await?;

    Ok(Json(RemovedResponse { removed }))
}

/// Remove all of the user's followers
///
/// DELETE /users/{user_id}/followers
pub async fn remove_all_followers(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<RemovedResponse>> {
    let service = FollowService::new(state.service_context());
    let removed = service.remove_all_followers(user_id).await?;

    Ok(Json(RemovedResponse { removed }))
}
