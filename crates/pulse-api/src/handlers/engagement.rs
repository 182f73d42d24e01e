//! Engagement handlers
//!
//! Endpoints for reaction membership, toggling, and bulk removal. The
//! `kind` path segment accepts the plural route form (`bookmarks`, `likes`,
//! `dislikes`).

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use pulse_core::ReactionKind;
use pulse_service::dto::{MembershipResponse, PostResponse, RemovedResponse, ToggleResponse};
use pulse_service::{EngagementQueryService, EngagementService};

use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_kind(segment: &str) -> Result<ReactionKind, ApiError> {
    segment
        .parse()
        .map_err(|_| ApiError::invalid_path(format!("Unknown reaction kind: {segment}")))
}

/// List posts a user reacted to
///
/// GET /users/{user_id}/reactions/{kind}
pub async fn list_reacted_posts(
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(Uuid, String)>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let kind = parse_kind(&kind)?;

    let service = EngagementQueryService::new(state.service_context());
    let posts = service.reacted_posts(user_id, kind).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Remove every reaction of a kind held by a user
///
/// DELETE /users/{user_id}/reactions/{kind}
pub async fn remove_all_by_user(
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(Uuid, String)>,
) -> ApiResult<Json<RemovedResponse>> {
    let kind = parse_kind(&kind)?;

    let service = EngagementService::new(state.service_context());
    let removed = service.remove_all_by_user(user_id, kind).await?;

    Ok(Json(RemovedResponse { removed }))
}

/// Membership check for one (user, post, kind) tuple
///
/// GET /users/{user_id}/reactions/{kind}/{post_id}
pub async fn check_reaction(
    State(state): State<AppState>,
    Path((user_id, kind, post_id)): Path<(Uuid, String, Uuid)>,
) -> ApiResult<Json<MembershipResponse>> {
    let kind = parse_kind(&kind)?;

    let service = EngagementQueryService::new(state.service_context());
    let active = service.has_reaction(user_id, post_id, kind).await?;

    Ok(Json(MembershipResponse { active }))
}

/// Create-if-absent
///
/// POST /users/{user_id}/reactions/{kind}/{post_id}
pub async fn create_reaction(
    State(state): State<AppState>,
    Path((user_id, kind, post_id)): Path<(Uuid, String, Uuid)>,
) -> ApiResult<Created<Json<ToggleResponse>>> {
    let kind = parse_kind(&kind)?;

    let service = EngagementService::new(state.service_context());
    let outcome = service.react(user_id, post_id, kind).await?;

    Ok(Created(Json(ToggleResponse::from(outcome))))
}

/// Toggle membership
///
/// PUT /users/{user_id}/reactions/{kind}/{post_id}
pub async fn toggle_reaction(
    State(state): State<AppState>,
    Path((user_id, kind, post_id)): Path<(Uuid, String, Uuid)>,
) -> ApiResult<Json<ToggleResponse>> {
    let kind = parse_kind(&kind)?;

    let service = EngagementService::new(state.service_context());
    let outcome = service.toggle(user_id, post_id, kind).await?;

    Ok(Json(ToggleResponse::from(outcome)))
}

/// Remove-if-present
///
/// DELETE /users/{user_id}/reactions/{kind}/{post_id}
pub async fn remove_reaction(
    State(state): State<AppState>,
    Path((user_id, kind, post_id)): Path<(Uuid, String, Uuid)>,
) -> ApiResult<Json<ToggleResponse>> {
    let kind = parse_kind(&kind)?;

    let service = EngagementService::new(state.service_context());
    let outcome = service.remove(user_id, post_id, kind).await?;

    Ok(Json(ToggleResponse::from(outcome)))
}

/// List users who reacted to a post
///
/// GET /posts/{post_id}/reactions/{kind}
pub async fn list_reactors(
    State(state): State<AppState>,
    Path((post_id, kind)): Path<(Uuid, String)>,
) -> ApiResult<Json<Vec<Uuid>>> {
    let kind = parse_kind(&kind)?;

    let service = EngagementQueryService::new(state.service_context());
    let users = service.reactors(post_id, kind).await?;

    Ok(Json(users))
}

/// Remove every reaction of a kind on a post
///
/// DELETE /posts/{post_id}/reactions/{kind}
pub async fn remove_all_for_post(
    State(state): State<AppState>,
    Path((post_id, kind)): Path<(Uuid, String)>,
) -> ApiResult<Json<RemovedResponse>> {
    let kind = parse_kind(&kind)?;

    let service = EngagementService::new(state.service_context());
    let removed = service.remove_all_for_post(post_id, kind).await?;

    Ok(Json(RemovedResponse { removed }))
}
