//! Direct message handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use pulse_service::dto::{MessageResponse, RemovedResponse, SendMessageRequest};
use pulse_service::MessageService;

use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Send a direct message
///
/// POST /users/{user_id}/messages/{recipient_id}
pub async fn send_message(
    State(state): State<AppState>,
    Path((user_id, recipient_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let message = service.send(user_id, recipient_id, request).await?;

    Ok(Created(Json(MessageResponse::from(message))))
}

/// List messages the user has sent
///
/// GET /users/{user_id}/messages/sent
pub async fn list_sent(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service.list_sent(user_id).await?;

    Ok(Json(
        messages.into_iter().map(MessageResponse::from).collect(),
    ))
}

/// List messages the user has received
///
/// GET /users/{user_id}/messages/received
pub async fn list_received(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service.list_received(user_id).await?;

    Ok(Json(
        messages.into_iter().map(MessageResponse::from).collect(),
    ))
}

/// Delete a message
///
/// DELETE /messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let service = MessageService::new(state.service_context());
    service.delete(message_id).await?;

    Ok(NoContent)
}

/// Delete every message the user has sent
///
/// DELETE /users/{user_id}/messages/sent
pub async fn delete_all_sent(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<RemovedResponse>> {
    let service = MessageService::new(state.service_context());
    let removed = service.delete_all_sent(user_id).await?;

    Ok(Json(RemovedResponse { removed }))
}
