//! Direct message service

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use pulse_core::{DirectMessage, DomainError};

use crate::dto::SendMessageRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Direct message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a direct message
    #[instrument(skip(self, request))]
    pub async fn send(
        &self,
        sender_id: Uuid,
        recipient_id: Uuid,
        request: SendMessageRequest,
    ) -> ServiceResult<DirectMessage> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let message = DirectMessage::new(sender_id, recipient_id, request.body);
        self.ctx.message_repo().create(&message).await?;

        info!(
            message_id = %message.id,
            sender_id = %sender_id,
            recipient_id = %recipient_id,
            "Message sent"
        );

        Ok(message)
    }

    /// Delete a message by id
    #[instrument(skip(self))]
    pub async fn delete(&self, message_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?;

        self.ctx.message_repo().delete(message_id).await?;

        info!(message_id = %message_id, "Message deleted");
        Ok(())
    }

    /// Messages the user has sent
    #[instrument(skip(self))]
    pub async fn list_sent(&self, sender_id: Uuid) -> ServiceResult<Vec<DirectMessage>> {
        Ok(self.ctx.message_repo().find_sent(sender_id).await?)
    }

    /// Messages the user has received
    #[instrument(skip(self))]
    pub async fn list_received(&self, recipient_id: Uuid) -> ServiceResult<Vec<DirectMessage>> {
        Ok(self.ctx.message_repo().find_received(recipient_id).await?)
    }

    /// Delete every message the user has sent
    #[instrument(skip(self))]
    pub async fn delete_all_sent(&self, sender_id: Uuid) -> ServiceResult<u64> {
        let removed = self.ctx.message_repo().delete_all_sent(sender_id).await?;
        info!(sender_id = %sender_id, removed, "Deleted all sent messages");
        Ok(removed)
    }
}
