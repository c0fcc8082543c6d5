//! Message service
//!
//! Handles message creation and editing.

use chat_core::entities::Message;
use chat_core::value_objects::{MessageLocation, MessageTarget};
use chat_core::{Candidate, DomainError};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CreateMessageRequest, MessageResponse, UpdateMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new message in a channel or DM
    #[instrument(skip(self, request))]
    pub async fn create_message(
        &self,
        user_id: Uuid,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let new_message = request.validate().inspect_err(|errors| {
            warn!(error_count = errors.len(), "Message rejected");
        })?;

        // A stored message lives in exactly one place
        let location = match new_message.target {
            MessageTarget::Ambiguous { channel_id, dm_id } => {
                warn!(%channel_id, %dm_id, "Message names both a channel and a DM");
                return Err(DomainError::AmbiguousMessageLocation.into());
            }
            target => target.location().ok_or(DomainError::AmbiguousMessageLocation)?,
        };

        if let MessageLocation::Channel(channel_id) = location {
            self.ctx
                .channel_repo()
                .find_by_id(channel_id)
                .await?
                .ok_or(DomainError::ChannelNotFound(channel_id))?;
        }

        let message = Message::new(self.ctx.generate_id(), user_id, new_message.content, location);
        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, direct = message.is_direct(), "Message created");

        Ok(MessageResponse::from(message))
    }

    /// Edit the content of one's own message
    #[instrument(skip(self, request))]
    pub async fn edit_message(
        &self,
        user_id: Uuid,
        message_id: Uuid,
        request: UpdateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let edit = request.validate().inspect_err(|errors| {
            warn!(error_count = errors.len(), "Message edit rejected");
        })?;

        let mut message = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?;

        if message.user_id != user_id {
            warn!(%message_id, "Edit attempted by non-author");
            return Err(ServiceError::permission_denied("edit this message"));
        }

        message.edit(edit);
        self.ctx.message_repo().update(&message).await?;

        info!(%message_id, "Message edited");

        Ok(MessageResponse::from(message))
    }
}
