//! Channel service
//!
//! Handles channel creation.

use chat_core::entities::{Channel, ChannelRole};
use chat_core::{Candidate, DomainError};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{ChannelResponse, CreateChannelRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a channel; the creator becomes its owner
    #[instrument(skip(self, request))]
    pub async fn create_channel(
        &self,
        user_id: Uuid,
        request: CreateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        let new_channel = request.validate().inspect_err(|errors| {
            warn!(error_count = errors.len(), "Channel rejected");
        })?;

        if self.ctx.channel_repo().name_exists(&new_channel.name).await? {
            return Err(DomainError::ChannelNameExists.into());
        }

        let channel = Channel::new(self.ctx.generate_id(), user_id, new_channel);
        self.ctx.channel_repo().create(&channel).await?;
        self.ctx
            .channel_repo()
            .add_member(channel.id, user_id, ChannelRole::Owner)
            .await?;

        info!(channel_id = %channel.id, private = channel.is_private, "Channel created");

        Ok(ChannelResponse::from(channel))
    }
}
