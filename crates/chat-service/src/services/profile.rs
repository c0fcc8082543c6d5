//! Profile service
//!
//! Handles profile updates for the current user.

use chat_core::{Candidate, DomainError};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{UpdateProfileRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Replace display name, bio and avatar URL
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let profile = request.validate().inspect_err(|errors| {
            warn!(error_count = errors.len(), "Profile update rejected");
        })?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        user.apply_profile(profile);
        self.ctx.user_repo().update(&user).await?;

        info!(%user_id, has_avatar = user.has_avatar(), "Profile updated");

        Ok(UserResponse::from(user))
    }
}
