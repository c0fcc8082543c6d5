//! Authentication service
//!
//! Handles user registration and login. Passwords are hashed with Argon2id
//! before they reach the user repository.

use chat_common::{hash_password, verify_password};
use chat_core::entities::User;
use chat_core::{Candidate, DomainError};
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        let account = request.validate().inspect_err(|errors| {
            warn!(error_count = errors.len(), "Registration rejected");
        })?;

        if self.ctx.user_repo().email_exists(&account.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&account.password)?;

        let user = User::new(self.ctx.generate_id(), &account);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserResponse::from(user))
    }

    /// Login with email and password
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<UserResponse> {
        let credentials = request.validate().inspect_err(|errors| {
            warn!(error_count = errors.len(), "Login rejected");
        })?;

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::InvalidCredentials
            })?;

        if !verify_password(&credentials.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::InvalidCredentials);
        }

        info!(user_id = %user.id, "User logged in successfully");

        Ok(UserResponse::from(user))
    }
}
