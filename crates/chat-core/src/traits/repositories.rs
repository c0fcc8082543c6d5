//! Repository traits (ports) - define the interface for data access
//!
//! Only validated values reach these traits. Uniqueness (emails, channel
//! names) and referential checks (does the channel exist) are answered here,
//! never by the validation layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Attachment, Channel, ChannelRole, Message, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user with an already-hashed password
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get the stored password hash
    async fn get_password_hash(&self, user_id: Uuid) -> RepoResult<Option<String>>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Channel>>;

    /// Check if a channel name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a new channel
    async fn create(&self, channel: &Channel) -> RepoResult<()>;

    /// Add a member with the given role
    async fn add_member(
        &self,
        channel_id: Uuid,
        user_id: Uuid,
        role: ChannelRole,
    ) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Update message content
    async fn update(&self, message: &Message) -> RepoResult<()>;
}

// ============================================================================
// Attachment Repository
// ============================================================================

#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    /// Record metadata for an accepted upload
    async fn create(&self, attachment: &Attachment) -> RepoResult<()>;
}
