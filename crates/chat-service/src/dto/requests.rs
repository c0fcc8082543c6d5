//! Request DTOs for API endpoints
//!
//! Request bodies deserialize straight into the candidate records of
//! `chat-core`, which carry the validation rules. Missing optional keys
//! deserialize to `None`; missing required strings become empty and are
//! then rejected by validation with a `Required` error.

use chat_core::candidates::{
    ChannelCandidate, FileMetadata, LoginCandidate, MessageCandidate, MessageEditCandidate,
    ProfileCandidate, SignupCandidate,
};
use serde::Deserialize;

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
pub type LoginRequest = LoginCandidate;

/// User registration request
pub type RegisterRequest = SignupCandidate;

// ============================================================================
// Channel Requests
// ============================================================================

/// Create channel request
pub type CreateChannelRequest = ChannelCandidate;

// ============================================================================
// Message Requests
// ============================================================================

/// Create message request
pub type CreateMessageRequest = MessageCandidate;

/// Edit message request
pub type UpdateMessageRequest = MessageEditCandidate;

// ============================================================================
// Profile Requests
// ============================================================================

/// Update profile request
pub type UpdateProfileRequest = ProfileCandidate;

// ============================================================================
// Upload Requests
// ============================================================================

/// Upload registration request: the declared file metadata plus its name
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[serde(default)]
    pub file_name: String,

    #[serde(flatten)]
    pub file: FileMetadata,
}
