//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs, which are the validated candidate records
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateChannelRequest, CreateMessageRequest, LoginRequest, RegisterRequest,
    UpdateMessageRequest, UpdateProfileRequest, UploadRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AttachmentResponse, ChannelResponse, MessageResponse, UserResponse,
};
