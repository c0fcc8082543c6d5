//! # chat-service
//!
//! Application layer containing services, DTOs, and an in-memory store.

pub mod dto;
pub mod memory;
pub mod services;

pub use memory::InMemoryStore;
pub use services::{
    AuthService, ChannelService, MessageService, ProfileService, ServiceContext, ServiceError,
    ServiceResult, UploadService,
};
