//! Business logic services
//!
//! Every service validates its request first and only reaches a repository
//! once validation has passed.

pub mod auth;
pub mod channel;
pub mod context;
pub mod error;
pub mod message;
pub mod profile;
pub mod upload;

// Re-export all services for convenience
pub use auth::AuthService;
pub use channel::ChannelService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use profile::ProfileService;
pub use upload::UploadService;
