//! # chat-core
//!
//! Domain layer containing the input validation rules, candidate records,
//! entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod candidates;
pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use candidates::{
    Candidate, ChannelCandidate, Credentials, FileMetadata, FileUpload, ImageUpload,
    LoginCandidate, MessageCandidate, MessageEdit, MessageEditCandidate, NewAccount, NewChannel,
    NewMessage, ProfileCandidate, ProfileUpdate, SignupCandidate, ValidatedFile,
};
pub use entities::{Attachment, Channel, ChannelRole, Message, User};
pub use error::DomainError;
pub use traits::{
    AttachmentRepository, ChannelRepository, MessageRepository, RepoResult, UserRepository,
};
pub use validation::{ErrorKind, FieldError, FieldPath, ValidationErrors, ValidationResult};
pub use value_objects::{
    MediaType, MessageLocation, MessageTarget, Password, UnsupportedMediaType, UploadPolicy,
    MAX_FILE_SIZE,
};
