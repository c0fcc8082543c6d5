//! Repository traits

mod repositories;

pub use repositories::{
    AttachmentRepository, ChannelRepository, MessageRepository, RepoResult, UserRepository,
};
