//! Mappers for converting domain entities to response DTOs

use chat_core::entities::{Attachment, Channel, Message, User};
use chat_core::value_objects::MessageLocation;

use super::responses::{AttachmentResponse, ChannelResponse, MessageResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            bio: user.bio.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Channel Mappers
// ============================================================================

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id,
            name: channel.name.clone(),
            description: channel.description.clone(),
            is_private: channel.is_private,
            created_by: channel.created_by,
            created_at: channel.created_at,
        }
    }
}

impl From<Channel> for ChannelResponse {
    fn from(channel: Channel) -> Self {
        Self::from(&channel)
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        let (channel_id, dm_id) = match message.location {
            MessageLocation::Channel(id) => (Some(id), None),
            MessageLocation::DirectMessage(id) => (None, Some(id)),
        };
        Self {
            id: message.id,
            user_id: message.user_id,
            content: message.content.clone(),
            channel_id,
            dm_id,
            edited: message.edited,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Attachment Mappers
// ============================================================================

impl From<&Attachment> for AttachmentResponse {
    fn from(attachment: &Attachment) -> Self {
        Self {
            id: attachment.id,
            file_name: attachment.file_name.clone(),
            media_type: attachment.media_type.as_str(),
            size_bytes: attachment.size_bytes,
            is_image: attachment.is_image(),
            created_at: attachment.created_at,
        }
    }
}
