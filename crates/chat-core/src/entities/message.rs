//! Message entity - represents a chat message and its attachments

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::candidates::{MessageEdit, ValidatedFile};
use crate::value_objects::{MediaType, MessageLocation};

/// Message row as stored by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub location: MessageLocation,
    pub edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Create a new Message
    pub fn new(id: Uuid, user_id: Uuid, content: String, location: MessageLocation) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            content,
            location,
            edited: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated edit
    pub fn edit(&mut self, edit: MessageEdit) {
        self.content = edit.content;
        self.edited = true;
        self.updated_at = Utc::now();
    }

    /// Check if this message was sent in a direct message
    #[inline]
    pub fn is_direct(&self) -> bool {
        matches!(self.location, MessageLocation::DirectMessage(_))
    }
}

/// Uploaded file metadata, optionally attached to a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    pub uploader_id: Uuid,
    pub message_id: Option<Uuid>,
    pub file_name: String,
    pub media_type: MediaType,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    /// Create a new Attachment from validated metadata
    pub fn new(id: Uuid, uploader_id: Uuid, file_name: String, file: ValidatedFile) -> Self {
        Self {
            id,
            uploader_id,
            message_id: None,
            file_name,
            media_type: file.media_type,
            size_bytes: file.size_bytes,
            created_at: Utc::now(),
        }
    }

    /// Check if attachment is an image
    #[inline]
    pub fn is_image(&self) -> bool {
        self.media_type.is_image()
    }
}
