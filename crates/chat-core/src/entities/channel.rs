//! Channel entity - represents a public or private channel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::candidates::NewChannel;

/// Role of a member within a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelRole {
    #[default]
    Member,
    Admin,
    Owner,
}

impl ChannelRole {
    /// Admins and owners can manage the channel
    #[inline]
    pub fn can_manage(self) -> bool {
        matches!(self, Self::Admin | Self::Owner)
    }
}

/// Channel row as stored by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Option<Uuid>,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// Create a channel from a validated candidate
    pub fn new(id: Uuid, created_by: Uuid, channel: NewChannel) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: channel.name,
            description: channel.description,
            created_by: Some(created_by),
            is_private: channel.is_private,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is a public channel
    #[inline]
    pub fn is_public(&self) -> bool {
        !self.is_private
    }
}
