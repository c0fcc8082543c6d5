//! Message destinations
//!
//! [`MessageLocation`] is the persisted shape: a message lives in exactly one
//! place. [`MessageTarget`] is what a validated message candidate asked for,
//! which may still name both places.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a stored message lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum MessageLocation {
    Channel(Uuid),
    DirectMessage(Uuid),
}

impl MessageLocation {
    pub fn channel_id(self) -> Option<Uuid> {
        match self {
            Self::Channel(id) => Some(id),
            Self::DirectMessage(_) => None,
        }
    }

    pub fn dm_id(self) -> Option<Uuid> {
        match self {
            Self::DirectMessage(id) => Some(id),
            Self::Channel(_) => None,
        }
    }
}

/// Destination requested by a validated message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageTarget {
    Channel(Uuid),
    DirectMessage(Uuid),
    /// Both references were supplied. Accepted as-is; the caller decides.
    Ambiguous { channel_id: Uuid, dm_id: Uuid },
}

impl MessageTarget {
    /// Build from the two optional references; `None` when both are absent
    pub fn from_refs(channel_id: Option<Uuid>, dm_id: Option<Uuid>) -> Option<Self> {
        match (channel_id, dm_id) {
            (Some(channel_id), Some(dm_id)) => Some(Self::Ambiguous { channel_id, dm_id }),
            (Some(id), None) => Some(Self::Channel(id)),
            (None, Some(id)) => Some(Self::DirectMessage(id)),
            (None, None) => None,
        }
    }

    pub fn channel_id(self) -> Option<Uuid> {
        match self {
            Self::Channel(id) | Self::Ambiguous { channel_id: id, .. } => Some(id),
            Self::DirectMessage(_) => None,
        }
    }

    pub fn dm_id(self) -> Option<Uuid> {
        match self {
            Self::DirectMessage(id) | Self::Ambiguous { dm_id: id, .. } => Some(id),
            Self::Channel(_) => None,
        }
    }

    /// The single location, unless the target is ambiguous
    pub fn location(self) -> Option<MessageLocation> {
        match self {
            Self::Channel(id) => Some(MessageLocation::Channel(id)),
            Self::DirectMessage(id) => Some(MessageLocation::DirectMessage(id)),
            Self::Ambiguous { .. } => None,
        }
    }
}
