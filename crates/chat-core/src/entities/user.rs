//! User entity - represents a chat user

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::candidates::{NewAccount, ProfileUpdate};

/// User row as stored by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user from a validated registration
    pub fn new(id: Uuid, account: &NewAccount) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: account.email.clone(),
            display_name: account.display_name.clone(),
            bio: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the profile fields with a validated update
    pub fn apply_profile(&mut self, profile: ProfileUpdate) {
        self.display_name = profile.display_name;
        self.bio = profile.bio;
        self.avatar_url = profile.avatar_url;
        self.updated_at = Utc::now();
    }

    /// Check if the user has set an avatar
    #[inline]
    pub fn has_avatar(&self) -> bool {
        self.avatar_url.is_some()
    }
}
