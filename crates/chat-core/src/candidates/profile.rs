//! Profile candidate

use serde::Deserialize;

use super::Candidate;
use crate::validation::fields;
use crate::validation::{ValidationErrors, ValidationResult};

/// Profile update form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCandidate {
    #[serde(default)]
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Validated profile; empty bio and avatar URL normalize to `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl Candidate for ProfileCandidate {
    type Valid = ProfileUpdate;
    const RECORD: &'static str = "profile";

    fn evaluate(&self) -> ValidationResult<ProfileUpdate> {
        let mut errors = ValidationErrors::new();
        let display_name = errors.capture(fields::display_name(&self.display_name));
        let bio = errors.capture(fields::bio(self.bio.as_deref()));
        let avatar_url = errors.capture(fields::avatar_url(self.avatar_url.as_deref()));

        let (Some(display_name), Some(bio), Some(avatar_url)) = (display_name, bio, avatar_url)
        else {
            return Err(errors);
        };
        Ok(ProfileUpdate {
            display_name,
            bio,
            avatar_url,
        })
    }
}
