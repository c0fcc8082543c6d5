//! Message create and edit candidates

use serde::Deserialize;

use super::Candidate;
use crate::validation::fields::{self, messages};
use crate::validation::{FieldError, FieldPath, ValidationErrors, ValidationResult};
use crate::value_objects::MessageTarget;

/// New message form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCandidate {
    #[serde(default)]
    pub content: String,
    pub channel_id: Option<String>,
    pub dm_id: Option<String>,
}

/// Validated new message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub content: String,
    pub target: MessageTarget,
}

impl Candidate for MessageCandidate {
    type Valid = NewMessage;
    const RECORD: &'static str = "message";

    fn evaluate(&self) -> ValidationResult<NewMessage> {
        let mut errors = ValidationErrors::new();
        let content = errors.capture(fields::message_content(&self.content));
        let channel_id = errors.capture(fields::channel_ref(self.channel_id.as_deref()));
        let dm_id = errors.capture(fields::dm_ref(self.dm_id.as_deref()));

        let (Some(content), Some(channel_id), Some(dm_id)) = (content, channel_id, dm_id) else {
            return Err(errors);
        };

        // At least one reference is required. Both present is accepted and
        // surfaces as `MessageTarget::Ambiguous`.
        let Some(target) = MessageTarget::from_refs(channel_id, dm_id) else {
            return Err(
                FieldError::cross_field(FieldPath::LOCATION, messages::LOCATION_REQUIRED).into(),
            );
        };

        Ok(NewMessage { content, target })
    }
}

/// Message edit form; only the content can change
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageEditCandidate {
    pub content: String,
}

/// Validated message edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEdit {
    pub content: String,
}

impl Candidate for MessageEditCandidate {
    type Valid = MessageEdit;
    const RECORD: &'static str = "message_edit";

    fn evaluate(&self) -> ValidationResult<MessageEdit> {
        let content = fields::message_content(&self.content)?;
        Ok(MessageEdit { content })
    }
}
