//! Channel candidate

use serde::Deserialize;

use super::Candidate;
use crate::validation::fields;
use crate::validation::{ValidationErrors, ValidationResult};

/// Channel create/update form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCandidate {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub is_private: Option<bool>,
}

/// Validated channel with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChannel {
    pub name: String,
    /// `None` when absent or empty
    pub description: Option<String>,
    pub is_private: bool,
}

impl Candidate for ChannelCandidate {
    type Valid = NewChannel;
    const RECORD: &'static str = "channel";

    fn evaluate(&self) -> ValidationResult<NewChannel> {
        let mut errors = ValidationErrors::new();
        let name = errors.capture(fields::channel_name(&self.name));
        let description =
            errors.capture(fields::channel_description(self.description.as_deref()));

        let (Some(name), Some(description)) = (name, description) else {
            return Err(errors);
        };
        Ok(NewChannel {
            name,
            description,
            is_private: self.is_private.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ErrorKind, FieldPath};

    fn channel(name: &str) -> ChannelCandidate {
        ChannelCandidate {
            name: name.to_string(),
            description: Some("General discussion channel".to_string()),
            is_private: Some(false),
        }
    }

    #[test]
    fn test_accepts_valid() {
        let valid = channel("general").validate().unwrap();
        assert_eq!(valid.name, "general");
        assert_eq!(valid.description.as_deref(), Some("General discussion channel"));
    }

    #[test]
    fn test_private_defaults_to_false() {
        let mut candidate = channel("general");
        candidate.is_private = None;
        assert!(!candidate.validate().unwrap().is_private);

        candidate.is_private = Some(true);
        assert!(candidate.validate().unwrap().is_private);
    }

    #[test]
    fn test_description_optional_and_empty() {
        let mut candidate = channel("general");
        candidate.description = None;
        assert_eq!(candidate.validate().unwrap().description, None);

        candidate.description = Some(String::new());
        assert_eq!(candidate.validate().unwrap().description, None);

        candidate.description = Some("A".repeat(500));
        assert!(candidate.validate().is_ok());

        candidate.description = Some("A".repeat(501));
        let errors = candidate.validate().unwrap_err();
        assert_eq!(errors.first().unwrap().path, FieldPath::DESCRIPTION);
        assert!(errors.first().unwrap().message.contains("at most 500"));
    }

    #[test]
    fn test_name_rules() {
        assert!(channel("テストチャンネル").validate().is_ok());
        assert!(channel("test-channel_123").validate().is_ok());

        let errors = channel("").validate().unwrap_err();
        assert_eq!(errors.first().unwrap().kind, ErrorKind::Required);
        assert!(errors.first().unwrap().message.contains("Channel name"));

        let errors = channel("a").validate().unwrap_err();
        assert!(errors.first().unwrap().message.contains("at least 2"));

        assert!(channel(&"a".repeat(50)).validate().is_ok());
        let errors = channel(&"a".repeat(51)).validate().unwrap_err();
        assert!(errors.first().unwrap().message.contains("at most 50"));

        let errors = channel("test channel!").validate().unwrap_err();
        assert_eq!(errors.first().unwrap().kind, ErrorKind::FormatMismatch);
    }

    #[test]
    fn test_collects_name_and_description() {
        let candidate = ChannelCandidate {
            name: String::new(),
            description: Some("A".repeat(501)),
            is_private: None,
        };
        let errors = candidate.validate().unwrap_err();
        let paths: Vec<_> = errors.iter().map(|e| e.path).collect();
        assert_eq!(paths, [FieldPath::NAME, FieldPath::DESCRIPTION]);
    }

    #[test]
    fn test_deserialize_without_flag() {
        let candidate: ChannelCandidate =
            serde_json::from_str(r#"{"name":"general","description":"hi"}"#).unwrap();
        assert_eq!(candidate.is_private, None);
        assert!(!candidate.validate().unwrap().is_private);
    }

    #[test]
    fn test_idempotent() {
        let mut candidate = channel("general");
        candidate.is_private = None;
        assert_eq!(candidate.validate(), candidate.validate());

        let rejected = channel("bad name!");
        assert_eq!(rejected.validate(), rejected.validate());
    }
}
