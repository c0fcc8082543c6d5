//! File and image upload candidates
//!
//! Only the declared metadata is inspected. File contents are never read here.

use serde::Deserialize;

use super::Candidate;
use crate::validation::fields;
use crate::validation::{ValidationErrors, ValidationResult};
use crate::value_objects::{MediaType, UploadPolicy};

/// Declared metadata of a selected file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub size_bytes: u64,
    #[serde(default)]
    pub media_type: String,
}

impl FileMetadata {
    pub fn new(size_bytes: u64, media_type: impl Into<String>) -> Self {
        Self {
            size_bytes,
            media_type: media_type.into(),
        }
    }

    /// Validate against an upload policy; size and type failures are both reported
    pub fn validate_with(&self, policy: UploadPolicy) -> ValidationResult<ValidatedFile> {
        let mut errors = ValidationErrors::new();
        let size_bytes = errors.capture(fields::file_size(self.size_bytes));
        let media_type = errors.capture(fields::media_type(&self.media_type, policy));

        let (Some(size_bytes), Some(media_type)) = (size_bytes, media_type) else {
            return Err(errors);
        };
        Ok(ValidatedFile {
            size_bytes,
            media_type,
            policy,
        })
    }
}

/// Validated upload metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedFile {
    pub size_bytes: u64,
    pub media_type: MediaType,
    pub policy: UploadPolicy,
}

/// General attachment upload: images and documents
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FileUpload(pub FileMetadata);

/// Image-only upload (avatars, inline images)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ImageUpload(pub FileMetadata);

impl Candidate for FileUpload {
    type Valid = ValidatedFile;
    const RECORD: &'static str = "file_upload";

    fn evaluate(&self) -> ValidationResult<ValidatedFile> {
        self.0.validate_with(UploadPolicy::AnyFile)
    }
}

impl Candidate for ImageUpload {
    type Valid = ValidatedFile;
    const RECORD: &'static str = "image_upload";

    fn evaluate(&self) -> ValidationResult<ValidatedFile> {
        self.0.validate_with(UploadPolicy::ImageOnly)
    }
}
