//! Media types accepted for uploads, and the upload policies over them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Upload size ceiling: 10 MiB, inclusive
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Image types accepted by every upload policy
pub const IMAGE_MEDIA_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Document types accepted by the general upload policy
pub const DOCUMENT_MEDIA_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/plain",
];

/// Images followed by documents
pub const SUPPORTED_MEDIA_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/plain",
];

/// A supported media type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum MediaType {
    Jpeg,
    /// Non-standard `image/jpg`, still sent by some browsers
    Jpg,
    Png,
    Webp,
    Gif,
    Pdf,
    MsWord,
    WordDocument,
    MsExcel,
    ExcelSheet,
    PlainText,
}

impl MediaType {
    pub const ALL: [Self; 11] = [
        Self::Jpeg,
        Self::Jpg,
        Self::Png,
        Self::Webp,
        Self::Gif,
        Self::Pdf,
        Self::MsWord,
        Self::WordDocument,
        Self::MsExcel,
        Self::ExcelSheet,
        Self::PlainText,
    ];

    /// MIME string as declared by the client
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Jpg => "image/jpg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
            Self::Pdf => "application/pdf",
            Self::MsWord => "application/msword",
            Self::WordDocument => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::MsExcel => "application/vnd.ms-excel",
            Self::ExcelSheet => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::PlainText => "text/plain",
        }
    }

    #[inline]
    pub fn is_image(self) -> bool {
        matches!(
            self,
            Self::Jpeg | Self::Jpg | Self::Png | Self::Webp | Self::Gif
        )
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a declared media type is not one we support
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported media type: {0}")]
pub struct UnsupportedMediaType(pub String);

impl FromStr for MediaType {
    type Err = UnsupportedMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|media_type| media_type.as_str() == s)
            .ok_or_else(|| UnsupportedMediaType(s.to_string()))
    }
}

impl TryFrom<String> for MediaType {
    type Error = UnsupportedMediaType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MediaType> for &'static str {
    fn from(media_type: MediaType) -> Self {
        media_type.as_str()
    }
}

/// Which media types an upload accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UploadPolicy {
    /// Images and documents (message attachments)
    #[default]
    AnyFile,
    /// Images only (avatars, inline images)
    ImageOnly,
}

impl UploadPolicy {
    pub fn allowed_media_types(self) -> &'static [&'static str] {
        match self {
            Self::AnyFile => SUPPORTED_MEDIA_TYPES,
            Self::ImageOnly => IMAGE_MEDIA_TYPES,
        }
    }
}
