//! Validation result contract - field paths, error kinds, and the ordered error list

use std::fmt;

use serde::Serialize;

/// Kind of rule a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Field missing or empty where presence is mandatory
    Required,
    /// Below minimum or above maximum character count
    LengthBound,
    /// Pattern or well-formedness check failed
    FormatMismatch,
    /// Numeric value exceeds a ceiling
    SizeLimit,
    /// Value not in an allow-list
    TypeNotAllowed,
    /// Refinement spanning two or more fields failed
    CrossFieldViolation,
}

impl ErrorKind {
    /// Stable error code for API responses
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::LengthBound => "LENGTH_BOUND",
            Self::FormatMismatch => "FORMAT_MISMATCH",
            Self::SizeLimit => "SIZE_LIMIT",
            Self::TypeNotAllowed => "TYPE_NOT_ALLOWED",
            Self::CrossFieldViolation => "CROSS_FIELD_VIOLATION",
        }
    }
}

/// Identifies the field an error belongs to, using the wire (camelCase) name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const EMAIL: Self = Self("email");
    pub const PASSWORD: Self = Self("password");
    pub const CONFIRM_PASSWORD: Self = Self("confirmPassword");
    pub const DISPLAY_NAME: Self = Self("displayName");
    pub const NAME: Self = Self("name");
    pub const DESCRIPTION: Self = Self("description");
    pub const CONTENT: Self = Self("content");
    pub const CHANNEL_ID: Self = Self("channelId");
    pub const DM_ID: Self = Self("dmId");
    /// Target of the message location refinement
    pub const LOCATION: Self = Self("location");
    pub const BIO: Self = Self("bio");
    pub const AVATAR_URL: Self = Self("avatarUrl");
    pub const SIZE_BYTES: Self = Self("sizeBytes");
    pub const MEDIA_TYPE: Self = Self("mediaType");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A single failure, positioned at a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: FieldPath,
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(path: FieldPath, kind: ErrorKind, message: &'static str) -> Self {
        Self {
            path,
            kind,
            message,
        }
    }

    /// Failure of a refinement, attached to its designated target field
    pub fn cross_field(path: FieldPath, message: &'static str) -> Self {
        Self::new(path, ErrorKind::CrossFieldViolation, message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Ordered list of failures: field failures in declaration order, then refinements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Record a field outcome, returning the normalized value when it passed
    pub fn capture<T>(&mut self, outcome: Result<T, FieldError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.0.push(error);
                None
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// All failures attached to `path`, in order
    pub fn for_path(&self, path: FieldPath) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |error| error.path == path)
    }

    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        self.0.iter().any(|error| error.kind == kind)
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of a record validator
pub type ValidationResult<T> = Result<T, ValidationErrors>;
