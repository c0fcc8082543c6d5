//! Application error types
//!
//! The outermost error shape: what a caller (HTTP handler, CLI, UI bridge)
//! turns into a status code and a JSON body.

use chat_core::{DomainError, ValidationErrors};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// Rejected input; the field errors are rendered in `details`
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Domain(DomainError),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

/// HTTP-style status for a domain error
#[must_use]
pub fn domain_status(err: &DomainError) -> u16 {
    if err.is_validation() {
        400
    } else if err.is_not_found() {
        404
    } else if err.is_conflict() {
        409
    } else {
        500
    }
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidCredentials => 401,
            Self::InsufficientPermissions => 403,
            Self::Domain(e) => domain_status(e),
            Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Field errors behind this error, if it is a validation failure
    #[must_use]
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Domain(e) => e.validation_errors(),
            _ => None,
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::Validation(errors),
            other => Self::Domain(other),
        }
    }
}

/// JSON error body
///
/// Validation failures carry the ordered `{ path, kind, message }` list in
/// `details` so clients can place each message next to its input.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        match err.field_errors() {
            Some(errors) => Self {
                code: err.error_code().to_string(),
                message: "Validation failed".to_string(),
                details: serde_json::to_value(errors).ok(),
            },
            None => Self {
                code: err.error_code().to_string(),
                message: err.to_string(),
                details: None,
            },
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
