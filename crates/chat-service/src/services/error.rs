//! Service layer error types

use chat_common::{domain_status, AppError};
use chat_core::{DomainError, ValidationErrors};

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Rejected input, with every field error the validator produced
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Domain(DomainError),

    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Infrastructure failure outside the domain (e.g. password hashing)
    #[error(transparent)]
    App(#[from] AppError),

    /// Acting user may not perform this action
    #[error("Not allowed to {action}")]
    PermissionDenied { action: &'static str },
}

impl ServiceError {
    pub fn permission_denied(action: &'static str) -> Self {
        Self::PermissionDenied { action }
    }

    /// Field errors, when the input was rejected
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// HTTP-style status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Domain(e) => domain_status(e),
            Self::InvalidCredentials => 401,
            Self::App(e) => e.status_code(),
            Self::PermissionDenied { .. } => 403,
        }
    }

    /// Stable error code for response bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Domain(e) => e.code(),
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::App(e) => e.error_code(),
            Self::PermissionDenied { .. } => "INSUFFICIENT_PERMISSIONS",
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::Validation(errors),
            other => Self::Domain(other),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => AppError::Validation(errors),
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::InvalidCredentials => AppError::InvalidCredentials,
            ServiceError::App(e) => e,
            ServiceError::PermissionDenied { .. } => AppError::InsufficientPermissions,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
