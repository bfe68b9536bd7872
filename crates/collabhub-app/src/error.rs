// Rust guideline compliant 2026-08-20

//! Error handling for CollabHub application services.

use collabhub_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for handler responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested status transition is invalid.
    InvalidTransition,
    /// The actor is not permitted to perform the action.
    PermissionDenied,
    /// Policy configuration failed validation.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading configuration.
    IoError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The actor is not permitted to perform the requested action.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::PermissionDenied(_) => ErrorCode::PermissionDenied,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidPolicy(_) => ErrorCode::ValidationError,
                CoreError::Io(_) => ErrorCode::IoError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::PermissionDenied(action) => Some(serde_json::json!({
                "action": action,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_maps_to_code() {
        let err = AppError::from(CoreError::InvalidTransition("x".to_string()));
        assert_eq!(err.code(), ErrorCode::InvalidTransition);
    }

    #[test]
    fn test_permission_denied_carries_details() {
        let err = AppError::PermissionDenied("delete on file f1".to_string());
        assert_eq!(err.code(), ErrorCode::PermissionDenied);
        let details = err.details().unwrap();
        assert_eq!(details["action"], "delete on file f1");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::PermissionDenied).unwrap();
        assert_eq!(json, "\"permission_denied\"");
    }
}
