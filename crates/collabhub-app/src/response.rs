// Rust guideline compliant 2026-08-20

//! Decision envelopes for handler responses.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Outcome of a status transition check, in the wire shape route
/// handlers return to the web client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDecision {
    /// Whether the requested transition is legal.
    pub is_valid: bool,
    /// Rejection message when the transition is not legal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransitionDecision {
    /// Creates an allowed decision.
    #[must_use]
    pub fn allowed() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// Creates a rejected decision with a message.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Standard error envelope for handler responses.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}
