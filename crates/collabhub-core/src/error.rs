// Rust guideline compliant 2026-08-18

//! Error types for the CollabHub core library.

use thiserror::Error;

/// Result type alias for CollabHub core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CollabHub core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid status transition.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// Invalid policy configuration.
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}
