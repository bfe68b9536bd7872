// Rust guideline compliant 2026-08-20

//! Shared application services for CollabHub decisions.
//!
//! This crate provides the non-HTTP-specific helpers route handlers use
//! around the decision core: wire-string parsing, the consolidated
//! authorize-then-validate flow, standardized decision envelopes, and
//! stable error codes.

pub mod authz;
pub mod error;
pub mod parse;
pub mod response;

pub use authz::{authorize, authorize_status_change, decide_transition};
pub use error::{AppError, ErrorCode, Result};
pub use parse::{parse_action, parse_role, parse_status};
pub use response::{ErrorEnvelope, TransitionDecision};
