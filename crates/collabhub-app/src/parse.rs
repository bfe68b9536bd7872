// Rust guideline compliant 2026-08-20

//! Wire-string parsing helpers for CollabHub decisions.
//!
//! The HTTP layer receives statuses, roles, and actions as strings; these
//! helpers turn them into typed values before any decision call.

use crate::error::{AppError, Result};
use collabhub_core::{Action, Role, Status};

/// Parses a status string into a `Status` value.
///
/// # Arguments
///
/// * `value` - Status string ("TODO", "in_progress", ...)
///
/// # Returns
///
/// The parsed status.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<Status> {
    match value.to_lowercase().as_str() {
        "todo" => Ok(Status::Todo),
        "in_progress" | "in-progress" => Ok(Status::InProgress),
        "review" => Ok(Status::Review),
        "done" => Ok(Status::Done),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid status: {}",
            value
        ))),
    }
}

/// Parses a role string into a `Role` value.
///
/// # Arguments
///
/// * `value` - Role string ("ADMIN", "member", ...)
///
/// # Returns
///
/// The parsed role.
///
/// # Errors
///
/// Returns an error if the role is invalid.
pub fn parse_role(value: &str) -> Result<Role> {
    match value.to_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "member" => Ok(Role::Member),
        "viewer" => Ok(Role::Viewer),
        _ => Err(AppError::InvalidInput(format!("Invalid role: {}", value))),
    }
}

/// Parses an action string into an `Action` value.
///
/// Accepts both "edit" and "edit-content" for document content edits,
/// matching the strings the route handlers send.
///
/// # Arguments
///
/// * `value` - Action string ("update-status", "rename", ...)
///
/// # Returns
///
/// The parsed action.
///
/// # Errors
///
/// Returns an error if the action is invalid.
pub fn parse_action(value: &str) -> Result<Action> {
    match value.to_lowercase().as_str() {
        "update-status" | "update_status" => Ok(Action::UpdateStatus),
        "assign" => Ok(Action::Assign),
        "rename" => Ok(Action::Rename),
        "delete" => Ok(Action::Delete),
        "edit" | "edit-content" | "edit_content" => Ok(Action::EditContent),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid action: {}",
            value
        ))),
    }
}
