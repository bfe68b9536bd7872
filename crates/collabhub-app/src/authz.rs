// Rust guideline compliant 2026-08-20

//! Authorization and transition flows for route handlers.
//!
//! The product originally repeated "ADMIN can X, MEMBER can X if owner,
//! VIEWER never" inline across route handlers and UI components. These
//! helpers run the consolidated policy table and the status FSM in the
//! one agreed order: authorize the actor first, then validate the
//! transition. Persistence and notification side effects stay with the
//! caller.

use crate::error::{AppError, Result};
use crate::response::TransitionDecision;
use collabhub_core::{
    validate_transition, Action, Actor, PermissionPolicy, Resource, Status, TaskRef,
};

/// Checks a status transition and wraps the outcome in the wire envelope.
///
/// # Arguments
///
/// * `current` - Status loaded from storage
/// * `requested` - Requested target status
///
/// # Returns
///
/// An allowed decision, or a rejected one carrying the core FSM message.
#[must_use]
pub fn decide_transition(current: Status, requested: Status) -> TransitionDecision {
    match validate_transition(current, requested) {
        Ok(()) => TransitionDecision::allowed(),
        Err(err) => TransitionDecision::rejected(err.to_string()),
    }
}

/// Authorizes an action against the permission policy.
///
/// # Arguments
///
/// * `policy` - The permission policy in effect
/// * `action` - The action being attempted
/// * `resource` - Snapshot of the target resource
/// * `actor` - The user attempting the action
///
/// # Returns
///
/// Ok if the policy permits the action.
///
/// # Errors
///
/// Returns `AppError::PermissionDenied` with a user-facing message when
/// the policy table denies the action.
pub fn authorize(
    policy: &PermissionPolicy,
    action: Action,
    resource: &Resource,
    actor: &Actor,
) -> Result<()> {
    if policy.can_perform(action, resource, actor) {
        return Ok(());
    }
    Err(AppError::PermissionDenied(denial_message(
        policy, action, resource,
    )))
}

/// Authorizes and validates a task status change in one call.
///
/// This is the exact sequence route handlers follow after loading the
/// task: permission gate first, transition check second.
///
/// # Arguments
///
/// * `policy` - The permission policy in effect
/// * `task` - Snapshot of the task being updated
/// * `current` - Status loaded from storage
/// * `requested` - Requested target status
/// * `actor` - The user attempting the change
///
/// # Returns
///
/// Ok if the actor may update the task and the transition is legal.
///
/// # Errors
///
/// Returns `AppError::PermissionDenied` if the actor may not update the
/// task's status, or the core transition error if the move is illegal.
pub fn authorize_status_change(
    policy: &PermissionPolicy,
    task: &TaskRef,
    current: Status,
    requested: Status,
    actor: &Actor,
) -> Result<()> {
    let resource = Resource::Task(task.clone());
    authorize(policy, Action::UpdateStatus, &resource, actor)?;
    validate_transition(current, requested)?;
    Ok(())
}

/// Builds the user-facing denial message for a (resource, action) pair.
fn denial_message(policy: &PermissionPolicy, action: Action, resource: &Resource) -> String {
    match (resource, action) {
        (Resource::Task(_), Action::UpdateStatus) => {
            "Only the assignee can update the status of an assigned task".to_string()
        }
        (Resource::Task(_), Action::Delete) => {
            "Only the task creator can delete the task".to_string()
        }
        (Resource::Task(_), Action::Assign) => {
            "Only an admin or the task creator can assign the task".to_string()
        }
        (Resource::Document(_), Action::Rename) => {
            "Only the document author can rename the document".to_string()
        }
        (Resource::Document(_), Action::EditContent) => {
            "Only an admin or the document author can edit the document".to_string()
        }
        (Resource::Document(_), Action::Delete) => {
            "Only an admin or the document author can delete the document".to_string()
        }
        (Resource::File(_), Action::Rename) => {
            "Only the uploader can rename the file".to_string()
        }
        (Resource::File(_), Action::Delete) => {
            "Only an admin or the uploader can delete the file".to_string()
        }
        (Resource::Channel(channel), Action::Rename | Action::Delete)
            if policy.is_reserved_channel(&channel.name) =>
        {
            format!("The \"{}\" channel cannot be renamed or deleted", channel.name)
        }
        (Resource::Channel(_), Action::Rename | Action::Delete) => {
            "Only an admin or the channel owner can modify the channel".to_string()
        }
        (resource, action) => format!(
            "Action {} is not available for this {}",
            action,
            kind_name(resource)
        ),
    }
}

/// Returns the lowercase kind name for a resource.
fn kind_name(resource: &Resource) -> &'static str {
    match resource {
        Resource::Task(_) => "task",
        Resource::Document(_) => "document",
        Resource::File(_) => "file",
        Resource::Channel(_) => "channel",
    }
}
