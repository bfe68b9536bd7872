// Rust guideline compliant 2026-08-18

//! Finite State Machine module for task status transitions.
//!
//! This module provides functionality for validating status transitions
//! according to the CollabHub lifecycle rules. Progression is forward-only,
//! so completed work is never silently reopened:
//!
//! - Todo → InProgress, Review, Done
//! - InProgress → Review, Done
//! - Review → Done
//! - Done → (terminal)
//!
//! Requesting the current status again is always legal as a no-op.

use crate::{Error, Result, Status};

impl Status {
    /// Returns the legal target statuses for the current status.
    ///
    /// Intermediate steps may be skipped (`Todo` can move straight to
    /// `Done`), but no backward edge exists. `Done` returns an empty list.
    ///
    /// # Returns
    ///
    /// Vector of legal target statuses, in nominal order.
    #[must_use]
    pub fn allowed_next_statuses(&self) -> Vec<Status> {
        match self {
            Status::Todo => vec![Status::InProgress, Status::Review, Status::Done],
            Status::InProgress => vec![Status::Review, Status::Done],
            Status::Review => vec![Status::Done],
            Status::Done => Vec::new(),
        }
    }

    /// Checks if a transition to the requested status is valid.
    ///
    /// # Arguments
    ///
    /// * `requested` - The requested target status
    ///
    /// # Returns
    ///
    /// True if `requested` equals the current status (no-op) or is in the
    /// allowed next set; false otherwise, including every backward move
    /// such as `Done → Review`.
    #[must_use]
    pub fn is_valid_transition(&self, requested: Status) -> bool {
        requested == *self || self.allowed_next_statuses().contains(&requested)
    }

    /// Validates a transition to the requested status.
    ///
    /// # Arguments
    ///
    /// * `requested` - The requested target status
    ///
    /// # Returns
    ///
    /// Ok if the transition is valid.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` naming the disallowed pair and
    /// enumerating the legal alternatives, or stating that the task is
    /// complete when the current status is terminal.
    pub fn can_transition_to(&self, requested: Status) -> Result<()> {
        if self.is_valid_transition(requested) {
            return Ok(());
        }

        let allowed = self.allowed_next_statuses();
        if allowed.is_empty() {
            return Err(Error::InvalidTransition(format!(
                "Cannot transition from {} to {}: task is complete, no further transitions",
                self, requested
            )));
        }

        let alternatives = allowed
            .iter()
            .map(Status::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Err(Error::InvalidTransition(format!(
            "Cannot transition from {} to {}: allowed next statuses are {}",
            self, requested, alternatives
        )))
    }

    /// Returns the next status in nominal order reachable from the
    /// current status, for "advance one step" UI actions.
    ///
    /// # Returns
    ///
    /// The first status in nominal order that is later than the current
    /// status and legal to move to, or None for `Done`.
    #[must_use]
    pub fn next_immediate(&self) -> Option<Status> {
        let allowed = self.allowed_next_statuses();
        Status::NOMINAL_ORDER
            .into_iter()
            .find(|status| status.rank() > self.rank() && allowed.contains(status))
    }
}

/// Validates a status transition between two snapshot values.
///
/// # Arguments
///
/// * `current` - The status loaded from storage
/// * `requested` - The requested target status
///
/// # Returns
///
/// Ok if the transition is valid.
///
/// # Errors
///
/// Returns an error if the transition is not allowed.
pub fn validate_transition(current: Status, requested: Status) -> Result<()> {
    current.can_transition_to(requested)
}
