// Rust guideline compliant 2026-08-18

//! CollabHub Core Library
//!
//! This crate provides the decision core for the CollabHub task engine:
//! - Data models (Status, Role, Action, Actor, resource snapshots)
//! - FSM logic (forward-only status transitions, validation)
//! - Permission policy (role- and ownership-based authorization)
//! - Policy configuration (reserved channel names)
//! - Error types and result handling
//!
//! Everything here is pure, synchronous computation over caller-supplied
//! snapshots: no I/O, no persistence, no shared mutable state. Callers
//! load resource state, ask for a decision, and handle persistence and
//! notifications themselves.

pub mod config;
pub mod error;
pub mod fsm;
pub mod models;
pub mod permissions;

pub use config::PolicyConfig;
pub use error::{Error, Result};
pub use fsm::validate_transition;
pub use models::{Action, Actor, ChannelRef, DocumentRef, FileRef, Resource, Role, Status, TaskRef};
pub use permissions::{
    can_perform, evaluate_delete_permission, evaluate_task_status_permission, PermissionPolicy,
    GENERAL_CHANNEL,
};
