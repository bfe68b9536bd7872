// Rust guideline compliant 2026-08-18

//! Permission policy for CollabHub resources.
//!
//! A single policy table replaces the per-route permission checks the
//! product accumulated, so every enforcement point evaluates the same
//! rules. Decisions are total: `false` means "not permitted", and no
//! decision path errors or panics.
//!
//! Rules by resource kind:
//!
//! - Task: status updates require being the assignee (or the task being
//!   unassigned); delete requires being the creator regardless of role;
//!   assign requires admin or creator.
//! - Document: admins may edit and delete any document, but rename is
//!   author-only for everyone. Rename authority is strictly narrower than
//!   edit authority; this asymmetry is intentional product policy.
//! - File: rename is uploader-only; delete is admin-or-uploader.
//! - Channel: rename and delete are admin-or-owner, except reserved
//!   channels ("general" by default) which nobody may rename or delete.
//! - Viewer: never permitted to do anything.

use crate::config::PolicyConfig;
use crate::{Action, Actor, Resource, Role, TaskRef};

/// Default reserved channel name.
pub const GENERAL_CHANNEL: &str = "general";

/// Permission policy over CollabHub resources.
///
/// Holds the reserved channel name list; everything else in the policy
/// table is fixed product behavior. Safe to share across any number of
/// concurrent callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPolicy {
    reserved_channel_names: Vec<String>,
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self {
            reserved_channel_names: vec![GENERAL_CHANNEL.to_string()],
        }
    }
}

impl PermissionPolicy {
    /// Creates a policy from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            reserved_channel_names: config.reserved_channel_names.clone(),
        }
    }

    /// Checks whether a channel name is reserved.
    ///
    /// Reserved channels can never be renamed or deleted, by anyone.
    #[must_use]
    pub fn is_reserved_channel(&self, name: &str) -> bool {
        self.reserved_channel_names.iter().any(|n| n == name)
    }

    /// Decides whether an actor may perform an action on a resource.
    ///
    /// # Arguments
    ///
    /// * `action` - The action being attempted
    /// * `resource` - Snapshot of the target resource
    /// * `actor` - The user attempting the action, with resolved role
    ///
    /// # Returns
    ///
    /// True if the policy table permits the action. Actions with no entry
    /// for the resource kind (e.g. assigning a document) return false.
    #[must_use]
    pub fn can_perform(&self, action: Action, resource: &Resource, actor: &Actor) -> bool {
        // Viewers never mutate anything.
        if actor.role == Role::Viewer {
            return false;
        }

        match (resource, action) {
            (Resource::Task(task), Action::UpdateStatus) => {
                evaluate_task_status_permission(task, &actor.id)
            }
            // Task deletion is creator-only; admin grants no override.
            (Resource::Task(task), Action::Delete) => task.creator_id == actor.id,
            (Resource::Task(task), Action::Assign) => {
                actor.role == Role::Admin || task.creator_id == actor.id
            }
            (Resource::Document(doc), Action::EditContent) => {
                actor.role == Role::Admin || doc.author_id == actor.id
            }
            // Rename is author-only even for admins.
            (Resource::Document(doc), Action::Rename) => doc.author_id == actor.id,
            (Resource::Document(doc), Action::Delete) => {
                evaluate_delete_permission(&doc.author_id, &actor.id, actor.role)
            }
            (Resource::File(file), Action::Rename) => file.uploaded_by_id == actor.id,
            (Resource::File(file), Action::Delete) => {
                evaluate_delete_permission(&file.uploaded_by_id, &actor.id, actor.role)
            }
            (Resource::Channel(channel), Action::Rename | Action::Delete) => {
                if self.is_reserved_channel(&channel.name) {
                    return false;
                }
                actor.role == Role::Admin || channel.owner_id == actor.id
            }
            _ => false,
        }
    }
}

/// Decides whether an actor may perform an action, under the default
/// policy (reserved channel list = `["general"]`).
///
/// # Arguments
///
/// * `action` - The action being attempted
/// * `resource` - Snapshot of the target resource
/// * `actor` - The user attempting the action, with resolved role
///
/// # Returns
///
/// True if the policy table permits the action.
#[must_use]
pub fn can_perform(action: Action, resource: &Resource, actor: &Actor) -> bool {
    PermissionPolicy::default().can_perform(action, resource, actor)
}

/// Checks the task-specific status update rule.
///
/// The actor must be the assignee, or the task must be unassigned. Role
/// is deliberately not consulted here; callers gate out viewers via the
/// policy table before this check applies.
#[must_use]
pub fn evaluate_task_status_permission(task: &TaskRef, actor_id: &str) -> bool {
    match &task.assignee_id {
        Some(assignee) => assignee == actor_id,
        None => true,
    }
}

/// Checks the shared admin-or-owner delete rule.
///
/// Document and file deletion differ only in which field names the owner
/// (author vs. uploader), so both call this with the resolved owner id.
#[must_use]
pub fn evaluate_delete_permission(owner_id: &str, actor_id: &str, actor_role: Role) -> bool {
    actor_role == Role::Admin || owner_id == actor_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChannelRef, DocumentRef, FileRef};

    fn task(creator: &str, assignee: Option<&str>) -> Resource {
        Resource::Task(TaskRef {
            id: "t1".to_string(),
            creator_id: creator.to_string(),
            assignee_id: assignee.map(str::to_string),
        })
    }

    fn document(author: &str) -> Resource {
        Resource::Document(DocumentRef {
            id: "d1".to_string(),
            author_id: author.to_string(),
        })
    }

    fn file(uploader: &str) -> Resource {
        Resource::File(FileRef {
            id: "f1".to_string(),
            uploaded_by_id: uploader.to_string(),
        })
    }

    fn channel(name: &str, owner: &str) -> Resource {
        Resource::Channel(ChannelRef {
            id: "c1".to_string(),
            name: name.to_string(),
            owner_id: owner.to_string(),
        })
    }

    #[test]
    fn test_viewer_never_permitted() {
        let viewer = Actor::new("u9", Role::Viewer);
        let resources = [
            task("u9", Some("u9")),
            document("u9"),
            file("u9"),
            channel("random", "u9"),
        ];
        let actions = [
            Action::UpdateStatus,
            Action::Assign,
            Action::Rename,
            Action::Delete,
            Action::EditContent,
        ];
        for resource in &resources {
            for action in actions {
                assert!(
                    !can_perform(action, resource, &viewer),
                    "viewer was permitted {} on {:?}",
                    action,
                    resource
                );
            }
        }
    }

    #[test]
    fn test_task_status_update_requires_assignee_or_unassigned() {
        let assigned = task("u1", Some("u1"));
        assert!(can_perform(
            Action::UpdateStatus,
            &assigned,
            &Actor::new("u1", Role::Member)
        ));
        assert!(!can_perform(
            Action::UpdateStatus,
            &assigned,
            &Actor::new("u2", Role::Admin)
        ));

        let unassigned = task("u1", None);
        assert!(can_perform(
            Action::UpdateStatus,
            &unassigned,
            &Actor::new("u2", Role::Member)
        ));
    }

    #[test]
    fn test_task_delete_is_creator_only_even_for_admin() {
        let resource = task("u1", None);
        assert!(can_perform(
            Action::Delete,
            &resource,
            &Actor::new("u1", Role::Member)
        ));
        assert!(!can_perform(
            Action::Delete,
            &resource,
            &Actor::new("u2", Role::Admin)
        ));
    }

    #[test]
    fn test_task_assign_admin_or_creator() {
        let resource = task("u1", None);
        assert!(can_perform(
            Action::Assign,
            &resource,
            &Actor::new("u2", Role::Admin)
        ));
        assert!(can_perform(
            Action::Assign,
            &resource,
            &Actor::new("u1", Role::Member)
        ));
        assert!(!can_perform(
            Action::Assign,
            &resource,
            &Actor::new("u2", Role::Member)
        ));
    }

    #[test]
    fn test_document_rename_narrower_than_edit() {
        let resource = document("u1");
        let admin = Actor::new("u2", Role::Admin);
        assert!(can_perform(Action::EditContent, &resource, &admin));
        assert!(!can_perform(Action::Rename, &resource, &admin));

        let author = Actor::new("u1", Role::Member);
        assert!(can_perform(Action::Rename, &resource, &author));
    }

    #[test]
    fn test_document_delete_admin_or_author() {
        let resource = document("u1");
        assert!(can_perform(
            Action::Delete,
            &resource,
            &Actor::new("u2", Role::Admin)
        ));
        assert!(can_perform(
            Action::Delete,
            &resource,
            &Actor::new("u1", Role::Member)
        ));
        assert!(!can_perform(
            Action::Delete,
            &resource,
            &Actor::new("u2", Role::Member)
        ));
    }

    #[test]
    fn test_file_rename_uploader_only() {
        let resource = file("u1");
        assert!(!can_perform(
            Action::Rename,
            &resource,
            &Actor::new("u2", Role::Admin)
        ));
        assert!(can_perform(
            Action::Rename,
            &resource,
            &Actor::new("u1", Role::Member)
        ));
    }

    #[test]
    fn test_file_delete_admin_or_uploader() {
        let resource = file("u1");
        assert!(!can_perform(
            Action::Delete,
            &resource,
            &Actor::new("u2", Role::Member)
        ));
        assert!(can_perform(
            Action::Delete,
            &resource,
            &Actor::new("u3", Role::Admin)
        ));
    }

    #[test]
    fn test_general_channel_permanently_protected() {
        let resource = channel(GENERAL_CHANNEL, "u1");
        for role in [Role::Admin, Role::Member, Role::Viewer] {
            assert!(!can_perform(Action::Rename, &resource, &Actor::new("u1", role)));
            assert!(!can_perform(Action::Delete, &resource, &Actor::new("u1", role)));
        }
    }

    #[test]
    fn test_channel_rename_admin_or_owner() {
        let resource = channel("random", "u1");
        assert!(can_perform(
            Action::Rename,
            &resource,
            &Actor::new("u2", Role::Admin)
        ));
        assert!(can_perform(
            Action::Delete,
            &resource,
            &Actor::new("u1", Role::Member)
        ));
        assert!(!can_perform(
            Action::Rename,
            &resource,
            &Actor::new("u2", Role::Member)
        ));
    }

    #[test]
    fn test_action_outside_table_is_denied() {
        let resource = document("u1");
        assert!(!can_perform(
            Action::Assign,
            &resource,
            &Actor::new("u1", Role::Admin)
        ));
        assert!(!can_perform(
            Action::UpdateStatus,
            &resource,
            &Actor::new("u1", Role::Admin)
        ));
    }

    #[test]
    fn test_custom_reserved_channel_list() {
        let config = PolicyConfig {
            reserved_channel_names: vec!["general".to_string(), "announcements".to_string()],
        };
        let policy = PermissionPolicy::from_config(&config);
        let resource = channel("announcements", "u1");
        assert!(!policy.can_perform(Action::Delete, &resource, &Actor::new("u1", Role::Admin)));
    }

    #[test]
    fn test_evaluate_task_status_permission() {
        let assigned = TaskRef {
            id: "t1".to_string(),
            creator_id: "u0".to_string(),
            assignee_id: Some("u1".to_string()),
        };
        assert!(evaluate_task_status_permission(&assigned, "u1"));
        assert!(!evaluate_task_status_permission(&assigned, "u2"));

        let unassigned = TaskRef {
            id: "t2".to_string(),
            creator_id: "u0".to_string(),
            assignee_id: None,
        };
        assert!(evaluate_task_status_permission(&unassigned, "anyUser"));
    }

    #[test]
    fn test_evaluate_delete_permission() {
        assert!(evaluate_delete_permission("u1", "u1", Role::Member));
        assert!(evaluate_delete_permission("u1", "u2", Role::Admin));
        assert!(!evaluate_delete_permission("u1", "u2", Role::Member));
    }
}
