// Rust guideline compliant 2026-08-18

//! Core data models for CollabHub decisions.
//!
//! Everything here is an ephemeral decision input: callers build these
//! values from their own storage snapshots immediately before a decision
//! call and discard them afterwards. The authoritative records live in the
//! storage layer; this crate never mutates them.

use serde::{Deserialize, Serialize};

/// Status of a task in the lifecycle state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Task has been created and not started.
    Todo,
    /// Task is actively being worked on.
    InProgress,
    /// Task is awaiting review.
    Review,
    /// Task is complete. Terminal; completed work requires a new task.
    Done,
}

impl Status {
    /// All statuses in nominal progression order.
    pub const NOMINAL_ORDER: [Status; 4] =
        [Status::Todo, Status::InProgress, Status::Review, Status::Done];

    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Review => "REVIEW",
            Status::Done => "DONE",
        }
    }

    /// Returns the position of the status in nominal order.
    #[must_use]
    pub(crate) fn rank(&self) -> usize {
        match self {
            Status::Todo => 0,
            Status::InProgress => 1,
            Status::Review => 2,
            Status::Done => 3,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workspace-scoped authorization level. One role per (user, workspace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full workspace administration.
    Admin,
    /// Regular contributor.
    Member,
    /// Read-only access; never permitted to mutate anything.
    Viewer,
}

impl Role {
    /// Returns the wire representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
            Role::Viewer => "VIEWER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action subject to a permission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Change a task's lifecycle status.
    UpdateStatus,
    /// Assign a task to a user.
    Assign,
    /// Rename a document, file, or channel.
    Rename,
    /// Delete a resource.
    Delete,
    /// Edit a document's body content.
    EditContent,
}

impl Action {
    /// Returns the wire representation of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::UpdateStatus => "update-status",
            Action::Assign => "assign",
            Action::Rename => "rename",
            Action::Delete => "delete",
            Action::EditContent => "edit-content",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user attempting an action, with workspace membership already
/// resolved by the caller. The core never performs role lookups itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User identifier.
    pub id: String,
    /// Role held in the workspace the resource belongs to.
    pub role: Role,
}

impl Actor {
    /// Creates an actor from an id and a resolved workspace role.
    #[must_use]
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), role }
    }
}

/// Snapshot of a task, as read by permission decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    /// Task identifier.
    pub id: String,
    /// User who created the task.
    pub creator_id: String,
    /// Current assignee, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Snapshot of a document. Documents have no assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    /// Document identifier.
    pub id: String,
    /// User who authored the document.
    pub author_id: String,
}

/// Snapshot of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    /// File identifier.
    pub id: String,
    /// User who uploaded the file.
    pub uploaded_by_id: String,
}

/// Snapshot of a chat channel.
///
/// `owner_id` is the single authoritative ownership attribute; callers are
/// responsible for resolving it from whatever the storage layer tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRef {
    /// Channel identifier.
    pub id: String,
    /// Channel name. Reserved names are permanently protected.
    pub name: String,
    /// User who owns the channel.
    pub owner_id: String,
}

/// A resource subject to a permission decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    /// A task.
    Task(TaskRef),
    /// A document.
    Document(DocumentRef),
    /// An uploaded file.
    File(FileRef),
    /// A chat channel.
    Channel(ChannelRef),
}

impl Resource {
    /// Returns the resource identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Resource::Task(task) => &task.id,
            Resource::Document(doc) => &doc.id,
            Resource::File(file) => &file.id,
            Resource::Channel(channel) => &channel.id,
        }
    }

    /// Returns the owning user id for the resource.
    ///
    /// This is the creator for tasks, author for documents, uploader for
    /// files, and owner for channels. Delete decisions for documents and
    /// files share one rule parameterized by this accessor.
    #[must_use]
    pub fn owner_id(&self) -> &str {
        match self {
            Resource::Task(task) => &task.creator_id,
            Resource::Document(doc) => &doc.author_id,
            Resource::File(file) => &file.uploaded_by_id,
            Resource::Channel(channel) => &channel.owner_id,
        }
    }
}
