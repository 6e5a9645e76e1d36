use serde::{Deserialize, Serialize};

/// Lifecycle label for a task, stored as its own table row so the set of
/// statuses is data-driven rather than a code-level enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: i64,
    pub name: String,
}

/// A task as the user sees it. The nested status is held by value: it is a
/// snapshot taken when the row was read, not a live link to the status row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Storage-assigned identifier; 0 until the row is persisted. Inserting
    /// does not backfill it, callers re-list to observe the real id.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(name: &str, description: &str, status: TaskStatus) -> Self {
        Task {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            status,
        }
    }
}
