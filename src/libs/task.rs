//! Task data model.
//!
//! [`Task`] is the stored form of a task: it always carries a store-assigned
//! id and a name. [`PartialTask`] is the task-shaped input used by create and
//! update, where any of the eight data fields may be left unset.
//!
//! Unset optional fields are `None` and are stored as SQL `NULL`. An empty
//! string is a value like any other and is never confused with `None`.

use serde::{Deserialize, Serialize};

/// Store-assigned task identifier.
pub type TaskId = i64;

/// A task as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub completion_date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
}

/// A task-shaped value where any subset of the data fields may be set.
///
/// Used as the input to [`Tasks::create`](crate::db::tasks::Tasks::create),
/// where `name` is required, and to
/// [`Tasks::update`](crate::db::tasks::Tasks::update), where every unset field
/// keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialTask {
    pub name: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub completion_date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
}

impl PartialTask {
    /// Creates a partial task with only the name set.
    pub fn new(name: &str) -> Self {
        PartialTask {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
            && self.completion_date.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.description.is_none()
    }
}

impl From<Task> for PartialTask {
    fn from(task: Task) -> Self {
        PartialTask {
            name: Some(task.name),
            category: task.category,
            start_date: task.start_date,
            due_date: task.due_date,
            completion_date: task.completion_date,
            status: task.status,
            priority: task.priority,
            description: task.description,
        }
    }
}
