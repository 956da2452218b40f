//! Display text for [`Message`].
//!
//! All user-facing wording lives here so commands only choose which message
//! to show and with which parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskCompleted(id, date) => format!("Task {} marked done on {}", id, date),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s).", count),
            Message::TasksHeader => "Tasks".to_string(),
            Message::TaskHeader(id) => format!("Task {}", id),
            Message::TasksToBeDeleted => "Tasks to be deleted:".to_string(),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} task(s)? This cannot be undone", count),
            Message::DeletionCancelled => "Deletion cancelled".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoChangesDetected => "No changes given, task left as is".to_string(),

            // === STORE MESSAGES ===
            Message::StoreReady(path) => format!("Task store ready at {}", path),
            Message::StoreOpened(path) => format!("Opened task store {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved, database path: {}", path),
        };

        write!(f, "{}", text)
    }
}
