//! Merge resolver for partial updates.
//!
//! A partial update names only the fields that change. [`merge`] folds such a
//! patch over the stored task: each field takes the patch value when one is
//! given and otherwise keeps the stored value. A field can be overwritten but
//! never cleared this way.

use super::task::{PartialTask, Task};

/// Resolves the task to persist from the stored task and a partial update.
///
/// The id always comes from `current`.
pub fn merge(current: Task, partial: PartialTask) -> Task {
    Task {
        id: current.id,
        name: partial.name.unwrap_or(current.name),
        category: partial.category.or(current.category),
        start_date: partial.start_date.or(current.start_date),
        due_date: partial.due_date.or(current.due_date),
        completion_date: partial.completion_date.or(current.completion_date),
        status: partial.status.or(current.status),
        priority: partial.priority.or(current.priority),
        description: partial.description.or(current.description),
    }
}
