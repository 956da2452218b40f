//! Error types for the task store.
//!
//! Every fallible store operation returns [`StoreError`]. Absence is not an
//! error for lookups and deletes: those report `Option`/`bool` instead, and
//! only [`StoreError::NotFound`] is raised when an update targets a missing row.

use super::task::TaskId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the task store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be opened or its schema could not be prepared.
    /// Fatal for the session.
    #[error("Failed to initialize task store at {}: {reason}", path.display())]
    SchemaInit { path: PathBuf, reason: String },

    /// Caller-supplied data violates a precondition.
    #[error("Invalid task: {0}")]
    Validation(String),

    /// An update targeted a task that does not exist.
    #[error("Task {0} not found")]
    NotFound(TaskId),

    /// A read statement failed in the storage engine.
    #[error("Failed to read tasks: {0}")]
    Read(#[source] rusqlite::Error),

    /// A write statement failed in the storage engine.
    #[error("Failed to write task: {0}")]
    Write(#[source] rusqlite::Error),
}

impl StoreError {
    pub(crate) fn schema_init(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        StoreError::SchemaInit {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
