//! Task repository.
//!
//! [`Tasks`] exposes create, lookup, partial update, listing and deletion over
//! the tasks table. Every operation borrows an open [`Db`] handle and runs one
//! parameterized statement (update runs a lookup first). Statements are
//! prepared through the connection's statement cache and handed back to it when
//! they drop, on success and error paths alike.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinytodo::db::{db::Db, tasks::Tasks};
//! use tinytodo::libs::task::PartialTask;
//!
//! let db = Db::open("todo.db")?;
//! let tasks = Tasks::new(&db);
//!
//! let id = tasks.create(&PartialTask::new("Water plants"))?;
//! tasks.update(id, PartialTask { status: Some("done".into()), ..Default::default() })?;
//!
//! for task in tasks.list_all() {
//!     let task = task?;
//!     println!("{}: {}", task.id, task.name);
//! }
//! # Ok::<(), tinytodo::libs::error::StoreError>(())
//! ```

use super::db::Db;
use super::schema::COLUMNS;
use crate::libs::error::{Result, StoreError};
use crate::libs::merge::merge;
use crate::libs::task::{PartialTask, Task, TaskId};
use rusqlite::types::{Type, ValueRef};
use rusqlite::{params, OptionalExtension, Row};
use std::iter::FusedIterator;
use tracing::{debug, warn};

const INSERT_TASK: &str = "INSERT INTO Tasks (Name, Category, StartDate, DueDate, CompletionDate, Status, Priority, Description)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TASK_BY_ID: &str = "SELECT Id, Name, Category, StartDate, DueDate, CompletionDate, Status, Priority, Description
    FROM Tasks WHERE Id = ?1";
const SELECT_TASKS_AFTER: &str = "SELECT Id, Name, Category, StartDate, DueDate, CompletionDate, Status, Priority, Description
    FROM Tasks WHERE Id > ?1 ORDER BY Id ASC LIMIT ?2";
const UPDATE_TASK: &str = "UPDATE Tasks SET Name = ?2, Category = ?3, StartDate = ?4, DueDate = ?5, CompletionDate = ?6,
    Status = ?7, Priority = ?8, Description = ?9 WHERE Id = ?1";
const DELETE_TASK: &str = "DELETE FROM Tasks WHERE Id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM Tasks";

/// Number of rows [`TaskCursor`] fetches per query.
pub const PAGE_SIZE: usize = 128;

pub struct Tasks<'db> {
    db: &'db Db,
}

impl<'db> Tasks<'db> {
    pub fn new(db: &'db Db) -> Self {
        Tasks { db }
    }

    /// Inserts a new task and returns its store-assigned id.
    ///
    /// `task.name` must be present and contain something other than
    /// whitespace: an empty or whitespace-only name is rejected with
    /// [`StoreError::Validation`] and nothing is written. Unset optional fields
    /// are stored as NULL.
    pub fn create(&self, task: &PartialTask) -> Result<TaskId> {
        let name = require_name(task.name.as_deref())?;

        let mut stmt = self.db.conn().prepare_cached(INSERT_TASK).map_err(StoreError::Write)?;
        let id = stmt
            .insert(params![
                name,
                task.category,
                task.start_date,
                task.due_date,
                task.completion_date,
                task.status,
                task.priority,
                task.description,
            ])
            .map_err(StoreError::Write)?;

        debug!(id, "task created");
        Ok(id)
    }

    /// Fetches one task. A missing id is `Ok(None)`.
    pub fn get_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let mut stmt = self.db.conn().prepare_cached(SELECT_TASK_BY_ID).map_err(StoreError::Read)?;

        stmt.query_row(params![id], task_from_row).optional().map_err(StoreError::Read)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Fields set in `partial` replace the stored values; unset fields keep
    /// them. The merged task is written with a single statement.
    ///
    /// The lookup and the write are separate statements. Another writer that
    /// updates or deletes the same id in between can have its change lost; if
    /// the row is gone by the time of the write, [`StoreError::NotFound`] is
    /// returned.
    pub fn update(&self, id: TaskId, partial: PartialTask) -> Result<()> {
        if partial.name.is_some() {
            require_name(partial.name.as_deref())?;
        }

        let current = self.get_by_id(id)?.ok_or(StoreError::NotFound(id))?;
        let task = merge(current, partial);

        let mut stmt = self.db.conn().prepare_cached(UPDATE_TASK).map_err(StoreError::Write)?;
        let affected = stmt
            .execute(params![
                task.id,
                task.name,
                task.category,
                task.start_date,
                task.due_date,
                task.completion_date,
                task.status,
                task.priority,
                task.description,
            ])
            .map_err(StoreError::Write)?;

        if affected == 0 {
            warn!(id, "task disappeared before the update was written");
            return Err(StoreError::NotFound(id));
        }

        debug!(id, "task updated");
        Ok(())
    }

    /// Returns a lazy sequence over every task in ascending id order.
    ///
    /// Each call starts a fresh scan. Rows are read [`PAGE_SIZE`] at a time.
    pub fn list_all(&self) -> TaskCursor<'db> {
        TaskCursor::new(self.db, PAGE_SIZE)
    }

    /// Collects [`Tasks::list_all`] into a vector.
    pub fn list_all_vec(&self) -> Result<Vec<Task>> {
        self.list_all().collect()
    }

    /// Removes a task. Returns `false` when no such task existed.
    pub fn delete(&self, id: TaskId) -> Result<bool> {
        let mut stmt = self.db.conn().prepare_cached(DELETE_TASK).map_err(StoreError::Write)?;
        let affected = stmt.execute(params![id]).map_err(StoreError::Write)?;

        debug!(id, affected, "task delete");
        Ok(affected > 0)
    }

    /// Removes several tasks in one transaction and returns the ids that were
    /// actually removed, in request order. Unknown ids are skipped.
    pub fn delete_many(&self, ids: &[TaskId]) -> Result<Vec<TaskId>> {
        let tx = self.db.conn().unchecked_transaction().map_err(StoreError::Write)?;

        let mut deleted = Vec::with_capacity(ids.len());
        {
            let mut stmt = tx.prepare_cached(DELETE_TASK).map_err(StoreError::Write)?;
            for id in ids {
                if stmt.execute(params![id]).map_err(StoreError::Write)? > 0 {
                    deleted.push(*id);
                }
            }
        }
        tx.commit().map_err(StoreError::Write)?;

        debug!(requested = ids.len(), deleted = deleted.len(), "tasks deleted");
        Ok(deleted)
    }

    /// Number of stored tasks.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .db
            .conn()
            .query_row(COUNT_TASKS, [], |row| row.get(0))
            .map_err(StoreError::Read)?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}

/// Lazy, ordered scan over the tasks table.
///
/// Rows are fetched in keyset pages (`Id > last seen`), so no statement stays
/// open between calls to `next` and the table is never loaded whole. An engine
/// failure is yielded once as `Err(StoreError::Read)`, after which the cursor
/// is exhausted.
pub struct TaskCursor<'db> {
    db: &'db Db,
    page: std::vec::IntoIter<Task>,
    page_size: usize,
    last_id: TaskId,
    exhausted: bool,
}

impl<'db> TaskCursor<'db> {
    fn new(db: &'db Db, page_size: usize) -> Self {
        TaskCursor {
            db,
            page: Vec::new().into_iter(),
            page_size: page_size.max(1),
            last_id: TaskId::MIN,
            exhausted: false,
        }
    }

    /// Changes how many rows each query fetches.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn fetch_page(&self) -> Result<Vec<Task>> {
        let limit = i64::try_from(self.page_size).unwrap_or(i64::MAX);
        let mut stmt = self.db.conn().prepare_cached(SELECT_TASKS_AFTER).map_err(StoreError::Read)?;
        let rows = stmt
            .query_map(params![self.last_id, limit], task_from_row)
            .map_err(StoreError::Read)?;

        rows.collect::<rusqlite::Result<Vec<Task>>>().map_err(StoreError::Read)
    }
}

impl Iterator for TaskCursor<'_> {
    type Item = Result<Task>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(task) = self.page.next() {
                self.last_id = task.id;
                return Some(Ok(task));
            }
            if self.exhausted {
                return None;
            }

            match self.fetch_page() {
                Ok(page) => {
                    self.exhausted = page.len() < self.page_size;
                    self.page = page.into_iter();
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl FusedIterator for TaskCursor<'_> {}

fn require_name(name: Option<&str>) -> Result<&str> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        Some(_) => Err(StoreError::Validation("task name must not be empty".to_string())),
        None => Err(StoreError::Validation("task name is required".to_string())),
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        category: text_column(row, 2)?,
        start_date: text_column(row, 3)?,
        due_date: text_column(row, 4)?,
        completion_date: text_column(row, 5)?,
        status: text_column(row, 6)?,
        priority: text_column(row, 7)?,
        description: text_column(row, 8)?,
    })
}

/// Reads an optional text column. Numbers are rendered as text, which covers
/// stores whose date columns were declared with numeric affinity.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(value) => Ok(Some(value.to_string())),
        ValueRef::Real(value) => Ok(Some(value.to_string())),
        value @ ValueRef::Text(_) => value
            .as_str()
            .map(|text| Some(text.to_string()))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(idx, COLUMNS[idx].to_string(), Type::Blob)),
    }
}
