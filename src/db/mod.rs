//! Database layer for tinytodo.
//!
//! A single SQLite table holds every task. The layer is split three ways:
//!
//! - [`db`]: the owned store handle. Opening it runs the schema initializer.
//! - [`schema`]: creates the tasks table and rejects incompatible existing ones.
//! - [`tasks`]: the task repository (create, lookup, partial update, list, delete).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinytodo::db::{db::Db, tasks::Tasks};
//! use tinytodo::libs::task::PartialTask;
//!
//! let db = Db::open("todo.db")?;
//! let tasks = Tasks::new(&db);
//! let id = tasks.create(&PartialTask::new("Review code"))?;
//! assert!(tasks.get_by_id(id)?.is_some());
//! # Ok::<(), tinytodo::libs::error::StoreError>(())
//! ```

/// Store handle: owns the connection and guarantees an initialized schema.
pub mod db;

/// Idempotent creation and verification of the tasks table.
pub mod schema;

/// Task repository operations.
pub mod tasks;
