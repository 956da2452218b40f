//! # Tinytodo
//!
//! A local task-tracking store backed by SQLite, with a small command-line
//! front end.
//!
//! ## Features
//!
//! - **Task Store**: Create, look up, list and delete tasks
//! - **Partial Edits**: Change only the fields you name, keep everything else
//! - **Stable Ids**: Ids are assigned by the store and never reused
//! - **Terminal Output**: Tables or JSON for listing tasks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinytodo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
