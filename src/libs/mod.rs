//! Core library modules for tinytodo.
//!
//! - **Data model**: [`task`] with the stored and partial task types
//! - **Merge resolver**: [`merge`] for partial updates
//! - **Errors**: [`error`] with the store's error taxonomy
//! - **Configuration**: [`config`] and [`data_storage`]
//! - **Output**: [`messages`] and [`view`]
//!
//! ## Usage
//!
//! ```rust
//! use tinytodo::libs::merge::merge;
//! use tinytodo::libs::task::{PartialTask, Task};
//!
//! let current = Task {
//!     id: 1,
//!     name: "Draft".into(),
//!     category: Some("work".into()),
//!     start_date: None,
//!     due_date: None,
//!     completion_date: None,
//!     status: None,
//!     priority: None,
//!     description: None,
//! };
//! let merged = merge(current, PartialTask { due_date: Some("2024-02-02".into()), ..Default::default() });
//! assert_eq!(merged.category.as_deref(), Some("work"));
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod merge;
pub mod messages;
pub mod task;
pub mod view;
