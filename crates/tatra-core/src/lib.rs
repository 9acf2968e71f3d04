//! Core library for the tatra task tracker.
//!
//! This crate provides the task record model, the JSON-file backed
//! [`TaskStore`], error handling, and the display types used by the
//! `task-cli` binary.
//!
//! # Quick Start
//!
//! ```rust
//! use tatra_core::{display::Tasks, TaskStoreBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("tasks.json");
//!
//! let mut store = TaskStoreBuilder::new().with_file_path(Some(&path)).build()?;
//! let task = store.add("Buy milk")?;
//! assert_eq!(task.id(), 1);
//!
//! // A fresh store sees what the previous one saved.
//! let reopened = TaskStoreBuilder::new().with_file_path(Some(&path)).build()?;
//! print!("{}", Tasks::new(reopened.list_all()));
//! assert_eq!(reopened.next_id(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, OperationStatus, Tasks, UpdateResult};
pub use error::{Result, TaskError};
pub use models::{Task, TaskStatus};
pub use params::{AddTask, ListTasks, TaskId, UpdateTask};
pub use store::{TaskStore, TaskStoreBuilder, DEFAULT_TASKS_FILE};
