//! Data models for tracked tasks.
//!
//! This module contains the record type stored by the task tracker and the
//! status enumeration it moves through. Display implementations live in
//! [`crate::display::models`] so that presentation stays out of the data
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use tatra_core::models::{Task, TaskStatus};
//!
//! let created = Timestamp::now();
//! let mut task = Task::new(1, "Buy milk", created);
//! assert_eq!(task.status(), TaskStatus::Todo);
//!
//! task.set_status(TaskStatus::Done, Timestamp::now());
//! assert_eq!(task.status(), TaskStatus::Done);
//! assert_eq!(task.created_at(), created);
//! ```

pub mod status;
pub mod task;


pub use status::TaskStatus;
pub use task::Task;
