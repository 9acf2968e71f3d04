//! Collection wrapper types for displaying groups of tasks.
//!
//! Lists render one task line each and fall back to a "No tasks found"
//! message when empty, naming the status filter if one was applied.

use std::fmt;

use crate::models::Task;

/// Wrapper for displaying a list of borrowed tasks.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use tatra_core::{display::Tasks, models::Task};
///
/// let task = Task::new(1, "Buy milk", Timestamp::now());
/// let output = Tasks::new(vec![&task]).to_string();
/// assert!(output.starts_with("ID: 1 | Buy milk | Status: todo"));
///
/// let empty = Tasks::with_status(Vec::new(), "done").to_string();
/// assert_eq!(empty, "No tasks found with status: done\n");
/// ```
pub struct Tasks<'a> {
    tasks: Vec<&'a Task>,
    status: Option<String>,
}

impl<'a> Tasks<'a> {
    /// Unfiltered listing.
    pub fn new(tasks: Vec<&'a Task>) -> Self {
        Self {
            tasks,
            status: None,
        }
    }

    /// Listing produced by a status filter.
    pub fn with_status(tasks: Vec<&'a Task>, status: impl Into<String>) -> Self {
        Self {
            tasks,
            status: Some(status.into()),
        }
    }
}

impl fmt::Display for Tasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return match &self.status {
                Some(status) => writeln!(f, "No tasks found with status: {status}"),
                None => writeln!(f, "No tasks found"),
            };
        }

        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}
