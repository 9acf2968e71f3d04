//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper turns the task returned by a store mutation into the one-line
//! confirmation shown to the user.

use std::fmt;

use crate::models::{Task, TaskStatus};

/// Confirmation for a newly added task.
///
/// ```rust
/// use jiff::Timestamp;
/// use tatra_core::{display::CreateResult, models::Task};
///
/// let result = CreateResult::new(Task::new(1, "Buy milk", Timestamp::now()));
/// assert_eq!(result.to_string(), "Task added successfully (ID: 1)\n");
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task added successfully (ID: {})", self.resource.id())
    }
}

/// What an update changed on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChange {
    Description,
    Status(TaskStatus),
}

/// Confirmation for a description or status update.
pub struct UpdateResult<T> {
    pub resource: T,
    pub change: TaskChange,
}

impl<T> UpdateResult<T> {
    /// Wrap a task whose description changed.
    pub fn description(resource: T) -> Self {
        Self {
            resource,
            change: TaskChange::Description,
        }
    }

    /// Wrap a task whose status changed.
    pub fn status(resource: T, status: TaskStatus) -> Self {
        Self {
            resource,
            change: TaskChange::Status(status),
        }
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.change {
            TaskChange::Description => writeln!(f, "Task updated successfully"),
            TaskChange::Status(status) => writeln!(f, "Task marked as {}", status.phrase()),
        }
    }
}

/// Confirmation for a soft delete.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task deleted successfully")
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn sample() -> Task {
        Task::new(4, "Sample", Timestamp::now())
    }

    #[test]
    fn test_update_messages() {
        assert_eq!(
            UpdateResult::description(sample()).to_string(),
            "Task updated successfully\n"
        );
        assert_eq!(
            UpdateResult::status(sample(), TaskStatus::InProgress).to_string(),
            "Task marked as in progress\n"
        );
        assert_eq!(
            UpdateResult::status(sample(), TaskStatus::Done).to_string(),
            "Task marked as done\n"
        );
    }

    #[test]
    fn test_delete_message() {
        assert_eq!(
            DeleteResult::new(sample()).to_string(),
            "Task deleted successfully\n"
        );
    }
}
