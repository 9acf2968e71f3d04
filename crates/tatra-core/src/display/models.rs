//! Display implementations for domain models.
//!
//! A task renders as a single pipe-separated line so lists stay compact:
//!
//! ```text
//! ID: 1 | Buy milk | Status: todo | Created: 2024-03-01 09:30:00 UTC | Updated: ...
//! ```

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ID: {} | {} | Status: {} | Created: {} | Updated: {}",
            self.id(),
            self.description(),
            self.status(),
            LocalDateTime(&self.created_at()),
            LocalDateTime(&self.updated_at()),
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn test_task_line() {
        let mut task = Task::new(12, "Water | plants", Timestamp::now());
        task.set_status(TaskStatus::InProgress, Timestamp::now());

        let line = task.to_string();

        assert!(line.starts_with("ID: 12 | Water | plants | Status: in-progress | Created: "));
        assert!(line.contains(" | Updated: "));
        assert!(line.ends_with('\n'));
    }
}
