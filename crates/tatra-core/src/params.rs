//! Parameter structures for task tracker operations
//!
//! These structures carry validated input from an interface layer (the CLI
//! today) into [`TaskStore`](crate::TaskStore) calls without pulling any
//! framework derives into the core crate.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   TaskStore     │
//! │  (clap derives) │───▶│ (validated)     │───▶│  operations     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface wrappers convert with `TryFrom`, reporting absent arguments as
//! [`TaskError::MissingArgument`](crate::TaskError::MissingArgument) using the
//! hint constants below.

use crate::error::{Result, TaskError};

/// Hint shown when `add` has no description.
pub const MISSING_DESCRIPTION: &str = "Please provide a task description";

/// Hint shown when `update` lacks an ID or a description.
pub const MISSING_ID_AND_DESCRIPTION: &str = "Please provide task ID and new description";

/// Hint shown when an ID-only command has no ID.
pub const MISSING_ID: &str = "Please provide task ID";

/// Parameters for creating a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTask {
    pub description: String,
}

impl AddTask {
    pub fn from_parts(description: Option<String>) -> Result<Self> {
        let description = description.ok_or_else(|| TaskError::missing_argument(MISSING_DESCRIPTION))?;
        Ok(Self { description })
    }
}

/// Parameters for replacing a task description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTask {
    pub id: u64,
    pub description: String,
}

impl UpdateTask {
    pub fn from_parts(id: Option<u64>, description: Option<String>) -> Result<Self> {
        match (id, description) {
            (Some(id), Some(description)) => Ok(Self {
                id: validate_id(id)?,
                description,
            }),
            _ => Err(TaskError::missing_argument(MISSING_ID_AND_DESCRIPTION)),
        }
    }
}

/// Identifies a single task for delete and status commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId {
    pub id: u64,
}

impl TaskId {
    pub fn from_parts(id: Option<u64>) -> Result<Self> {
        let id = id.ok_or_else(|| TaskError::missing_argument(MISSING_ID))?;
        Ok(Self {
            id: validate_id(id)?,
        })
    }
}

/// Listing parameters; `None` lists every live task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTasks {
    pub status: Option<String>,
}

fn validate_id(id: u64) -> Result<u64> {
    if id == 0 {
        return Err(TaskError::invalid_input("id").with_reason("task IDs start at 1"));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_requires_description() {
        let err = AddTask::from_parts(None).unwrap_err();
        assert_eq!(err.to_string(), MISSING_DESCRIPTION);

        let params = AddTask::from_parts(Some(String::new())).expect("empty text is allowed");
        assert_eq!(params.description, "");
    }

    #[test]
    fn test_update_requires_both_parts() {
        for (id, description) in [(None, None), (Some(1), None), (None, Some("x".to_string()))] {
            let err = UpdateTask::from_parts(id, description).unwrap_err();
            assert_eq!(err.to_string(), MISSING_ID_AND_DESCRIPTION);
        }

        let params = UpdateTask::from_parts(Some(3), Some("x".to_string())).expect("complete");
        assert_eq!(params, UpdateTask { id: 3, description: "x".to_string() });
    }

    #[test]
    fn test_task_id_validation() {
        assert_eq!(
            TaskId::from_parts(None).unwrap_err().to_string(),
            MISSING_ID
        );
        assert!(matches!(
            TaskId::from_parts(Some(0)),
            Err(TaskError::InvalidInput { .. })
        ));
        assert_eq!(TaskId::from_parts(Some(5)).expect("valid").id, 5);
    }
}
