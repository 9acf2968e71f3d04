//! Error types for the task tracker library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all task store operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A required command argument was not supplied
    #[error("{message}")]
    MissingArgument { message: String },
    /// No live task exists for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// The requested command verb is not recognized
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },
    /// The task file exists but could not be decoded
    #[error("Malformed task file '{path}': {source}")]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The task file lists the same ID more than once
    #[error("Malformed task file '{path}': duplicate task ID {id}")]
    DuplicateTaskId { path: PathBuf, id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization errors while encoding the task list
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TaskError {
        TaskError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TaskError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a missing argument error carrying the user-facing hint.
    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::MissingArgument {
            message: message.into(),
        }
    }

    /// Whether the error is a lookup miss rather than a hard failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound { .. })
    }
}

/// Extension trait for attaching a file path to I/O results.
pub trait FileResultExt<T> {
    /// Map an I/O error to [`TaskError::FileSystem`] at the given path.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FileResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| TaskError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for task store operations
pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TaskError::TaskNotFound { id: 99 };
        assert_eq!(err.to_string(), "Task with ID 99 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = TaskError::invalid_input("id").with_reason("must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'id': must be positive"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_fs_context_keeps_path() {
        let io: std::result::Result<(), _> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.fs_context(Path::new("tasks.json")).unwrap_err();
        assert!(err.to_string().contains("'tasks.json'"));
    }
}
