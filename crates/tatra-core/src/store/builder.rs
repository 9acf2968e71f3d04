//! Builder for creating and configuring TaskStore instances.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::TaskStore;
use crate::error::{FileResultExt, Result};

/// File name used when no explicit task file is configured.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Builder for creating and configuring TaskStore instances.
#[derive(Debug, Clone, Default)]
pub struct TaskStoreBuilder {
    file_path: Option<PathBuf>,
}

impl TaskStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { file_path: None }
    }

    /// Sets a custom task file path.
    ///
    /// If not specified, uses [`DEFAULT_TASKS_FILE`] relative to the current
    /// working directory.
    pub fn with_file_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.file_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store, loading any existing tasks.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::FileSystem` if the parent directory cannot be
    /// created or the file cannot be read.
    /// Returns `TaskError::MalformedData` or `TaskError::DuplicateTaskId` if
    /// the file exists but does not hold a valid task list.
    pub fn build(self) -> Result<TaskStore> {
        let path = self
            .file_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).fs_context(parent)?;
        }

        TaskStore::open(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_build_creates_missing_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("dir").join("tasks.json");

        let store = TaskStoreBuilder::new()
            .with_file_path(Some(&path))
            .build()
            .expect("Failed to build store");

        assert!(path.parent().is_some_and(Path::is_dir));
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_none_path_keeps_default() {
        let builder = TaskStoreBuilder::new().with_file_path(None::<&Path>);
        assert!(builder.file_path.is_none());
    }
}
