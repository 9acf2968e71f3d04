use std::path::{Path, PathBuf};

use tatra_core::{TaskStore, TaskStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a store backed by a file in a fresh temp dir
pub fn create_test_store() -> (TempDir, PathBuf, TaskStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tasks.json");
    let store = open_store(&path);
    (temp_dir, path, store)
}

/// Reopen a store at `path`, as a new process invocation would
pub fn open_store(path: &Path) -> TaskStore {
    TaskStoreBuilder::new()
        .with_file_path(Some(path))
        .build()
        .expect("Failed to open store")
}
