//! Reading and writing the JSON task file.

use std::{collections::HashSet, fs, io::ErrorKind, path::Path};

use log::debug;

use crate::{
    error::{FileResultExt, Result, TaskError},
    models::Task,
};

/// Reads every record from `path`.
///
/// A missing file, or one holding only whitespace, yields an empty list.
/// Anything else must decode as a JSON array of tasks with distinct IDs.
pub(crate) fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Task file {} does not exist yet", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e).fs_context(path),
    };

    if content.trim().is_empty() {
        debug!("Task file {} is empty", path.display());
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> =
        serde_json::from_str(&content).map_err(|source| TaskError::MalformedData {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(tasks.len());
    if let Some(task) = tasks.iter().find(|task| !seen.insert(task.id())) {
        return Err(TaskError::DuplicateTaskId {
            path: path.to_path_buf(),
            id: task.id(),
        });
    }

    debug!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Overwrites `path` with the live subset of `tasks`.
pub(crate) fn save_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let live: Vec<&Task> = tasks.iter().filter(|task| !task.is_deleted()).collect();

    let mut content = serde_json::to_string_pretty(&live)?;
    content.push('\n');

    fs::write(path, content).fs_context(path)?;
    debug!("Saved {} tasks to {}", live.len(), path.display());
    Ok(())
}
