//! The task store: in-memory records bridged to the JSON task file.
//!
//! [`TaskStore`] owns every record for the lifetime of one command. It reads
//! the task file once when opened and rewrites it in full after each mutating
//! operation. Listing never touches the file.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    task-cli     │    │    TaskStore    │    │   tasks.json    │
//! │ (one verb per   │───▶│ (Vec<Task>,     │───▶│ (live records,  │
//! │  invocation)    │    │  next_id)       │    │  full rewrite)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Deleted tasks stay in memory as tombstones until the process exits, so
//! their IDs are never handed out again during the run.
//!
//! # Examples
//!
//! ```rust
//! use tatra_core::{TaskStatus, TaskStoreBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut store = TaskStoreBuilder::new()
//!     .with_file_path(Some(dir.path().join("tasks.json")))
//!     .build()?;
//!
//! let task = store.add("Buy milk")?;
//! store.mark_done(task.id())?;
//!
//! assert_eq!(store.list_by_status("done").len(), 1);
//! assert!(store.list_by_status(TaskStatus::Todo.as_str()).is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::path::{Path, PathBuf};

use jiff::{SignedDuration, Timestamp};
use log::info;

use crate::{
    error::{Result, TaskError},
    models::{Task, TaskStatus},
};

pub mod builder;
mod file;

pub use builder::{TaskStoreBuilder, DEFAULT_TASKS_FILE};

/// Owner of all task records and their backing file.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Opens the store backed by `path`, loading existing tasks if the file
    /// is present.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let tasks = file::load_tasks(&path)?;
        let next_id = tasks.iter().map(Task::id).max().map_or(1, |max| max + 1);

        Ok(Self {
            path,
            tasks,
            next_id,
        })
    }

    /// Path of the backing task file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ID that the next [`add`](Self::add) will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Creates a new `todo` task, persists, and returns it.
    pub fn add(&mut self, description: &str) -> Result<Task> {
        let task = Task::new(self.next_id, description, Timestamp::now());
        self.next_id += 1;
        self.tasks.push(task.clone());
        self.save()?;

        info!("Added task {}", task.id());
        Ok(task)
    }

    /// Replaces the description of a live task.
    pub fn update(&mut self, id: u64, description: &str) -> Result<Task> {
        let task = self.live_task_mut(id)?;
        let at = advance(task.updated_at());
        task.set_description(description, at);
        let updated = task.clone();
        self.save()?;

        info!("Updated description of task {id}");
        Ok(updated)
    }

    /// Soft-deletes a live task. Deleting twice reports not found.
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let task = self.live_task_mut(id)?;
        task.mark_deleted();
        let deleted = task.clone();
        self.save()?;

        info!("Deleted task {id}");
        Ok(deleted)
    }

    pub fn mark_in_progress(&mut self, id: u64) -> Result<Task> {
        self.set_status(id, TaskStatus::InProgress)
    }

    pub fn mark_done(&mut self, id: u64) -> Result<Task> {
        self.set_status(id, TaskStatus::Done)
    }

    /// Moves a live task to `status`, refreshing its update time even when the
    /// status is unchanged.
    pub fn set_status(&mut self, id: u64, status: TaskStatus) -> Result<Task> {
        let task = self.live_task_mut(id)?;
        let at = advance(task.updated_at());
        task.set_status(status, at);
        let updated = task.clone();
        self.save()?;

        info!("Marked task {id} as {status}");
        Ok(updated)
    }

    /// Live task with the given ID, if any.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id() == id && !task.is_deleted())
    }

    /// All live tasks in insertion order.
    pub fn list_all(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.is_deleted()).collect()
    }

    /// Live tasks whose status string equals `status` exactly.
    ///
    /// Unknown status strings simply match nothing.
    pub fn list_by_status(&self, status: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| !task.is_deleted() && task.status().as_str() == status)
            .collect()
    }

    fn live_task_mut(&mut self, id: u64) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id && !task.is_deleted())
            .ok_or(TaskError::TaskNotFound { id })
    }

    fn save(&self) -> Result<()> {
        file::save_tasks(&self.path, &self.tasks)
    }
}

/// Current time, nudged past `previous` so successive updates are strictly
/// ordered even on a coarse or stalled clock.
fn advance(previous: Timestamp) -> Timestamp {
    let now = Timestamp::now();
    if now > previous {
        return now;
    }
    previous
        .checked_add(SignedDuration::from_nanos(1))
        .unwrap_or(previous)
}
