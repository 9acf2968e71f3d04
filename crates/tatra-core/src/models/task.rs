//! Task model definition and its mutation methods.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A single tracked task.
///
/// Field order matches the persisted object layout. The tombstone is never
/// written to disk: deleted tasks are dropped from the file on the next save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: u64,
    description: String,
    status: TaskStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(skip)]
    deleted: bool,
}

impl Task {
    /// Creates a fresh `todo` task with both timestamps set to `at`.
    pub fn new(id: u64, description: impl Into<String>, at: Timestamp) -> Self {
        Self {
            id,
            description: description.into(),
            status: TaskStatus::Todo,
            created_at: at,
            updated_at: at,
            deleted: false,
        }
    }

    /// Unique identifier of the task
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Free-form task description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current status of the task
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Timestamp when the task was created (UTC)
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Timestamp of the last description or status change (UTC)
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Replaces the description and refreshes `updated_at`.
    pub fn set_description(&mut self, description: impl Into<String>, at: Timestamp) {
        self.description = description.into();
        self.updated_at = at;
    }

    /// Replaces the status and refreshes `updated_at`.
    pub fn set_status(&mut self, status: TaskStatus, at: Timestamp) {
        self.status = status;
        self.updated_at = at;
    }

    /// Sets the tombstone. No other field changes.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}
