//! Command argument wrappers and command dispatch
//!
//! Each clap argument struct mirrors one verb and converts into a core
//! parameter type from [`tatra_core::params`]. Positional arguments are
//! optional at the clap level so that a missing argument is reported with the
//! verb's own hint (for example "Please provide task ID") instead of a generic
//! parser error.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TaskStore → Display wrapper
//! ```

use anyhow::Result;
use clap::Args;
use log::debug;
use tatra_core::{
    display::{CreateResult, DeleteResult, Tasks, UpdateResult},
    params::{AddTask, ListTasks, TaskId, UpdateTask},
    TaskError, TaskStatus, TaskStore,
};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Usage summary printed when no command or an unknown command is given.
pub const USAGE: &str = "\
Usage:
  task-cli add \"description\"        - Add a new task
  task-cli update <id> \"description\" - Update task description
  task-cli delete <id>               - Delete a task
  task-cli mark-in-progress <id>     - Mark task as in progress
  task-cli mark-done <id>            - Mark task as done
  task-cli list                      - List all tasks
  task-cli list done                 - List completed tasks
  task-cli list todo                 - List todo tasks
  task-cli list in-progress          - List in-progress tasks
";

/// Arguments for `add`
#[derive(Args)]
pub struct AddArgs {
    /// Description of the new task
    #[arg(allow_hyphen_values = true)]
    pub description: Option<String>,
}

impl TryFrom<AddArgs> for AddTask {
    type Error = TaskError;

    fn try_from(val: AddArgs) -> Result<Self, Self::Error> {
        AddTask::from_parts(val.description)
    }
}

/// Arguments for `update`
#[derive(Args)]
pub struct UpdateArgs {
    /// ID of the task to update
    pub id: Option<u64>,
    /// Replacement description
    #[arg(allow_hyphen_values = true)]
    pub description: Option<String>,
}

impl TryFrom<UpdateArgs> for UpdateTask {
    type Error = TaskError;

    fn try_from(val: UpdateArgs) -> Result<Self, Self::Error> {
        UpdateTask::from_parts(val.id, val.description)
    }
}

/// Arguments for commands that target a single task
#[derive(Args)]
pub struct IdArgs {
    /// ID of the task
    pub id: Option<u64>,
}

impl TryFrom<IdArgs> for TaskId {
    type Error = TaskError;

    fn try_from(val: IdArgs) -> Result<Self, Self::Error> {
        TaskId::from_parts(val.id)
    }
}

/// Arguments for `list`
#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks with this status (todo, in-progress, done)
    pub status: Option<String>,
}

impl From<ListArgs> for ListTasks {
    fn from(val: ListArgs) -> Self {
        ListTasks { status: val.status }
    }
}

/// Runs one command against the store and renders its outcome.
pub struct Cli {
    store: TaskStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: TaskStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn handle_command(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Add(args) => self.add_task(&AddTask::try_from(args)?),
            Commands::Update(args) => self.update_task(&UpdateTask::try_from(args)?),
            Commands::Delete(args) => self.delete_task(TaskId::try_from(args)?),
            Commands::MarkInProgress(args) => {
                self.mark_task(TaskId::try_from(args)?, TaskStatus::InProgress)
            }
            Commands::MarkDone(args) => self.mark_task(TaskId::try_from(args)?, TaskStatus::Done),
            Commands::List(args) => self.list_tasks(&args.into()),
        }
    }

    fn add_task(&mut self, params: &AddTask) -> Result<()> {
        let task = self.store.add(&params.description)?;
        self.renderer.render(&CreateResult::new(task).to_string())
    }

    fn update_task(&mut self, params: &UpdateTask) -> Result<()> {
        let task = self.store.update(params.id, &params.description)?;
        self.renderer
            .render(&UpdateResult::description(task).to_string())
    }

    fn delete_task(&mut self, params: TaskId) -> Result<()> {
        let task = self.store.delete(params.id)?;
        self.renderer.render(&DeleteResult::new(task).to_string())
    }

    fn mark_task(&mut self, params: TaskId, status: TaskStatus) -> Result<()> {
        let task = if status == TaskStatus::Done {
            self.store.mark_done(params.id)?
        } else {
            self.store.mark_in_progress(params.id)?
        };
        self.renderer
            .render(&UpdateResult::status(task, status).to_string())
    }

    fn list_tasks(&self, params: &ListTasks) -> Result<()> {
        let listed = match &params.status {
            Some(status) => self.store.list_by_status(status),
            None => self.store.list_all(),
        };
        debug!("Listing {} tasks", listed.len());

        let tasks = match &params.status {
            Some(status) => Tasks::with_status(listed, status.as_str()),
            None => Tasks::new(listed),
        };
        self.renderer.render(&tasks.to_string())
    }
}
