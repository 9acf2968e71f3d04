use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddArgs, IdArgs, ListArgs, UpdateArgs};

/// Command-line task tracker
///
/// Tasks are kept in a JSON file (`tasks.json` in the current directory by
/// default) and move through the statuses todo, in-progress and done.
#[derive(Parser)]
#[command(version, about, name = "task-cli")]
pub struct Args {
    /// Path to the task file. Defaults to ./tasks.json
    #[arg(long, global = true, env = "TASK_CLI_FILE")]
    pub file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available task commands
///
/// Every command except `list` rewrites the task file.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// Update task description
    Update(UpdateArgs),
    /// Delete a task
    Delete(IdArgs),
    /// Mark task as in progress
    MarkInProgress(IdArgs),
    /// Mark task as done
    MarkDone(IdArgs),
    /// List all tasks, or those with the given status
    List(ListArgs),
}
