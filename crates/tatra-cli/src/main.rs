//! task-cli
//!
//! Command-line front end for the tatra task tracker. One invocation runs one
//! command against the task file and exits with status 0 on success or 1 on
//! any reported error.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use args::Args;
use clap::{
    error::{ContextKind, ErrorKind},
    Parser,
};
use cli::{Cli, USAGE};
use log::{debug, info, warn};
use renderer::TerminalRenderer;
use tatra_core::{OperationStatus, TaskError, TaskStoreBuilder};

fn main() -> ExitCode {
    env_logger::init();

    let Args { file, no_color, command } = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return report_parse_error(&err, &TerminalRenderer::for_stdout(false)),
    };

    let renderer = TerminalRenderer::for_stdout(no_color);

    let Some(command) = command else {
        report_usage(&renderer);
        return ExitCode::FAILURE;
    };

    let outcome = TaskStoreBuilder::new()
        .with_file_path(file)
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|store| {
            info!("Opened task file {}", store.path().display());
            Cli::new(store, renderer.clone()).handle_command(command)
        });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, &renderer);
            ExitCode::FAILURE
        }
    }
}

/// Prints a failed command as a single `Error:` line.
fn report_error(err: &anyhow::Error, renderer: &TerminalRenderer) {
    debug!("Command failed: {err:?}");

    let message = match err.downcast_ref::<TaskError>() {
        Some(task_err) => task_err.to_string(),
        None => format!("{err:#}"),
    };
    if renderer.render(&OperationStatus::failure(message).to_string()).is_err() {
        warn!("Could not write error message to stdout");
    }
}

fn report_usage(renderer: &TerminalRenderer) {
    if renderer.render(USAGE).is_err() {
        warn!("Could not write usage to stdout");
    }
}

/// Handles clap errors: help and version exit 0, an unknown verb prints the
/// usage summary, everything else prints clap's message. All failures exit 1.
fn report_parse_error(err: &clap::Error, renderer: &TerminalRenderer) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidSubcommand => {
            let command = err
                .get(ContextKind::InvalidSubcommand)
                .map(ToString::to_string)
                .unwrap_or_default();
            report_error(&TaskError::UnknownCommand { command }.into(), renderer);
            report_usage(renderer);
            ExitCode::FAILURE
        }
        _ => {
            let _ = err.print();
            ExitCode::FAILURE
        }
    }
}
