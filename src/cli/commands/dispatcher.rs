//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands, DetectArgs};
use crate::error::Result;

use super::{completions::CompletionsCommand, detect::DetectCommand};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
/// Commands write their output to the supplied writer so tests can capture
/// it without touching the process stdout.
pub trait Command {
    /// Execute the command, writing output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation.
    /// With no subcommand, `detect` runs with default arguments.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Detect(args)) => DetectCommand::new(args.clone()).execute(out),
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(out),
            None => DetectCommand::new(DetectArgs::default()).execute(out),
        }
    }
}
