//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// cimeta - Normalized build metadata from CI environments.
#[derive(Debug, Parser)]
#[command(name = "cimeta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the active CI provider and print build metadata (default if no
    /// command specified)
    Detect(DetectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Build identifier to keep; detection fills it only when unset
    #[arg(long, value_name = "ID")]
    pub build: Option<String>,

    /// Branch name to keep; detection fills it only when unset
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Commit hash to keep; detection fills it only when unset
    #[arg(long, value_name = "SHA")]
    pub commit: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
