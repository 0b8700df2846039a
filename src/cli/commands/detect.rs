//! The `detect` command.
//!
//! Snapshots the process environment, runs provider detection, and prints
//! the merged metadata. Values supplied via `--build`/`--branch`/`--commit`
//! are kept; detection only fills the gaps. The exit code is 0 whether or
//! not a provider matched, since not running under CI is a normal case.

use std::io::Write;

use crate::cli::args::DetectArgs;
use crate::detection::{self, BuildMeta};
use crate::env::EnvSnapshot;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The detect command implementation.
pub struct DetectCommand {
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(args: DetectArgs) -> Self {
        Self { args }
    }

    /// Run detection against a specific snapshot (for testing).
    pub fn run(&self, env: &EnvSnapshot, out: &mut dyn Write) -> Result<CommandResult> {
        match detection::detect_provider(env) {
            Some((provider, _)) => tracing::debug!("detected CI provider: {provider}"),
            None => tracing::debug!("no CI provider detected"),
        }

        let mut meta = BuildMeta {
            build: self.args.build.clone(),
            branch: self.args.branch.clone(),
            commit: self.args.commit.clone(),
        };
        detection::merge(env, &mut meta);

        if self.args.json {
            serde_json::to_writer(&mut *out, &meta)?;
            writeln!(out)?;
        } else {
            for (key, value) in [
                ("build", &meta.build),
                ("branch", &meta.branch),
                ("commit", &meta.commit),
            ] {
                if let Some(value) = value {
                    writeln!(out, "{key}\t{value}")?;
                }
            }
        }

        Ok(CommandResult::success())
    }
}

impl Command for DetectCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        self.run(&EnvSnapshot::from_process(), out)
    }
}
