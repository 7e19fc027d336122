// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command layer.
//!
//! ```text
//!         Public API
//!      query.rs   cmd.rs
//!   current_branch  fetch / merge / reset_hard
//!   status          force_branch / delete_branches
//!   branches        merge_abort / merge_continue
//!           \        /
//!            v      v
//!     Git<R: CommandRunner>
//!       captured: LC_ALL=C
//!       interactive: terminal passthrough
//! ```
//!
//! Every operation is one `git` invocation. Operations whose output the
//! workflow inspects return the raw [`ProcessOutput`]; mandatory steps turn
//! a non-zero exit into [`GitError::CommandFailed`].

pub mod cmd;
pub mod query;


use std::path::{Path, PathBuf};

use crate::core::process::builder::{Invocation, ProcessOutput};
use crate::core::process::runner::CommandRunner;
use crate::error::{GitError, MergexResult, ProcessError};

/// Handle for running git in one working directory.
#[derive(Debug)]
pub struct Git<R> {
    runner: R,
    program: String,
    cwd: Option<PathBuf>,
}

impl<R: CommandRunner> Git<R> {
    /// Creates a handle invoking `program` (usually `git`) in the current directory.
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            cwd: None,
        }
    }

    /// Runs every command inside `dir` instead of the current directory.
    #[must_use]
    pub fn with_cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Resolves the git executable on the search path.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if it cannot be found.
    pub fn ensure_available(&self) -> MergexResult<PathBuf> {
        self.runner.locate(&self.program).ok_or_else(|| {
            ProcessError::ExecutableNotFound {
                name: self.program.clone(),
            }
            .into()
        })
    }

    fn invocation<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let invocation = Invocation::new(&self.program).args(args);
        match &self.cwd {
            Some(dir) => invocation.cwd(dir),
            None => invocation,
        }
    }

    /// Captured run. The C locale keeps messages stable for classification.
    fn captured(&self, invocation: Invocation) -> MergexResult<CommandOutcome> {
        let invocation = invocation.env("LC_ALL", "C");
        let output = self.runner.run(&invocation)?;
        Ok(CommandOutcome::new(invocation.command_line(), output))
    }

    fn interactive(&self, invocation: Invocation) -> MergexResult<CommandOutcome> {
        let invocation = invocation.interactive();
        let output = self.runner.run(&invocation)?;
        Ok(CommandOutcome::new(invocation.command_line(), output))
    }

    /// Runs a mandatory step, failing on a non-zero exit.
    fn required(&self, invocation: Invocation) -> MergexResult<CommandOutcome> {
        let outcome = self.captured(invocation)?;
        if outcome.success() {
            Ok(outcome)
        } else {
            Err(outcome.into_error().into())
        }
    }
}

/// What one git invocation did: its command line and output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    command: String,
    output: ProcessOutput,
}

impl CommandOutcome {
    /// Pairs a command line with its output.
    #[must_use]
    pub const fn new(command: String, output: ProcessOutput) -> Self {
        Self { command, output }
    }

    /// The command line, e.g. `git fetch -f origin main`.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The raw process output.
    #[must_use]
    pub const fn output(&self) -> &ProcessOutput {
        &self.output
    }

    /// Returns true if git exited with status 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.output.success()
    }

    /// Everything git printed.
    #[must_use]
    pub fn text(&self) -> String {
        self.output.text()
    }

    /// Converts a failed outcome into a [`GitError::CommandFailed`].
    #[must_use]
    pub fn into_error(self) -> GitError {
        GitError::command_failed(self.command, &self.output.text(), self.output.exit_code())
    }
}
