// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! SystemRunner::run(&Invocation)
//!              |
//!              v
//!     build_command()
//!     args, cwd, env
//!              |
//!     +--------+---------+
//!     v        v         v
//! INTERACTIVE MERGE    (default)
//!  inherit    pipe()   output()
//!  stdio    out+err     out | err
//!     \        |        /
//!      v       v       v
//!        ProcessOutput
//!  { exit_code, stdout, stderr }
//! ```
//!
//! A non-zero exit is not an error here; callers decide what it means.

use std::collections::BTreeMap;
use std::io::Read as _;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::{OnceLock, RwLock};
use tracing::{debug, trace};

use super::builder::{Invocation, ProcessOutput, RunFlags};
use crate::error::{MergexResult, ProcessError};

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

/// Get the executable cache, initializing if needed.
fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

/// Capability to locate and run external programs.
///
/// The workflow only talks to this trait, so tests can swap in a scripted fake.
pub trait CommandRunner {
    /// Resolves an executable name on the search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Runs the invocation to completion.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the process cannot be spawned or its output
    /// cannot be read. A non-zero exit status is reported through the output.
    fn run(&self, invocation: &Invocation) -> MergexResult<ProcessOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        (**self).locate(program)
    }

    fn run(&self, invocation: &Invocation) -> MergexResult<ProcessOutput> {
        (**self).run(invocation)
    }
}

/// Runs real child processes through `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Creates a new system runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_command(invocation: &Invocation) -> Command {
        let mut command = Command::new(invocation.program());
        command.args(invocation.args_slice());
        if let Some(cwd) = invocation.working_dir() {
            command.current_dir(cwd);
        }
        for (key, value) in invocation.environment() {
            command.env(key, value);
        }
        command
    }

    fn run_interactive(mut command: Command, cmd_line: &str) -> MergexResult<ProcessOutput> {
        let status = command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.to_string(),
                source,
            })?;
        Ok(ProcessOutput::new(
            exit_code(status),
            String::new(),
            String::new(),
        ))
    }

    fn run_combined(mut command: Command, cmd_line: &str) -> MergexResult<ProcessOutput> {
        let spawn_failed = |source| ProcessError::SpawnFailed {
            command: cmd_line.to_string(),
            source,
        };

        let (mut reader, writer) = std::io::pipe().map_err(spawn_failed)?;
        let writer_clone = writer.try_clone().map_err(spawn_failed)?;
        let mut child = command
            .stdin(Stdio::null())
            .stdout(writer_clone)
            .stderr(writer)
            .spawn()
            .map_err(spawn_failed)?;

        // The command still holds the write ends; drop it so the read sees EOF.
        drop(command);

        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(|e| ProcessError::OutputError {
                command: cmd_line.to_string(),
                message: e.to_string(),
            })?;
        let status = child.wait().map_err(|e| ProcessError::OutputError {
            command: cmd_line.to_string(),
            message: e.to_string(),
        })?;

        Ok(ProcessOutput::new(
            exit_code(status),
            String::from_utf8_lossy(&buffer).into_owned(),
            String::new(),
        ))
    }

    fn run_captured(mut command: Command, cmd_line: &str) -> MergexResult<ProcessOutput> {
        let output = command
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.to_string(),
                source,
            })?;
        Ok(ProcessOutput::new(
            exit_code(output.status),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        // Check cache first (read lock)
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Some(path.clone());
            }
        }

        // Not in cache, resolve via which
        which::which(program).map_or(None, |path| {
            {
                let mut cache = exe_cache()
                    .write()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                cache.insert(program.to_string(), path.clone());
            }
            Some(path)
        })
    }

    fn run(&self, invocation: &Invocation) -> MergexResult<ProcessOutput> {
        let name = invocation.display_name();
        let cmd_line = invocation.command_line();

        if let Some(cwd) = invocation.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let command = Self::build_command(invocation);
        let flags = invocation.run_flags();
        let output = if flags.contains(RunFlags::INTERACTIVE) {
            Self::run_interactive(command, &cmd_line)?
        } else if flags.contains(RunFlags::MERGE_STDERR) {
            Self::run_combined(command, &cmd_line)?
        } else {
            Self::run_captured(command, &cmd_line)?
        };

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }
}

/// Exit code of a finished child, `-1` when it was killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
