// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Invocation description and captured output.
//!
//! ```text
//! Invocation
//!  • new
//!  • arg/args/cwd/env/flags/flag
//!  • interactive, merge_stderr
//!
//! RunFlags: INTERACTIVE, MERGE_STDERR
//! ```

use bitflags::bitflags;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

bitflags! {
    /// Flags controlling how a child process is connected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RunFlags: u32 {
        /// Inherit stdin/stdout/stderr from the parent (editors, prompts)
        const INTERACTIVE = 0x01;
        /// Capture stderr into the same buffer as stdout, in write order
        const MERGE_STDERR = 0x02;
    }
}

/// Output from a completed process.
///
/// Interactive invocations leave both buffers empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl ProcessOutput {
    /// Creates a new `ProcessOutput`.
    #[must_use]
    pub const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Returns the process exit code (0 = success).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout (or the combined stream with `MERGE_STDERR`).
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Returns captured stderr.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns everything the process printed, stdout first.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = self.stdout.clone();
        text.push_str(&self.stderr);
        text
    }
}

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Path or name of the executable
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Working directory
    cwd: Option<PathBuf>,
    /// Extra environment variables
    env: Vec<(String, String)>,
    /// Connection flags
    flags: RunFlags,
}

impl Invocation {
    /// Creates a new invocation of the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
            flags: RunFlags::empty(),
        }
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Sets the working directory for the process.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets an environment variable for the process.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Adds a run flag.
    #[must_use]
    pub fn flag(mut self, flag: RunFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Convenience: connect the child to the terminal.
    #[must_use]
    pub fn interactive(self) -> Self {
        self.flag(RunFlags::INTERACTIVE)
    }

    /// Convenience: capture stdout and stderr as one stream.
    #[must_use]
    pub fn merge_stderr(self) -> Self {
        self.flag(RunFlags::MERGE_STDERR)
    }

    /// Returns the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns the arguments.
    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    /// Returns the working directory, if set.
    #[must_use]
    pub const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    /// Returns the extra environment variables.
    #[must_use]
    pub fn environment(&self) -> &[(String, String)] {
        &self.env
    }

    /// Returns the run flags.
    #[must_use]
    pub const fn run_flags(&self) -> RunFlags {
        self.flags
    }

    /// Returns true if the child inherits the terminal.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.flags.contains(RunFlags::INTERACTIVE)
    }

    /// Returns the display name for this process (file stem of the program).
    #[must_use]
    pub fn display_name(&self) -> String {
        self.program.file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the command line as a string, using the display name for the program.
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = self.display_name();
        for arg in &self.args {
            if arg.is_empty() || arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }
}
