// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           MergexError (~24 bytes)
//!                  |
//!   +-------+------+------+--------+
//!   |       |      |      |        |
//!   v       v      v      v        v
//! Usage    Git  Process Config    Io
//! Box<str> Box    Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Git     CommandFailed, UncommittedChanges,
//!           ForbiddenBranch, DetachedHead
//!   Process ExecutableNotFound, SpawnFailed, OutputError
//!   Config  ParseError, InvalidValue
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MergexError`].
pub type MergexResult<T> = std::result::Result<T, MergexError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MergexError {
    /// Invalid combination of command-line selections.
    #[error("{0}")]
    Usage(Box<str>),

    /// Git operation failed.
    #[error("{0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a [`MergexError::Usage`] error.
pub fn usage(message: impl Into<String>) -> MergexError {
    MergexError::Usage(message.into().into_boxed_str())
}

impl MergexError {
    /// Returns the git error, if this is one.
    #[must_use]
    pub fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true for [`MergexError::Usage`].
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MergexError {
                fn from(err: $error) -> Self {
                    MergexError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// A required git command exited unsuccessfully.
    #[error("{command}: {message}")]
    CommandFailed { command: String, message: String },

    /// Tracked files are modified while a clean working tree is required.
    #[error("Changes not committed before merge:\n{paths}")]
    UncommittedChanges { paths: String },

    /// The checked out branch must never be rewritten by the workflow.
    #[error("branch {branch} is forbidden")]
    ForbiddenBranch { branch: String },

    /// HEAD does not point at a branch.
    #[error("HEAD is detached, check out a branch first")]
    DetachedHead,
}

impl GitError {
    /// Builds a [`GitError::CommandFailed`] from a command line and the tool's output.
    ///
    /// The message is reduced to the last non-empty output line so it stays on one line.
    pub fn command_failed(command: impl Into<String>, output: &str, exit_code: i32) -> Self {
        let message = output
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())
            .map_or_else(|| format!("exit status {exit_code}"), str::to_string);
        Self::CommandFailed {
            command: command.into(),
            message,
        }
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
