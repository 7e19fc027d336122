// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only git queries.
//!
//! ```text
//! current_branch    rev-parse --abbrev-ref HEAD
//! status_porcelain  status --porcelain -uno
//! local_branches    branch --format=%(refname:short)
//! remote_branches   branch -r --format=%(refname:short)
//! ```

use crate::core::process::runner::CommandRunner;
use crate::error::MergexResult;

use super::Git;

const SHORT_REFNAME: &str = "--format=%(refname:short)";

impl<R: CommandRunner> Git<R> {
    /// Name of the checked out branch; `HEAD` when detached.
    ///
    /// # Errors
    ///
    /// Returns a `GitError::CommandFailed` outside a repository.
    pub fn current_branch(&self) -> MergexResult<String> {
        let outcome = self.required(self.invocation(["rev-parse", "--abbrev-ref", "HEAD"]))?;
        Ok(outcome.output().stdout().trim().to_string())
    }

    /// Porcelain status of tracked files, trimmed. Empty means clean.
    ///
    /// # Errors
    ///
    /// Returns a `GitError::CommandFailed` if the status cannot be read.
    pub fn status_porcelain(&self) -> MergexResult<String> {
        let outcome = self.required(self.invocation(["status", "--porcelain", "-uno"]))?;
        Ok(outcome.output().stdout().trim().to_string())
    }

    /// Short names of all local branches.
    ///
    /// # Errors
    ///
    /// Returns a `GitError::CommandFailed` if git cannot list branches.
    pub fn local_branches(&self) -> MergexResult<Vec<String>> {
        let outcome = self.required(self.invocation(["branch", SHORT_REFNAME]))?;
        Ok(branch_lines(outcome.output().stdout()))
    }

    /// Short names of all remote-tracking branches (`origin/main`, ...).
    ///
    /// # Errors
    ///
    /// Returns a `GitError::CommandFailed` if git cannot list branches.
    pub fn remote_branches(&self) -> MergexResult<Vec<String>> {
        let outcome = self.required(self.invocation(["branch", "-r", SHORT_REFNAME]))?;
        Ok(branch_lines(outcome.output().stdout()))
    }
}

fn branch_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
