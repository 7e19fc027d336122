// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git commands that change the repository.
//!
//! ```text
//! fetch            fetch [-f] <remote> <ref>       (combined output)
//! force_branch     branch -f <name>                (required)
//! reset_hard       reset --hard <target>           (required)
//! merge            merge [--no-ff] [--no-commit] [-m msg] <ref>
//! merge_abort      merge --abort
//! merge_continue   merge --continue                (terminal)
//! delete_branches  branch -D <names...>            (captured or terminal)
//! ```

use crate::core::process::runner::CommandRunner;
use crate::error::MergexResult;

use super::{CommandOutcome, Git};

/// Options for [`Git::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Always create a merge commit.
    pub no_ff: bool,
    /// Stop before committing the merge.
    pub no_commit: bool,
    /// Merge commit message.
    pub message: Option<String>,
}

impl<R: CommandRunner> Git<R> {
    /// Fetch `refspec` from `remote`.
    ///
    /// The outcome is returned as-is; a failed fetch is not turned into an error here.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be spawned.
    pub fn fetch(&self, remote: &str, refspec: &str, force: bool) -> MergexResult<CommandOutcome> {
        let mut args = vec!["fetch"];
        if force {
            args.push("-f");
        }
        args.extend([remote, refspec]);
        self.captured(self.invocation(args).merge_stderr())
    }

    /// Create `name` at HEAD, moving it if it already exists.
    ///
    /// # Errors
    ///
    /// Returns a `GitError::CommandFailed` if git rejects the branch.
    pub fn force_branch(&self, name: &str) -> MergexResult<()> {
        self.required(self.invocation(["branch", "-f", name]))?;
        Ok(())
    }

    /// Hard-reset the current branch, index and work tree to `target`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError::CommandFailed` if `target` cannot be resolved.
    pub fn reset_hard(&self, target: &str) -> MergexResult<()> {
        self.required(self.invocation(["reset", "--hard", target]))?;
        Ok(())
    }

    /// Merge `target` into the current branch.
    ///
    /// A conflicting merge exits non-zero; the outcome carries git's report.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be spawned.
    pub fn merge(&self, target: &str, options: &MergeOptions) -> MergexResult<CommandOutcome> {
        let mut args = vec!["merge"];
        if options.no_ff {
            args.push("--no-ff");
        }
        if options.no_commit {
            args.push("--no-commit");
        }
        if let Some(message) = &options.message {
            args.extend(["-m", message.as_str()]);
        }
        args.push(target);
        self.captured(self.invocation(args).merge_stderr())
    }

    /// Abort an in-progress merge.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be spawned.
    pub fn merge_abort(&self) -> MergexResult<CommandOutcome> {
        self.captured(self.invocation(["merge", "--abort"]))
    }

    /// Conclude a merge after conflicts were resolved, with the editor on the terminal.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be spawned.
    pub fn merge_continue(&self) -> MergexResult<CommandOutcome> {
        self.interactive(self.invocation(["merge", "--continue"]))
    }

    /// Force-delete local branches in a single invocation.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be spawned.
    pub fn delete_branches(
        &self,
        names: &[String],
        interactive: bool,
    ) -> MergexResult<CommandOutcome> {
        let invocation = self.invocation(["branch", "-D"]).args(names);
        if interactive {
            self.interactive(invocation)
        } else {
            self.captured(invocation)
        }
    }
}
