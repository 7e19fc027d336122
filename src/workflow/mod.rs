// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The aoneflow merge workflow.
//!
//! ```text
//! WorkflowRequest::from_selection()   exactly one mode, else Usage
//!            |
//!            v
//!   ensure_available (git on PATH)
//!            |
//!   +--------+---------+-----------+--------------+
//!   v        v         v           v              v
//! Merge   Merge(dry)  Abort      Continue     RemoveTempBranches
//!   |        |         |           |              |
//! current_branch + guard (master, release*)    branch --format
//!   |        |         |           |           branch -D _mergex*
//! fetch -f  fetch -f  merge --abort*  merge --continue* (terminal)
//! status    merge --no-commit  reset --hard _mergex/B  branch -D _mergex/B*
//! branch -f _mergex/B   merge --abort*   branch -D _mergex/B*
//! reset --hard origin/T
//! merge --no-ff _mergex/B
//! branch -D _mergex/B* (on success)
//!
//! * best-effort: failures are logged and ignored
//! ```

pub mod branches;
pub mod classify;


use std::io::Write;

use tracing::{debug, info, info_span, trace};

use crate::config::types::WorkflowConfig;
use crate::core::process::runner::CommandRunner;
use crate::error::{GitError, MergexResult, usage};
use crate::git::cmd::MergeOptions;
use crate::git::{CommandOutcome, Git};

use branches::{check_current_branch, is_temp_branch, merge_targets, remote_ref, staging_branch};
use classify::{GitTextClassifier, OutputClassifier};

const ONE_MODE: &str =
    "only one of <branch|commit>, --abort, --continue and --remove can be specified";

/// One workflow run, selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowRequest {
    /// Merge the current branch into `target`, or only try it with `dry_run`.
    Merge { target: String, dry_run: bool },
    /// Throw away a conflicted merge and restore the branch.
    Abort,
    /// Commit a merge whose conflicts were resolved.
    Continue,
    /// Delete every temporary branch.
    RemoveTempBranches,
}

impl WorkflowRequest {
    /// Validates the raw selection.
    ///
    /// # Errors
    ///
    /// Returns `MergexError::Usage` unless exactly one of a target, `abort`,
    /// `cont` and `remove` is given, or if `dry_run` comes without a target.
    pub fn from_selection(
        target: Option<&str>,
        dry_run: bool,
        abort: bool,
        cont: bool,
        remove: bool,
    ) -> MergexResult<Self> {
        let target = target.filter(|t| !t.is_empty());
        let selected = [target.is_some(), abort, cont, remove]
            .into_iter()
            .filter(|&on| on)
            .count();
        if selected != 1 {
            return Err(usage(ONE_MODE));
        }

        match target {
            Some(target) => Ok(Self::Merge {
                target: target.to_string(),
                dry_run,
            }),
            None if dry_run => Err(usage("--dry-run requires a <branch|commit> to merge")),
            None if abort => Ok(Self::Abort),
            None if cont => Ok(Self::Continue),
            None => Ok(Self::RemoveTempBranches),
        }
    }

    /// Short name used in log spans.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Merge { dry_run: false, .. } => "merge",
            Self::Merge { dry_run: true, .. } => "dry-run",
            Self::Abort => "abort",
            Self::Continue => "continue",
            Self::RemoveTempBranches => "remove",
        }
    }
}

/// Drives git through one [`WorkflowRequest`].
pub struct MergeWorkflow<'a, R, C = GitTextClassifier> {
    git: Git<R>,
    settings: &'a WorkflowConfig,
    classifier: C,
}

impl<'a, R: CommandRunner> MergeWorkflow<'a, R> {
    /// Creates a workflow using the default text classifier.
    pub fn new(git: Git<R>, settings: &'a WorkflowConfig) -> Self {
        Self {
            git,
            settings,
            classifier: GitTextClassifier,
        }
    }
}

impl<'a, R: CommandRunner, C: OutputClassifier> MergeWorkflow<'a, R, C> {
    /// Replaces the output classifier.
    pub fn with_classifier<D: OutputClassifier>(self, classifier: D) -> MergeWorkflow<'a, R, D> {
        MergeWorkflow {
            git: self.git,
            settings: self.settings,
            classifier,
        }
    }

    /// Runs `request`, printing user-facing results to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if git is missing, the current branch is protected,
    /// or a required step (fetch, status, branch, reset) fails.
    pub fn run<W: Write>(&self, request: &WorkflowRequest, out: &mut W) -> MergexResult<()> {
        let _span = info_span!("workflow", mode = request.mode()).entered();
        let git_path = self.git.ensure_available()?;
        debug!(git = %git_path.display(), ?request, "starting workflow");

        match request {
            WorkflowRequest::RemoveTempBranches => self.remove_temp_branches(),
            WorkflowRequest::Merge { target, dry_run } => {
                let branch = self.checked_branch()?;
                self.merge(&branch, target, *dry_run, out)
            }
            WorkflowRequest::Abort => {
                let branch = self.checked_branch()?;
                self.abort(&branch)
            }
            WorkflowRequest::Continue => {
                let branch = self.checked_branch()?;
                self.resume(&branch)
            }
        }
    }

    /// Branch names a merge could target, from the remote's tracking branches.
    ///
    /// # Errors
    ///
    /// Returns an error if git is missing or cannot list remote branches.
    pub fn targets(&self) -> MergexResult<Vec<String>> {
        self.git.ensure_available()?;
        let remote_branches = self.git.remote_branches()?;
        Ok(merge_targets(self.settings, &remote_branches))
    }

    fn checked_branch(&self) -> MergexResult<String> {
        let branch = self.git.current_branch()?;
        check_current_branch(self.settings, &branch)?;
        Ok(branch)
    }

    fn merge<W: Write>(
        &self,
        branch: &str,
        target: &str,
        dry_run: bool,
        out: &mut W,
    ) -> MergexResult<()> {
        let remote = self.settings.remote.as_str();

        info!(remote, target, "fetching");
        let fetch = self.git.fetch(remote, target, true)?;
        if !fetch.success() {
            let text = fetch.text();
            write!(out, "{text}")?;
            if self.classifier.is_missing_remote_ref(&text) && target.starts_with(remote) {
                writeln!(
                    out,
                    "it seems that the branch '{target}' should not start with '{remote}'"
                )?;
            }
            return Err(fetch.into_error().into());
        }

        let upstream = remote_ref(self.settings, target);
        if dry_run {
            return self.trial_merge(&upstream, out);
        }

        let changes = self.git.status_porcelain()?;
        if !changes.is_empty() {
            return Err(GitError::UncommittedChanges { paths: changes }.into());
        }

        let staging = staging_branch(self.settings, branch);
        info!(branch, staging = %staging, "saving branch tip");
        self.git.force_branch(&staging)?;
        info!(upstream = %upstream, "resetting");
        self.git.reset_hard(&upstream)?;

        let options = MergeOptions {
            no_ff: true,
            no_commit: false,
            message: Some(format!("Merge branch '{branch}' into {target}")),
        };
        let merge = self.git.merge(&staging, &options)?;
        if merge.success() {
            best_effort("delete staging branch", self.delete_staging(&staging));
        } else {
            info!(staging = %staging, "merge stopped, staging branch kept");
        }

        let text = merge.text();
        if self.classifier.is_up_to_date(&text) {
            writeln!(out, "Fast-forward to {target}")?;
        } else {
            write!(out, "{text}")?;
        }
        Ok(())
    }

    fn trial_merge<W: Write>(&self, upstream: &str, out: &mut W) -> MergexResult<()> {
        let options = MergeOptions {
            no_ff: true,
            no_commit: true,
            message: None,
        };
        let trial = self.git.merge(upstream, &options)?;
        write!(out, "{}", self.classifier.strip_no_commit_notice(&trial.text()))?;
        best_effort("abort trial merge", self.git.merge_abort());
        Ok(())
    }

    fn abort(&self, branch: &str) -> MergexResult<()> {
        best_effort("abort merge", self.git.merge_abort());
        let staging = staging_branch(self.settings, branch);
        info!(staging = %staging, "restoring branch");
        self.git.reset_hard(&staging)?;
        best_effort("delete staging branch", self.delete_staging(&staging));
        Ok(())
    }

    fn resume(&self, branch: &str) -> MergexResult<()> {
        best_effort("continue merge", self.git.merge_continue());
        let staging = staging_branch(self.settings, branch);
        best_effort("delete staging branch", self.delete_staging(&staging));
        Ok(())
    }

    fn remove_temp_branches(&self) -> MergexResult<()> {
        let temp: Vec<String> = self
            .git
            .local_branches()?
            .into_iter()
            .filter(|name| is_temp_branch(self.settings, name))
            .collect();
        if temp.is_empty() {
            debug!("no temporary branches");
            return Ok(());
        }
        info!(count = temp.len(), "removing temporary branches");
        best_effort("delete temporary branches", self.git.delete_branches(&temp, true));
        Ok(())
    }

    fn delete_staging(&self, staging: &str) -> MergexResult<CommandOutcome> {
        self.git.delete_branches(&[staging.to_string()], false)
    }
}

/// Logs and drops the result of a cleanup or recovery step.
fn best_effort(step: &str, result: MergexResult<CommandOutcome>) {
    match result {
        Ok(outcome) if outcome.success() => trace!(step, "done"),
        Ok(outcome) => debug!(
            step,
            command = outcome.command(),
            output = %outcome.text().trim(),
            "ignoring failed step"
        ),
        Err(e) => debug!(step, error = %e, "ignoring failed step"),
    }
}
