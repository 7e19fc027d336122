// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-mergex using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-mergex [global options] <branch|commit>   merge into target
//! git-mergex -d <branch|commit>                 dry run
//! git-mergex -a | -c | -r                       abort / continue / remove
//! git-mergex -V                                 build info
//! ```
//!
//! Exactly one of the target, `-a`, `-c` and `-r` is accepted; the check
//! lives in [`WorkflowRequest::from_selection`].

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::error::MergexResult;
use crate::workflow::WorkflowRequest;
use clap::Parser;

/// git merge extension for aoneflow
///
/// Merges the current branch into a remote target branch, keeping the
/// branch itself untouched until the merge is done.
#[derive(Debug, Parser)]
#[command(
    name = "git-mergex",
    author,
    about = "git merge extension for aoneflow",
    disable_version_flag = true,
    long_about = "git-mergex Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Merges the current feature branch into a target branch of the\n\
                  remote (aoneflow). The target is fetched, the current branch is\n\
                  saved as _mergex/<branch> and reset to the target, and the saved\n\
                  tip is merged back with --no-ff.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `.git-mergex.toml` in the current\n\
                  directory if present, then from each --config file, then from\n\
                  MERGEX_* environment variables (MERGEX_WORKFLOW__REMOTE=upstream).\n\
                  Command-line options win over all of them."
)]
pub struct Cli {
    /// Branch or commit of the remote to merge the current branch into.
    #[arg(value_name = "branch|commit")]
    pub target: Option<String>,

    /// Aborts a conflicted merge and restores the current branch.
    #[arg(short = 'a', long)]
    pub abort: bool,

    /// Continues a merge after the conflicts were resolved.
    #[arg(short = 'c', long = "continue")]
    pub cont: bool,

    /// Tries the merge and reports conflicts without changing anything.
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Removes all temporary branches.
    #[arg(short = 'r', long)]
    pub remove: bool,

    /// Prints version and build information.
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Prints the branches of the remote that can be merged into.
    #[arg(long = "list-targets", hide = true)]
    pub list_targets: bool,

    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,
}

impl Cli {
    /// The workflow run selected by the arguments.
    ///
    /// # Errors
    ///
    /// Returns a `MergexError::Usage` for conflicting or missing selections.
    pub fn request(&self) -> MergexResult<WorkflowRequest> {
        WorkflowRequest::from_selection(
            self.target.as_deref(),
            self.dry_run,
            self.abort,
            self.cont,
            self.remove,
        )
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
