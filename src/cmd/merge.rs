// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Merge workflow commands.

use std::io::Write;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::process::runner::SystemRunner;
use crate::error::Result;
use crate::git::Git;
use crate::workflow::MergeWorkflow;

/// Runs the workflow selected on the command line in the current directory.
///
/// # Errors
///
/// Returns an error for invalid selections and for any failed required step.
pub fn run_merge_command(cli: &Cli, config: &Config) -> Result<()> {
    let request = cli.request()?;
    let git = Git::new(SystemRunner::new(), config.workflow.git.as_str());
    let workflow = MergeWorkflow::new(git, &config.workflow);

    let mut out = std::io::stdout().lock();
    workflow.run(&request, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Prints the branches of the remote that can be merged into, one per line.
///
/// # Errors
///
/// Returns an error if git is missing or cannot list remote branches.
pub fn run_list_targets_command(config: &Config) -> Result<()> {
    let git = Git::new(SystemRunner::new(), config.workflow.git.as_str());
    let workflow = MergeWorkflow::new(git, &config.workflow);

    let mut out = std::io::stdout().lock();
    for target in workflow.targets()? {
        writeln!(out, "{target}")?;
    }
    out.flush()?;
    Ok(())
}
