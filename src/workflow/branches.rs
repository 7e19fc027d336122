// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch naming and the protected-branch guard.
//!
//! ```text
//! feature-x --staging_branch--> _mergex/feature-x
//! main      --remote_ref------> origin/main
//! master, release*            --> forbidden
//! ```

use std::collections::BTreeSet;

use crate::config::types::WorkflowConfig;
use crate::error::{GitError, MergexResult};

/// What `rev-parse --abbrev-ref HEAD` prints for a detached HEAD.
const DETACHED_HEAD: &str = "HEAD";

/// Temporary branch that snapshots `current` during a merge.
#[must_use]
pub fn staging_branch(settings: &WorkflowConfig, current: &str) -> String {
    format!("{}/{current}", settings.temp_branch_prefix)
}

/// Remote-tracking name of `reference`.
#[must_use]
pub fn remote_ref(settings: &WorkflowConfig, reference: &str) -> String {
    format!("{}/{reference}", settings.remote)
}

/// True for branches created by the workflow.
#[must_use]
pub fn is_temp_branch(settings: &WorkflowConfig, name: &str) -> bool {
    name.starts_with(&settings.temp_branch_prefix)
}

/// Fails if the workflow must not rewrite `branch`.
///
/// # Errors
///
/// Returns `GitError::ForbiddenBranch` for protected branches and prefixes,
/// `GitError::DetachedHead` when no branch is checked out.
pub fn check_current_branch(settings: &WorkflowConfig, branch: &str) -> MergexResult<()> {
    if branch == DETACHED_HEAD {
        return Err(GitError::DetachedHead.into());
    }
    let protected = settings.protected_branches.iter().any(|p| p == branch)
        || settings
            .protected_prefixes
            .iter()
            .any(|prefix| branch.starts_with(prefix.as_str()));
    if protected {
        return Err(GitError::ForbiddenBranch {
            branch: branch.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Merge targets offered from the remote's branches, sorted and deduplicated.
#[must_use]
pub fn merge_targets(settings: &WorkflowConfig, remote_branches: &[String]) -> Vec<String> {
    let prefix = format!("{}/", settings.remote);
    remote_branches
        .iter()
        .filter_map(|name| name.strip_prefix(&prefix))
        .filter(|name| !name.is_empty() && *name != DETACHED_HEAD)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
