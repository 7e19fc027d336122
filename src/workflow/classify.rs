// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Classification of git's human-readable output.
//!
//! The workflow only asks these questions; swapping the implementation for
//! one based on exit codes or plumbing commands leaves the workflow intact.

/// Suffix git appends to a `--no-commit` merge report.
const NO_COMMIT_NOTICE: &str = "; stopped before committing as requested";

/// Questions the workflow asks about git output.
pub trait OutputClassifier {
    /// The merge had nothing to do.
    fn is_up_to_date(&self, merge_output: &str) -> bool;

    /// The fetch failed because the remote has no such ref.
    fn is_missing_remote_ref(&self, fetch_output: &str) -> bool;

    /// Trial-merge output without the "stopped before committing" notice.
    fn strip_no_commit_notice(&self, merge_output: &str) -> String;
}

/// Substring heuristics over git's English (C locale) messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitTextClassifier;

impl OutputClassifier for GitTextClassifier {
    fn is_up_to_date(&self, merge_output: &str) -> bool {
        merge_output.contains("up to date")
    }

    fn is_missing_remote_ref(&self, fetch_output: &str) -> bool {
        fetch_output
            .to_lowercase()
            .contains("couldn't find remote ref")
    }

    fn strip_no_commit_notice(&self, merge_output: &str) -> String {
        merge_output.replace(NO_COMMIT_NOTICE, "")
    }
}
