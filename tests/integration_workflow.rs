// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the merge workflow.
//!
//! Each test builds a bare "remote" and a working clone in a temporary
//! directory and drives the workflow through the real git executable.

use git_mergex::config::types::WorkflowConfig;
use git_mergex::core::process::runner::SystemRunner;
use git_mergex::error::{GitError, MergexResult};
use git_mergex::git::Git;
use git_mergex::workflow::{MergeWorkflow, WorkflowRequest};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

struct Fixture {
    _temp: TempDir,
    work: PathBuf,
}

/// Helper to run git commands in a directory, panicking on failure
fn git_out(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("LC_ALL", "C")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    fs::write(dir.join(name), content).unwrap();
    git_out(&["add", name], dir);
    git_out(&["commit", "-q", "-m", message], dir);
}

fn has_git() -> bool {
    which::which("git").is_ok()
}

/// Remote with one commit on `main`, cloned into `work` and checked out on `feature-x`.
fn fixture() -> Fixture {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let remote = temp.path().join("remote.git");
    let work = temp.path().join("work");

    git_out(
        &[
            "-c",
            "init.defaultBranch=main",
            "init",
            "-q",
            "--bare",
            remote.to_str().unwrap(),
        ],
        temp.path(),
    );
    git_out(
        &[
            "-c",
            "init.defaultBranch=main",
            "init",
            "-q",
            work.to_str().unwrap(),
        ],
        temp.path(),
    );
    git_out(&["config", "user.email", "test@test.com"], &work);
    git_out(&["config", "user.name", "Test"], &work);
    git_out(&["config", "commit.gpgsign", "false"], &work);
    git_out(&["remote", "add", "origin", remote.to_str().unwrap()], &work);

    commit_file(&work, "README.md", "# Test\n", "Initial commit");
    git_out(&["push", "-q", "origin", "main"], &work);
    git_out(&["checkout", "-q", "-b", "feature-x"], &work);

    Fixture { _temp: temp, work }
}

/// Adds a commit to the remote's `main` without touching `feature-x`.
fn push_to_main(fx: &Fixture, name: &str, content: &str) {
    git_out(&["checkout", "-q", "main"], &fx.work);
    commit_file(&fx.work, name, content, &format!("Add {name} on main"));
    git_out(&["push", "-q", "origin", "main"], &fx.work);
    git_out(&["checkout", "-q", "feature-x"], &fx.work);
}

fn run(fx: &Fixture, request: &WorkflowRequest) -> (MergexResult<()>, String) {
    let settings = WorkflowConfig::default();
    let git = Git::new(SystemRunner::new(), "git").with_cwd(&fx.work);
    let workflow = MergeWorkflow::new(git, &settings);
    let mut out = Vec::new();
    let result = workflow.run(request, &mut out);
    (result, String::from_utf8_lossy(&out).into_owned())
}

fn merge_to(target: &str, dry_run: bool) -> WorkflowRequest {
    WorkflowRequest::Merge {
        target: target.to_string(),
        dry_run,
    }
}

fn branches(fx: &Fixture) -> Vec<String> {
    git_out(&["branch", "--format=%(refname:short)"], &fx.work)
        .lines()
        .map(String::from)
        .collect()
}

// =============================================================================
// Merge
// =============================================================================

#[test]
fn workflow_fast_forward() {
    if !has_git() {
        return;
    }
    let fx = fixture();

    let (result, out) = run(&fx, &merge_to("main", false));
    result.unwrap();
    assert_eq!(out, "Fast-forward to main\n");
    assert_eq!(git_out(&["rev-parse", "--abbrev-ref", "HEAD"], &fx.work), "feature-x");
    assert_eq!(
        git_out(&["rev-parse", "HEAD"], &fx.work),
        git_out(&["rev-parse", "origin/main"], &fx.work)
    );
    assert_eq!(branches(&fx), ["feature-x", "main"]);
}

#[test]
fn workflow_merge_creates_merge_commit() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    commit_file(&fx.work, "a.txt", "feature\n", "Add a.txt");
    push_to_main(&fx, "b.txt", "main\n");

    let (result, out) = run(&fx, &merge_to("main", false));
    result.unwrap();
    assert!(out.contains("Merge made by"), "{out}");

    assert_eq!(
        git_out(&["log", "-1", "--format=%s"], &fx.work),
        "Merge branch 'feature-x' into main"
    );
    assert_eq!(
        git_out(&["rev-parse", "HEAD^1"], &fx.work),
        git_out(&["rev-parse", "origin/main"], &fx.work)
    );
    assert!(fx.work.join("a.txt").exists());
    assert!(fx.work.join("b.txt").exists());
    assert!(!branches(&fx).iter().any(|b| b.starts_with("_mergex")));
}

#[test]
fn workflow_conflict_then_abort() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    commit_file(&fx.work, "README.md", "# Feature\n", "Change README on feature");
    let tip = git_out(&["rev-parse", "HEAD"], &fx.work);
    push_to_main(&fx, "README.md", "# Main\n");

    let (result, out) = run(&fx, &merge_to("main", false));
    result.unwrap();
    assert!(out.contains("CONFLICT"), "{out}");
    assert!(branches(&fx).contains(&"_mergex/feature-x".to_string()));

    let (result, out) = run(&fx, &WorkflowRequest::Abort);
    result.unwrap();
    assert!(out.is_empty());
    assert_eq!(git_out(&["rev-parse", "HEAD"], &fx.work), tip);
    assert_eq!(git_out(&["status", "--porcelain", "-uno"], &fx.work), "");
    assert!(!branches(&fx).iter().any(|b| b.starts_with("_mergex")));
}

#[test]
fn workflow_conflict_then_continue() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    // `merge --continue` opens the editor on the terminal; accept the message as is
    git_out(&["config", "core.editor", "true"], &fx.work);
    commit_file(&fx.work, "README.md", "# Feature\n", "Change README on feature");
    let tip = git_out(&["rev-parse", "HEAD"], &fx.work);
    push_to_main(&fx, "README.md", "# Main\n");

    let (result, out) = run(&fx, &merge_to("main", false));
    result.unwrap();
    assert!(out.contains("CONFLICT"), "{out}");

    fs::write(fx.work.join("README.md"), "# Feature and main\n").unwrap();
    git_out(&["add", "README.md"], &fx.work);

    let (result, _) = run(&fx, &WorkflowRequest::Continue);
    result.unwrap();

    assert!(!fx.work.join(".git/MERGE_HEAD").exists());
    assert_eq!(
        git_out(&["log", "-1", "--format=%s"], &fx.work),
        "Merge branch 'feature-x' into main"
    );
    assert_eq!(
        git_out(&["rev-parse", "HEAD^1"], &fx.work),
        git_out(&["rev-parse", "origin/main"], &fx.work)
    );
    assert_eq!(git_out(&["rev-parse", "HEAD^2"], &fx.work), tip);
    assert_eq!(git_out(&["rev-parse", "--abbrev-ref", "HEAD"], &fx.work), "feature-x");
    assert_eq!(branches(&fx), ["feature-x", "main"]);
}

#[test]
fn workflow_dirty_tree_rejected() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    fs::write(fx.work.join("README.md"), "# Dirty\n").unwrap();

    let (result, out) = run(&fx, &merge_to("main", false));
    let err = result.unwrap_err();
    assert!(matches!(
        err.as_git(),
        Some(GitError::UncommittedChanges { paths }) if paths.contains("README.md")
    ));
    assert!(out.is_empty());
    assert!(!branches(&fx).iter().any(|b| b.starts_with("_mergex")));
}

#[test]
fn workflow_protected_branch_rejected() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    git_out(&["checkout", "-q", "-b", "release-1.0"], &fx.work);
    let head = git_out(&["rev-parse", "HEAD"], &fx.work);

    let (result, _) = run(&fx, &merge_to("main", false));
    assert_eq!(result.unwrap_err().to_string(), "branch release-1.0 is forbidden");
    assert_eq!(git_out(&["rev-parse", "HEAD"], &fx.work), head);
}

#[test]
fn workflow_missing_remote_ref_hint() {
    if !has_git() {
        return;
    }
    let fx = fixture();

    let (result, out) = run(&fx, &merge_to("origin/main", false));
    assert!(result.is_err());
    assert!(
        out.ends_with("it seems that the branch 'origin/main' should not start with 'origin'\n"),
        "{out}"
    );
}

// =============================================================================
// Dry run
// =============================================================================

#[test]
fn workflow_dry_run_leaves_tree_untouched() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    commit_file(&fx.work, "README.md", "# Feature\n", "Change README on feature");
    let tip = git_out(&["rev-parse", "HEAD"], &fx.work);
    push_to_main(&fx, "README.md", "# Main\n");

    let (first, first_out) = run(&fx, &merge_to("main", true));
    let (second, second_out) = run(&fx, &merge_to("main", true));
    first.unwrap();
    second.unwrap();
    assert!(first_out.contains("CONFLICT"), "{first_out}");
    assert_eq!(first_out, second_out);

    assert_eq!(git_out(&["rev-parse", "HEAD"], &fx.work), tip);
    assert_eq!(git_out(&["status", "--porcelain", "-uno"], &fx.work), "");
    assert!(!fx.work.join(".git/MERGE_HEAD").exists());
    assert_eq!(branches(&fx), ["feature-x", "main"]);
}

#[test]
fn workflow_dry_run_clean_merge() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    commit_file(&fx.work, "a.txt", "feature\n", "Add a.txt");
    push_to_main(&fx, "b.txt", "main\n");

    let (result, out) = run(&fx, &merge_to("main", true));
    result.unwrap();
    assert!(!out.contains("stopped before committing"), "{out}");
    assert!(!fx.work.join("b.txt").exists());
    assert!(!fx.work.join(".git/MERGE_HEAD").exists());
}

// =============================================================================
// Remove
// =============================================================================

#[test]
fn workflow_remove_temp_branches() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    git_out(&["branch", "_mergex/a"], &fx.work);
    git_out(&["branch", "_mergex/b"], &fx.work);

    let (result, out) = run(&fx, &WorkflowRequest::RemoveTempBranches);
    result.unwrap();
    assert!(out.is_empty());
    assert_eq!(branches(&fx), ["feature-x", "main"]);

    let (result, _) = run(&fx, &WorkflowRequest::RemoveTempBranches);
    result.unwrap();
}

#[test]
fn workflow_targets() {
    if !has_git() {
        return;
    }
    let fx = fixture();
    git_out(&["push", "-q", "origin", "feature-x:develop"], &fx.work);
    git_out(&["fetch", "-q", "origin"], &fx.work);

    let settings = WorkflowConfig::default();
    let git = Git::new(SystemRunner::new(), "git").with_cwd(&fx.work);
    let targets = MergeWorkflow::new(git, &settings).targets().unwrap();
    assert_eq!(targets, ["develop", "main"]);
}
