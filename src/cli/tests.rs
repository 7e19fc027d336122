// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::workflow::WorkflowRequest;
use clap::Parser;

fn request(args: &[&str]) -> Result<WorkflowRequest, String> {
    let cli = Cli::try_parse_from(std::iter::once("git-mergex").chain(args.iter().copied()))
        .map_err(|e| e.to_string())?;
    cli.request().map_err(|e| e.to_string())
}

#[test]
fn test_parse_target() {
    assert_eq!(
        request(&["main"]).unwrap(),
        WorkflowRequest::Merge {
            target: "main".to_string(),
            dry_run: false,
        }
    );
}

#[test]
fn test_parse_dry_run() {
    assert_eq!(
        request(&["-d", "develop"]).unwrap(),
        WorkflowRequest::Merge {
            target: "develop".to_string(),
            dry_run: true,
        }
    );
    assert_eq!(
        request(&["develop", "--dry-run"]).unwrap(),
        request(&["-d", "develop"]).unwrap()
    );
}

#[test]
fn test_parse_modes() {
    assert_eq!(request(&["-a"]).unwrap(), WorkflowRequest::Abort);
    assert_eq!(request(&["--continue"]).unwrap(), WorkflowRequest::Continue);
    assert_eq!(
        request(&["-r"]).unwrap(),
        WorkflowRequest::RemoveTempBranches
    );
}

#[test]
fn test_conflicting_modes_rejected() {
    let cases: [&[&str]; 5] = [
        &[],
        &["main", "-a"],
        &["-a", "-c"],
        &["-c", "-r"],
        &["main", "--remove"],
    ];
    for args in cases {
        assert_eq!(
            request(args).unwrap_err(),
            "only one of <branch|commit>, --abort, --continue and --remove can be specified",
            "{args:?}"
        );
    }
}

#[test]
fn test_dry_run_without_target_rejected() {
    insta::assert_snapshot!(
        request(&["-d", "-r"]).unwrap_err(),
        @"--dry-run requires a <branch|commit> to merge"
    );
}

#[test]
fn test_version_and_list_targets_flags() {
    let cli = Cli::try_parse_from(["git-mergex", "-V"]).unwrap();
    assert!(cli.version);
    assert!(cli.target.is_none());

    let cli = Cli::try_parse_from(["git-mergex", "--list-targets"]).unwrap();
    assert!(cli.list_targets);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "git-mergex",
        "-l",
        "4",
        "--log-file",
        "/tmp/mergex.log",
        "--config",
        "a.toml",
        "--config",
        "b.toml",
        "main",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.configs.len(), 2);
    assert_eq!(cli.target.as_deref(), Some("main"));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["git-mergex", "-l", "7", "main"]).is_err());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from(["git-mergex", "-l", "3", "--log-file", "m.log", "-r"]).unwrap();
    let keys: Vec<_> = cli
        .global
        .to_config_overrides()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    assert_eq!(
        keys,
        [
            "global.log_level=3",
            "global.file_log_level=3",
            "global.log_file=m.log"
        ]
    );
}

#[test]
fn test_file_log_level_kept_when_given() {
    let cli = Cli::try_parse_from(["git-mergex", "--file-log-level", "5", "-r"]).unwrap();
    let overrides = cli.global.to_config_overrides();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].0, "global.file_log_level");
}
