// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::BuildInfo;

#[test]
fn test_render_layout() {
    let info = BuildInfo {
        version: "1.2.3",
        git_commit: "abc1234",
        build_time: "2026-01-02T03:04:05Z",
        rustc: "1.92.0",
        os: "linux",
        arch: "x86_64",
    };
    assert_eq!(
        info.render(),
        "Version:    1.2.3\n\
         Git commit: abc1234\n\
         Build time: 2026-01-02T03:04:05Z\n\
         Rustc:      1.92.0\n\
         OS/Arch:    linux/x86_64\n"
    );
}

#[test]
fn test_current_uses_package_version() {
    let info = BuildInfo::current();
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(info.os, std::env::consts::OS);
    assert!(!info.git_commit.is_empty());
    assert!(!info.build_time.is_empty());
    assert!(!info.rustc.is_empty());
}
