// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build metadata shown by `--version`.
//!
//! ```text
//! CARGO_PKG_VERSION  ──┐
//! MERGEX_GIT_COMMIT  ──┼──> BuildInfo::current() ──> render()
//! MERGEX_BUILD_TIME  ──┤    (compile time, "unknown" if unset)
//! MERGEX_RUSTC_VERSION ┘
//! ```

use std::fmt;

const UNKNOWN: &str = "unknown";

/// Immutable description of the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_time: &'static str,
    pub rustc: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
}

impl BuildInfo {
    /// Metadata baked in at compile time.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            git_commit: match option_env!("MERGEX_GIT_COMMIT") {
                Some(commit) => commit,
                None => UNKNOWN,
            },
            build_time: match option_env!("MERGEX_BUILD_TIME") {
                Some(time) => time,
                None => UNKNOWN,
            },
            rustc: match option_env!("MERGEX_RUSTC_VERSION") {
                Some(version) => version,
                None => UNKNOWN,
            },
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }

    /// Multi-line block printed by `--version`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version:    {}", self.version)?;
        writeln!(f, "Git commit: {}", self.git_commit)?;
        writeln!(f, "Build time: {}", self.build_time)?;
        writeln!(f, "Rustc:      {}", self.rustc)?;
        writeln!(f, "OS/Arch:    {}/{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests;
