// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking process spawning.
//!
//! ```text
//! Invocation::new("git")
//!   .args() .cwd() .env() .interactive() .merge_stderr()
//!       --> CommandRunner::run()
//!           SystemRunner: std::process::Command
//!           FakeRunner (tests): scripted replies
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
pub mod runner;
#[cfg(test)]
pub(crate) mod testing;
