// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management.
//!
//! ```text
//!          core
//!           |
//!        process
//!           |
//!   Invocation  --> CommandRunner --> ProcessOutput
//!   RunFlags        SystemRunner
//! ```

pub mod process;
