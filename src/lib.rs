// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |                merge / list-targets
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                        workflow
//!              merge / dry-run / abort / continue / remove
//!              branches (naming, guard), classify (output)
//!                            |
//!                            v
//!                           git
//!                  query / cmd over CommandRunner
//!
//!   +-----------------------------------------+
//!   |  core   process (Invocation, runner)    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, build_info|
//!   +-----------------------------------------+
//! ```

pub mod build_info;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod workflow;
