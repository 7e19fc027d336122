// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::config::load_config --> cmd::merge::run_* handlers
//!   merge / dry-run / abort / continue / remove, list-targets
//! ```

pub mod config;
pub mod merge;
