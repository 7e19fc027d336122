// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for git-mergex.
//!
//! ```text
//! Config: GlobalConfig (logging), WorkflowConfig (git, names, guards)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console (stderr) output (0-6).
    pub log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Settings of the merge workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkflowConfig {
    /// Git executable, resolved on PATH.
    pub git: String,
    /// Remote the target is fetched from.
    pub remote: String,
    /// Prefix of the temporary staging branches.
    pub temp_branch_prefix: String,
    /// Branches the workflow refuses to rewrite.
    pub protected_branches: Vec<String>,
    /// Branch name prefixes the workflow refuses to rewrite.
    pub protected_prefixes: Vec<String>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            remote: "origin".to_string(),
            temp_branch_prefix: "_mergex".to_string(),
            protected_branches: vec!["master".to_string()],
            protected_prefixes: vec!["release".to_string()],
        }
    }
}

impl WorkflowConfig {
    /// Checks that names used to build git arguments are usable.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for empty names or names with whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("git", &self.git),
            ("remote", &self.remote),
            ("temp_branch_prefix", &self.temp_branch_prefix),
        ] {
            if value.is_empty() {
                return Err(invalid(key, "must not be empty"));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(invalid(key, &format!("must not contain whitespace, got '{value}'")));
            }
        }
        if self.protected_prefixes.iter().any(String::is_empty) {
            return Err(invalid(
                "protected_prefixes",
                "an empty prefix would forbid every branch",
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "workflow".to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
