// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for git-mergex.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. .git-mergex.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. MERGEX_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MERGEX_WORKFLOW__REMOTE=upstream        → workflow.remote = "upstream"
//! MERGEX_WORKFLOW__TEMP_BRANCH_PREFIX=_mx → workflow.temp_branch_prefix = "_mx"
//! MERGEX_GLOBAL__LOG_LEVEL=4              → global.log_level = 4
//! ```
//!
//! # Example
//!
//! ```toml
//! [workflow]
//! remote = "upstream"
//! protected_branches = ["master", "main"]
//! protected_prefixes = ["release", "hotfix"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GlobalConfig, WorkflowConfig};

/// Name of the optional per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".git-mergex.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "MERGEX";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Merge workflow settings.
    pub workflow: WorkflowConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_mergex::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional(".git-mergex.toml")
    ///     .with_env_prefix("MERGEX")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates values after all sources are merged.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for unusable workflow names.
    pub fn resolve_and_validate(&self) -> Result<()> {
        self.workflow.validate()?;
        Ok(())
    }
}
