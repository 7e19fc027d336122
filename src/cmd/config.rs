// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading for the command line.

use std::path::Path;

use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use crate::error::Result;

/// Stacks every configuration source in precedence order.
///
/// # Errors
///
/// Returns an error if a CLI override cannot be applied.
pub fn build_config_loader(global: &GlobalOptions, cwd: &Path) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(cwd.join(LOCAL_CONFIG_FILE));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

/// Loads the configuration seen from the current directory.
///
/// # Errors
///
/// Returns an error if a `--config` file is missing, any source is invalid,
/// or the merged result fails validation.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let loader = build_config_loader(global, &cwd)?;
    for line in loader.format_loaded_files() {
        debug!(source = %line, "config");
    }
    loader.build()
}
