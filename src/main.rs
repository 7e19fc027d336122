// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> -V? --> Config --> Logging --> Dispatch
//!                                        merge | list-targets
//! ```

use std::process::ExitCode;

use git_mergex::build_info::BuildInfo;
use git_mergex::cli::{self, Cli};
use git_mergex::cmd::config::load_config;
use git_mergex::cmd::merge::{run_list_targets_command, run_merge_command};
use git_mergex::config::Config;
use git_mergex::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if cli.version {
        print!("{}", BuildInfo::current().render());
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&LogConfig::from_global(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn dispatch_command(cli: &Cli, config: &Config) -> ExitCode {
    let result = if cli.list_targets {
        run_list_targets_command(config)
    } else {
        run_merge_command(cli, config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
