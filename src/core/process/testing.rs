// git-mergex: git merge extension for aoneflow
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted runner for tests.
//!
//! Responses are matched by argument prefix, first match wins. Invocations
//! with no scripted response succeed with empty output.

use std::cell::RefCell;
use std::path::PathBuf;

use super::builder::{Invocation, ProcessOutput};
use super::runner::CommandRunner;
use crate::error::MergexResult;

struct Script {
    prefix: Vec<String>,
    output: ProcessOutput,
}

/// Records every invocation and replays canned outputs.
pub(crate) struct FakeRunner {
    executable: Option<PathBuf>,
    scripts: Vec<Script>,
    calls: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
    /// A runner whose `git` resolves to `/usr/bin/git`.
    pub(crate) fn new() -> Self {
        Self {
            executable: Some(PathBuf::from("/usr/bin/git")),
            scripts: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A runner that cannot find any executable.
    pub(crate) fn without_git() -> Self {
        Self {
            executable: None,
            ..Self::new()
        }
    }

    /// Replies to invocations starting with `prefix`.
    pub(crate) fn on(mut self, prefix: &[&str], exit_code: i32, output: &str) -> Self {
        self.scripts.push(Script {
            prefix: prefix.iter().map(ToString::to_string).collect(),
            output: ProcessOutput::new(exit_code, output.to_string(), String::new()),
        });
        self
    }

    /// Argument lists of all invocations, joined by spaces.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.args_slice().join(" "))
            .collect()
    }

    /// Full invocations, for flag assertions.
    pub(crate) fn invocations(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn locate(&self, _program: &str) -> Option<PathBuf> {
        self.executable.clone()
    }

    fn run(&self, invocation: &Invocation) -> MergexResult<ProcessOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        let args = invocation.args_slice();
        let output = self
            .scripts
            .iter()
            .find(|script| args.starts_with(&script.prefix))
            .map(|script| script.output.clone())
            .unwrap_or_default();
        Ok(output)
    }
}
