// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::Path;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const NOW: &str = "2026-10-14T09:00:00Z";

/// `sq` isolated from the developer's environment: no `SQ_*` variables and a
/// home directory that holds no config.
pub fn sq() -> Command {
    // The directory is removed on drop; a missing user config means defaults.
    let home = TempDir::new().unwrap();
    sq_with_home(home.path())
}

/// `sq` with `home` as both the home and XDG config directory.
pub fn sq_with_home(home: impl AsRef<Path>) -> Command {
    let home = home.as_ref();
    let mut cmd = cargo_bin_cmd!("sq");
    cmd.env_remove("SQ_CONFIG")
        .env_remove("SQ_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Runs `sq compile` at [`NOW`] and parses stdout as JSON.
pub fn compile_json(args: &[&str]) -> serde_json::Value {
    let output = sq().arg("compile").args(args).args(["--now", NOW]).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}
