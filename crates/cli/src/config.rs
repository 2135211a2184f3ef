// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiler config discovery.
//!
//! Resolution order:
//! 1. `--config <path>`
//! 2. `SQ_CONFIG`
//! 3. `<config_dir>/setql/config.toml`, if it exists
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use sq_sets::CompilerConfig;

use crate::env;
use crate::error::Result;

/// Loads the compiler config from the first source that applies.
///
/// # Errors
///
/// Returns an error if an explicitly named file (flag or `SQ_CONFIG`) can't
/// be loaded, or if the user-level file exists but is invalid.
pub fn resolve(explicit: Option<&Path>) -> Result<CompilerConfig> {
    resolve_from(explicit, env::config_path(), env::user_config_path())
}

fn resolve_from(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    user: Option<PathBuf>,
) -> Result<CompilerConfig> {
    let path = match (explicit, from_env) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, Some(path)) => Some(path),
        (None, None) => user.filter(|p| p.is_file()),
    };
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading compiler config");
            Ok(CompilerConfig::load(&path)?)
        }
        None => Ok(CompilerConfig::default()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
