// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    /// Log filter directives (`tracing_subscriber::EnvFilter` syntax).
    pub const SQ_LOG: &str = "SQ_LOG";
    /// Compiler config file path.
    pub const SQ_CONFIG: &str = "SQ_CONFIG";
}

/// Returns the value of `SQ_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::SQ_CONFIG).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Returns the user-level config file location, `<config_dir>/setql/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("setql").join("config.toml"))
}
