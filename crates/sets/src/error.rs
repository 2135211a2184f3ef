// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sq-sets operations.
//!
//! Compilation itself is infallible; these cover decoding inputs and loading
//! configuration.

use thiserror::Error;

/// All possible errors that can occur in sq-sets operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid set expression: {0}\n  hint: a set is an object such as {{\"actives\": \"\"}}")]
    InvalidSet(String),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for sq-sets operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
