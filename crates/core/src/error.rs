// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sq-core operations.

use thiserror::Error;

/// All possible errors that can occur in sq-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid where clause: {0}\n  hint: a where clause is an object of field comparisons, and/or arrays")]
    InvalidWhere(String),

    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}

/// A specialized Result type for sq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
