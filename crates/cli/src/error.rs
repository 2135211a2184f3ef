// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the sq command.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no set expression given\n  hint: pass --set '{{\"actives\": \"\"}}', --set-file <path>, or pipe JSON on stdin")]
    NoSetInput,

    #[error("invalid timestamp: {0}\n  hint: use RFC 3339, e.g. 2026-10-14T09:00:00Z")]
    InvalidTime(String),

    #[error("failed to read {target}: {source}")]
    Read {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sets(#[from] sq_sets::Error),

    #[error(transparent)]
    Core(#[from] sq_core::Error),
}

/// A specialized Result type for sq operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
