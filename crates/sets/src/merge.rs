// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merging a compiled set into a caller-supplied filter.

use sq_core::{Filter, Where};

use crate::compile::Compiled;

/// Combines the compiled set with the caller's filter.
///
/// With a caller predicate the result is `{and: [caller, ...compiled]}`, the
/// caller's predicate first. Without one the compiled predicate stands alone
/// (several sibling parts are and-ed). Every other filter property is copied
/// through unchanged.
pub fn merge(compiled: Compiled, filter: Option<&Filter>) -> Filter {
    let mut merged = filter.cloned().unwrap_or_default();
    let predicate = match merged.predicate.take() {
        Some(caller) => {
            let mut parts = vec![caller];
            parts.extend(compiled.into_parts());
            Where::and(parts)
        }
        None => compiled.into_where(),
    };
    merged.with_predicate(predicate)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
