// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_set = { Error::InvalidSet("expected an object".into()), "expected an object" },
    invalid_set_hint = { Error::InvalidSet("x".into()), "{\"actives\": \"\"}" },
    config = { Error::Config("max_depth must be at least 1".into()), "config error" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}
