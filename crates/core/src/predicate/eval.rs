// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of predicates against JSON records.
//!
//! This follows document-store semantics closely enough to check compiled
//! predicates without a database:
//! - Dotted field paths walk nested objects; missing fields read as null.
//! - `eq` against an array field means "the array contains the value".
//! - `inq` against an array field means "the arrays share an element".
//! - Strings that both parse as RFC 3339 compare as instants.
//! - Operators the tree doesn't model never match, nor does a raw predicate
//!   that doesn't parse.

use chrono::DateTime;
use regex::Regex;
use serde_json::Value;
use std::cmp::Ordering;

use super::expr::{Cond, Where};

impl Where {
    /// Returns true if the record satisfies this predicate.
    pub fn matches(&self, record: &Value) -> bool {
        match self {
            Where::Fields(fields) => {
                fields.iter().all(|(name, cond)| cond.matches(resolve(record, name)))
            }
            Where::And(parts) => parts.iter().all(|p| p.matches(record)),
            Where::Or(parts) => parts.iter().any(|p| p.matches(record)),
            Where::Raw(value) => Where::try_from(value).is_ok_and(|p| p.matches(record)),
        }
    }
}

impl Cond {
    /// Returns true if the field value (`None` when missing) satisfies this comparison.
    pub fn matches(&self, actual: Option<&Value>) -> bool {
        let value = actual.unwrap_or(&Value::Null);
        match self {
            Cond::Eq(expected) => equals(value, expected),
            Cond::Neq(expected) => !equals(value, expected),
            Cond::Gt(bound) => ordered(value, bound, |o| o == Ordering::Greater),
            Cond::Gte(bound) => ordered(value, bound, |o| o != Ordering::Less),
            Cond::Lt(bound) => ordered(value, bound, |o| o == Ordering::Less),
            Cond::Lte(bound) => ordered(value, bound, |o| o != Ordering::Greater),
            Cond::Between(lo, hi) => {
                ordered(value, lo, |o| o != Ordering::Less)
                    && ordered(value, hi, |o| o != Ordering::Greater)
            }
            Cond::Inq(items) => contains_any(value, items),
            Cond::Nin(items) => !contains_any(value, items),
            Cond::Like(pattern) => like(value, pattern),
            Cond::Nlike(pattern) => value.is_string() && !like(value, pattern),
            Cond::Regexp(pattern) => regexp(value, pattern),
            Cond::Exists(expected) => actual.is_some() == *expected,
            Cond::Other(..) => false,
        }
    }
}

/// Resolves a dotted field path. A literal key containing dots wins over the path.
fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(path) {
        return Some(value);
    }
    path.split('.').try_fold(record, |node, segment| node.get(segment))
}

fn equals(actual: &Value, expected: &Value) -> bool {
    match actual {
        Value::Array(items) if !expected.is_array() => items.iter().any(|i| same(i, expected)),
        _ => same(actual, expected),
    }
}

fn same(a: &Value, b: &Value) -> bool {
    a == b || compare(a, b) == Some(Ordering::Equal)
}

fn ordered(actual: &Value, bound: &Value, accept: impl Fn(Ordering) -> bool) -> bool {
    compare(actual, bound).is_some_and(accept)
}

fn contains_any(actual: &Value, items: &[Value]) -> bool {
    match actual {
        Value::Array(values) => values.iter().any(|v| items.iter().any(|i| same(v, i))),
        _ => items.iter().any(|i| same(actual, i)),
    }
}

/// Compares two scalars. Mismatched or non-scalar kinds are unordered.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => {
            match (DateTime::parse_from_rfc3339(x), DateTime::parse_from_rfc3339(y)) {
                (Ok(x), Ok(y)) => Some(x.cmp(&y)),
                _ => Some(x.cmp(y)),
            }
        }
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn like(actual: &Value, pattern: &str) -> bool {
    let Some(text) = actual.as_str() else {
        return false;
    };
    let mut source = String::from("^");
    for c in pattern.chars() {
        match c {
            '%' => source.push_str(".*"),
            '_' => source.push('.'),
            c => source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');
    Regex::new(&source).is_ok_and(|re| re.is_match(text))
}

/// Matches `pattern`, accepting the `/source/flags` form (only `i` is honored).
fn regexp(actual: &Value, pattern: &str) -> bool {
    let Some(text) = actual.as_str() else {
        return false;
    };
    let source = match pattern.strip_prefix('/').and_then(|rest| rest.rsplit_once('/')) {
        Some((body, flags)) if flags.contains('i') => format!("(?i){body}"),
        Some((body, _)) => body.to_string(),
        None => pattern.to_string(),
    };
    Regex::new(&source).is_ok_and(|re| re.is_match(text))
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
