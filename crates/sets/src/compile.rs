// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Set expression compilation.
//!
//! The compiler walks a set expression top-down. Condition keys resolve
//! through [`Conditions`]; `and` / `or` keys recurse into their array of
//! nested expressions. Sibling keys are kept as separate parts and and-ed by
//! the merger.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sq_core::{ClockSource, Filter, SystemClock, Where};

use crate::conditions::Conditions;
use crate::config::CompilerConfig;
use crate::expr::{Condition, SetExpr, SetKey};
use crate::merge::merge;

/// The predicate(s) a set expression compiles to.
#[derive(Debug, Clone, PartialEq)]
pub enum Compiled {
    /// An expression with zero or one key.
    Single(Where),
    /// One part per sibling key, to be and-ed.
    Many(Vec<Where>),
}

impl Compiled {
    /// Collapses to one predicate, and-ing sibling parts.
    pub fn into_where(self) -> Where {
        match self {
            Compiled::Single(predicate) => predicate,
            Compiled::Many(parts) => Where::and(parts),
        }
    }

    /// Returns the parts as a list.
    pub fn into_parts(self) -> Vec<Where> {
        match self {
            Compiled::Single(predicate) => vec![predicate],
            Compiled::Many(parts) => parts,
        }
    }
}

/// Compiles set expressions into storage filters.
///
/// Stateless apart from its configuration; one compiler can serve any number
/// of concurrent requests.
pub struct Compiler<C: ClockSource = SystemClock> {
    config: CompilerConfig,
    clock: C,
}

impl Compiler<SystemClock> {
    /// Creates a compiler reading the system clock.
    pub fn new(config: CompilerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Compiler<SystemClock> {
    fn default() -> Self {
        Self::new(CompilerConfig::default())
    }
}

impl<C: ClockSource> Compiler<C> {
    /// Creates a compiler with a custom clock source.
    pub fn with_clock(config: CompilerConfig, clock: C) -> Self {
        Compiler { config, clock }
    }

    /// Compiles `set` and merges it into `filter`.
    ///
    /// The clock is read once; every time window in the result is measured
    /// from that instant.
    pub fn compile(&self, set: &SetExpr, filter: Option<&Filter>) -> Filter {
        self.compile_at(set, filter, self.clock.now())
    }

    /// Compiles `set` at a given instant and merges it into `filter`.
    pub fn compile_at(&self, set: &SetExpr, filter: Option<&Filter>, now: DateTime<Utc>) -> Filter {
        let compiled = self.compile_set(set, now);
        tracing::debug!(
            keys = set.as_map().len(),
            caller_where = filter.is_some_and(|f| f.predicate.is_some()),
            "compiled set expression"
        );
        merge(compiled, filter)
    }

    /// Compiles `set` at a given instant without merging.
    ///
    /// An empty expression compiles to the neutral predicate.
    pub fn compile_set(&self, set: &SetExpr, now: DateTime<Utc>) -> Compiled {
        let conditions = Conditions::new(&self.config.fields, now);
        self.evaluate(set.as_map(), &conditions, 0)
    }

    fn evaluate(&self, set: &Map<String, Value>, conditions: &Conditions<'_>, depth: usize) -> Compiled {
        let mut parts: Vec<Where> =
            set.iter().map(|(key, value)| self.entry(key, value, conditions, depth)).collect();
        match parts.len() {
            0 => Compiled::Single(Where::all()),
            1 => Compiled::Single(parts.remove(0)),
            _ => Compiled::Many(parts),
        }
    }

    fn entry(&self, key: &str, value: &Value, conditions: &Conditions<'_>, depth: usize) -> Where {
        match SetKey::parse(key) {
            SetKey::And => self.combine(Where::And, key, value, conditions, depth),
            SetKey::Or => self.combine(Where::Or, key, value, conditions, depth),
            SetKey::Condition(Condition::Unknown) => {
                tracing::debug!(key, "unknown set condition");
                Where::all()
            }
            SetKey::Condition(condition) => conditions.resolve(&condition, Some(value)),
        }
    }

    /// Compiles each nested expression of an `and` / `or` key and wraps them.
    fn combine(
        &self,
        wrap: fn(Vec<Where>) -> Where,
        key: &str,
        value: &Value,
        conditions: &Conditions<'_>,
        depth: usize,
    ) -> Where {
        if depth >= self.config.max_depth {
            tracing::warn!(key, depth, max_depth = self.config.max_depth, "set expression nested too deeply");
            return Where::never(&self.config.fields.id);
        }
        let Some(items) = value.as_array() else {
            tracing::debug!(key, "combinator value is not an array");
            return Where::all();
        };
        if items.is_empty() {
            return Where::all();
        }
        let branches = items
            .iter()
            .map(|item| match item.as_object() {
                Some(nested) => self.evaluate(nested, conditions, depth + 1).into_where(),
                None => Where::all(),
            })
            .collect();
        wrap(branches)
    }
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
