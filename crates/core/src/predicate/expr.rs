// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Predicate tree types.

use serde_json::Value;

/// A predicate over records.
///
/// `Fields` with no entries is the neutral predicate `{}`: it matches every
/// record and composes safely under `and`.
#[derive(Debug, Clone, PartialEq)]
pub enum Where {
    /// Field comparisons that must all hold.
    Fields(Vec<(String, Cond)>),
    /// Every branch must hold.
    And(Vec<Where>),
    /// At least one branch must hold.
    Or(Vec<Where>),
    /// A caller-supplied predicate, kept in the JSON form it arrived in.
    Raw(Value),
}

/// A comparison applied to one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// Equal (`field: value` or `eq`). `Eq(Null)` matches null or missing.
    Eq(Value),
    /// Not equal (`neq`).
    Neq(Value),
    /// Greater than (`gt`).
    Gt(Value),
    /// Greater than or equal (`gte`).
    Gte(Value),
    /// Less than (`lt`).
    Lt(Value),
    /// Less than or equal (`lte`).
    Lte(Value),
    /// Inclusive range (`between: [lo, hi]`).
    Between(Value, Value),
    /// Value is one of (`inq`).
    Inq(Vec<Value>),
    /// Value is none of (`nin`).
    Nin(Vec<Value>),
    /// SQL-style wildcard match (`like`).
    Like(String),
    /// Negated wildcard match (`nlike`).
    Nlike(String),
    /// Regular expression match (`regexp`).
    Regexp(String),
    /// Field presence (`exists`).
    Exists(bool),
    /// An operator this tree doesn't model, preserved verbatim.
    Other(String, Value),
}

impl Cond {
    /// Returns the operator name used in the JSON form.
    pub fn op(&self) -> &str {
        match self {
            Cond::Eq(_) => "eq",
            Cond::Neq(_) => "neq",
            Cond::Gt(_) => "gt",
            Cond::Gte(_) => "gte",
            Cond::Lt(_) => "lt",
            Cond::Lte(_) => "lte",
            Cond::Between(..) => "between",
            Cond::Inq(_) => "inq",
            Cond::Nin(_) => "nin",
            Cond::Like(_) => "like",
            Cond::Nlike(_) => "nlike",
            Cond::Regexp(_) => "regexp",
            Cond::Exists(_) => "exists",
            Cond::Other(op, _) => op,
        }
    }
}

impl Default for Where {
    fn default() -> Self {
        Where::all()
    }
}

impl Where {
    /// The neutral predicate `{}`.
    pub fn all() -> Self {
        Where::Fields(Vec::new())
    }

    /// A single field comparison.
    pub fn field(name: impl Into<String>, cond: Cond) -> Self {
        Where::Fields(vec![(name.into(), cond)])
    }

    /// Equality shorthand.
    pub fn eq(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Where::field(name, Cond::Eq(value.into()))
    }

    /// Conjunction of the given predicates.
    pub fn and(parts: Vec<Where>) -> Self {
        Where::And(parts)
    }

    /// Disjunction of the given predicates.
    pub fn or(parts: Vec<Where>) -> Self {
        Where::Or(parts)
    }

    /// A comparison that no record satisfies: `{field: {inq: []}}`.
    pub fn never(field: impl Into<String>) -> Self {
        Where::field(field, Cond::Inq(Vec::new()))
    }

    /// Returns true for the neutral predicate `{}`.
    pub fn is_all(&self) -> bool {
        match self {
            Where::Fields(fields) => fields.is_empty(),
            Where::Raw(Value::Object(map)) => map.is_empty(),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
