// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Set expression input types.
//!
//! A set expression maps condition names to payloads. Keys are matched
//! case-insensitively:
//!
//! - Presence-only conditions (`actives`, `publics`, `roots`, ...) ignore
//!   their value.
//! - Identity conditions (`owners`, `viewers`, `audience`) take
//!   `{"userIds": "u1,u2", "groupIds": "g1"}`.
//! - `and` / `or` take an array of nested set expressions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::window::{parse_windowed, Window, WindowBase};

/// A set expression as decoded from the request. Never mutated by compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetExpr(Map<String, Value>);

impl SetExpr {
    /// Parses a set expression from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSet`] if the text isn't a JSON object.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| Error::InvalidSet(e.to_string()))?;
        SetExpr::try_from(value)
    }

    /// Returns the underlying key/value entries.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for SetExpr {
    fn from(map: Map<String, Value>) -> Self {
        SetExpr(map)
    }
}

impl TryFrom<Value> for SetExpr {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(SetExpr(map)),
            Value::Null => Ok(SetExpr::default()),
            _ => Err(Error::InvalidSet("expected an object".to_string())),
        }
    }
}

/// The role of one key in a set expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKey {
    And,
    Or,
    Condition(Condition),
}

impl SetKey {
    /// Classifies a key. Never fails: unrecognized names are [`Condition::Unknown`].
    pub fn parse(key: &str) -> Self {
        let key = key.to_lowercase();
        match key.as_str() {
            "and" => SetKey::And,
            "or" => SetKey::Or,
            name => SetKey::Condition(Condition::from_lowercase(name)),
        }
    }
}

/// A named record-selection condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Started and not yet ended.
    Actives,
    /// Ended.
    Expireds,
    /// Not yet started.
    Pendings,
    Publics,
    Privates,
    Protecteds,
    /// Owned by the given users or groups.
    Owners,
    /// Shared with the given users or groups.
    Viewers,
    /// Everything the given users or groups may see.
    Audience,
    /// No hierarchical parent.
    Roots,
    /// A dynamic condition such as `createds-7d`.
    Windowed { base: WindowBase, window: Window },
    /// Anything else. Compiles to the neutral predicate.
    Unknown,
}

impl Condition {
    /// Static condition names, in documentation order.
    pub const STATIC_NAMES: &'static [&'static str] = &[
        "actives",
        "expireds",
        "pendings",
        "publics",
        "privates",
        "protecteds",
        "owners",
        "viewers",
        "audience",
        "roots",
    ];

    /// The dynamic condition pattern, for help output.
    pub const WINDOWED_PATTERN: &'static str =
        "{createds|actives|pendings|expireds}-<N>{min|m|d|day|w|mon|mo}";

    /// Resolves a condition name (case-insensitive).
    pub fn parse(name: &str) -> Self {
        Condition::from_lowercase(&name.to_lowercase())
    }

    fn from_lowercase(name: &str) -> Self {
        match name {
            "actives" => Condition::Actives,
            "expireds" => Condition::Expireds,
            "pendings" => Condition::Pendings,
            "publics" => Condition::Publics,
            "privates" => Condition::Privates,
            "protecteds" => Condition::Protecteds,
            "owners" => Condition::Owners,
            "viewers" => Condition::Viewers,
            "audience" => Condition::Audience,
            "roots" => Condition::Roots,
            other => match parse_windowed(other) {
                Some((base, window)) => Condition::Windowed { base, window },
                None => Condition::Unknown,
            },
        }
    }
}

/// The users and groups an identity condition is asked about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserScope {
    pub user_ids: Vec<String>,
    pub group_ids: Vec<String>,
}

impl UserScope {
    /// Reads `{userIds, groupIds}` from a condition payload.
    ///
    /// Each side is a comma-separated string (or an array of strings); blank
    /// entries are dropped. Returns `None` when the payload is missing or not
    /// an object.
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        let map = value?.as_object()?;
        Some(UserScope {
            user_ids: id_list(map.get("userIds")),
            group_ids: id_list(map.get("groupIds")),
        })
    }
}

fn id_list(value: Option<&Value>) -> Vec<String> {
    let trimmed = |s: &str| Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string);
    match value {
        Some(Value::String(s)) => s.split(',').filter_map(trimmed).collect(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).filter_map(trimmed).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
