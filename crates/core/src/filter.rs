// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The complete query intent handed to the storage layer.
//!
//! A filter is an optional predicate plus sort, pagination, projection and
//! related-record inclusion. A decoded `where` is held as [`Where::Raw`], and
//! properties this type doesn't name are kept in [`Filter::extra`], so both
//! pass through compilation untouched.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::predicate::Where;

/// A storage-layer filter (`where`, `fields`, `order`, `limit`, `skip`,
/// `offset`, `include`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Record predicate (`where`).
    #[serde(
        rename = "where",
        default,
        deserialize_with = "raw_predicate",
        skip_serializing_if = "Option::is_none"
    )]
    pub predicate: Option<Where>,
    /// Field projection, as a list of names or a `{name: bool}` object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
    /// Sort order, e.g. `"name ASC"` or `["name ASC", "_createdDateTime DESC"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Related-record inclusion directives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Value>,
    /// Any other caller-supplied property.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Sort order: a single clause or a list of clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Order {
    One(String),
    Many(Vec<String>),
}

impl Filter {
    /// Parses a filter from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilter`] if the text isn't a valid filter object.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidFilter(e.to_string()))
    }

    /// Returns this filter with its predicate replaced.
    pub fn with_predicate(mut self, predicate: Where) -> Self {
        self.predicate = Some(predicate);
        self
    }
}

fn raw_predicate<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Where>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value @ Value::Object(_)) => Ok(Some(Where::Raw(value))),
        Some(_) => Err(de::Error::custom("'where' must be an object")),
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
