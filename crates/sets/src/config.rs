// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiler configuration.
//!
//! Stored as TOML, every key optional:
//!
//! ```toml
//! max_depth = 32
//!
//! [fields]
//! created = "_createdDateTime"
//! valid_from = "_validFromDateTime"
//! valid_until = "_validUntilDateTime"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Default limit on `and` / `or` nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Settings that shape compiled predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Maximum number of nested `and` / `or` levels. A combinator deeper than
    /// this compiles to a predicate that matches nothing.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Record field names used by the conditions.
    #[serde(default)]
    pub fields: FieldMap,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig { max_depth: DEFAULT_MAX_DEPTH, fields: FieldMap::default() }
    }
}

/// Names of the record fields conditions compare against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldMap {
    /// Record identifier, used for predicates that must match nothing.
    pub id: String,
    /// Creation timestamp.
    pub created: String,
    /// Start of validity; null until the record is approved.
    pub valid_from: String,
    /// End of validity; null means the record never expires.
    pub valid_until: String,
    /// Visibility: `public`, `protected` or `private`.
    pub visibility: String,
    pub owner_users: String,
    pub owner_groups: String,
    pub owner_users_count: String,
    pub owner_groups_count: String,
    pub viewer_users: String,
    pub viewer_groups: String,
    pub viewer_users_count: String,
    pub viewer_groups_count: String,
    /// Number of hierarchical parents.
    pub parents_count: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        FieldMap {
            id: "_id".to_string(),
            created: "_createdDateTime".to_string(),
            valid_from: "_validFromDateTime".to_string(),
            valid_until: "_validUntilDateTime".to_string(),
            visibility: "_visibility".to_string(),
            owner_users: "_ownerUsers".to_string(),
            owner_groups: "_ownerGroups".to_string(),
            owner_users_count: "_ownerUsersCount".to_string(),
            owner_groups_count: "_ownerGroupsCount".to_string(),
            viewer_users: "_viewerUsers".to_string(),
            viewer_groups: "_viewerGroups".to_string(),
            viewer_users_count: "_viewerUsersCount".to_string(),
            viewer_groups_count: "_viewerGroupsCount".to_string(),
            parents_count: "_parentsCount".to_string(),
        }
    }
}

impl CompilerConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text isn't valid TOML, names an
    /// unknown field key, or sets `max_depth` to 0.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: CompilerConfig = toml::from_str(text)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
