// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Predicates for named conditions.
//!
//! [`Conditions`] is built once per compile with the sampled `now`, so every
//! clause in one compiled filter measures time from the same instant.
//!
//! Validity is carried by two fields: `valid_from` (null until approved) and
//! `valid_until` (null for records that never expire).

use chrono::{DateTime, Utc};
use serde_json::Value;
use sq_core::{timestamp, Cond, Where};

use crate::config::FieldMap;
use crate::expr::{Condition, UserScope};
use crate::window::{Window, WindowBase};

/// Field names for one membership relation (owners or viewers).
struct Membership<'a> {
    users: &'a str,
    groups: &'a str,
    users_count: &'a str,
    groups_count: &'a str,
}

/// Builds condition predicates at a fixed instant.
#[derive(Debug, Clone)]
pub struct Conditions<'a> {
    fields: &'a FieldMap,
    now: DateTime<Utc>,
}

impl<'a> Conditions<'a> {
    pub fn new(fields: &'a FieldMap, now: DateTime<Utc>) -> Self {
        Conditions { fields, now }
    }

    /// Returns the predicate for a condition and its (optional) payload.
    pub fn resolve(&self, condition: &Condition, value: Option<&Value>) -> Where {
        match condition {
            Condition::Actives => self.actives(),
            Condition::Expireds => self.expireds(),
            Condition::Pendings => self.pendings(),
            Condition::Publics => self.visibility("public"),
            Condition::Privates => self.visibility("private"),
            Condition::Protecteds => self.visibility("protected"),
            Condition::Owners => self.owners(UserScope::from_value(value).as_ref()),
            Condition::Viewers => self.viewers(UserScope::from_value(value).as_ref()),
            Condition::Audience => self.audience(UserScope::from_value(value).as_ref()),
            Condition::Roots => Where::eq(&self.fields.parents_count, 0),
            Condition::Windowed { base, window } => self.windowed(*base, window),
            Condition::Unknown => Where::all(),
        }
    }

    /// Started before `now` and not ended. A record without an end stays active.
    pub fn actives(&self) -> Where {
        Where::and(vec![
            self.not_ended(),
            Where::and(vec![
                Where::field(&self.fields.valid_from, Cond::Neq(Value::Null)),
                Where::field(&self.fields.valid_from, Cond::Lt(self.now_value())),
            ]),
        ])
    }

    /// Ended before `now`.
    pub fn expireds(&self) -> Where {
        Where::and(vec![
            Where::field(&self.fields.valid_until, Cond::Neq(Value::Null)),
            Where::field(&self.fields.valid_until, Cond::Lt(self.now_value())),
        ])
    }

    /// Not started, or starting after `now`.
    pub fn pendings(&self) -> Where {
        Where::or(vec![
            Where::eq(&self.fields.valid_from, Value::Null),
            Where::field(&self.fields.valid_from, Cond::Gt(self.now_value())),
        ])
    }

    pub fn visibility(&self, level: &str) -> Where {
        Where::eq(&self.fields.visibility, level)
    }

    /// Records owned by the scope's users, or by its groups when not private.
    ///
    /// An empty scope selects records with no owners at all; a missing scope
    /// selects nothing.
    pub fn owners(&self, scope: Option<&UserScope>) -> Where {
        let f = self.fields;
        self.membership(
            scope,
            &Membership {
                users: &f.owner_users,
                groups: &f.owner_groups,
                users_count: &f.owner_users_count,
                groups_count: &f.owner_groups_count,
            },
        )
    }

    /// Records shared with the scope's users, or with its groups when not private.
    pub fn viewers(&self, scope: Option<&UserScope>) -> Where {
        let f = self.fields;
        self.membership(
            scope,
            &Membership {
                users: &f.viewer_users,
                groups: &f.viewer_groups,
                users_count: &f.viewer_users_count,
                groups_count: &f.viewer_groups_count,
            },
        )
    }

    /// Public live records, the scope's own records whether approved or not,
    /// and live records shared with the scope.
    pub fn audience(&self, scope: Option<&UserScope>) -> Where {
        Where::or(vec![
            Where::and(vec![self.actives(), self.visibility("public")]),
            Where::and(vec![
                self.owners(scope),
                Where::or(vec![self.actives(), self.pendings()]),
            ]),
            Where::and(vec![self.viewers(scope), self.actives()]),
        ])
    }

    /// Predicate for a dynamic condition over `[now - window, now]`.
    pub fn windowed(&self, base: WindowBase, window: &Window) -> Where {
        let Some(start) = window.start(self.now) else {
            tracing::debug!(base = base.as_str(), %window, "window start out of range");
            return Where::all();
        };
        let range = Cond::Between(Value::String(timestamp(start)), self.now_value());
        let f = self.fields;
        match base {
            WindowBase::Createds => Where::field(&f.created, range),
            WindowBase::Expireds => Where::and(vec![
                Where::field(&f.valid_until, Cond::Neq(Value::Null)),
                Where::field(&f.valid_until, range),
            ]),
            WindowBase::Actives => Where::and(vec![
                self.not_ended(),
                Where::and(vec![
                    Where::field(&f.valid_from, Cond::Neq(Value::Null)),
                    Where::field(&f.valid_from, range),
                ]),
            ]),
            WindowBase::Pendings => {
                Where::and(vec![self.pendings(), Where::field(&f.created, range)])
            }
        }
    }

    fn not_ended(&self) -> Where {
        Where::or(vec![
            Where::eq(&self.fields.valid_until, Value::Null),
            Where::field(&self.fields.valid_until, Cond::Gt(self.now_value())),
        ])
    }

    fn membership(&self, scope: Option<&UserScope>, m: &Membership<'_>) -> Where {
        let Some(scope) = scope else {
            return Where::never(m.users);
        };
        let users = || Where::field(m.users, Cond::Inq(ids(&scope.user_ids)));
        let groups = || {
            Where::and(vec![
                Where::field(m.groups, Cond::Inq(ids(&scope.group_ids))),
                Where::field(&self.fields.visibility, Cond::Neq(Value::from("private"))),
            ])
        };
        match (scope.user_ids.is_empty(), scope.group_ids.is_empty()) {
            (false, false) => Where::or(vec![users(), groups()]),
            (false, true) => users(),
            (true, false) => groups(),
            (true, true) => Where::and(vec![Where::eq(m.users_count, 0), Where::eq(m.groups_count, 0)]),
        }
    }

    fn now_value(&self) -> Value {
        Value::String(timestamp(self.now))
    }
}

fn ids(list: &[String]) -> Vec<Value> {
    list.iter().cloned().map(Value::String).collect()
}

#[cfg(test)]
#[path = "conditions_tests.rs"]
mod tests;
