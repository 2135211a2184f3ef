// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured query predicates ("where" clauses).
//!
//! A predicate is a tree of field comparisons joined by `and` / `or`. This is
//! the shape the storage layer executes. Its JSON form is:
//!
//! ```text
//! {}                                   # matches every record
//! {"_visibility": "public"}            # equality
//! {"_validUntilDateTime": null}        # field is null or missing
//! {"_ownerUsers": {"inq": ["u1"]}}     # operator object
//! {"and": [{...}, {...}]}              # conjunction
//! {"or": [{...}, {...}]}               # disjunction
//! ```
//!
//! # Operators
//!
//! `eq`, `neq`, `gt`, `gte`, `lt`, `lte`, `between`, `inq`, `nin`, `like`,
//! `nlike`, `regexp`, `exists`. Anything else is carried through untouched.

mod eval;
mod expr;
mod json;

pub use expr::{Cond, Where};
