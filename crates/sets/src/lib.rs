// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sq-sets: Compiles set expressions into storage filters
//!
//! A set expression names predefined record selections and combines them:
//!
//! ```text
//! {"actives": ""}                                   # live records
//! {"publics": "", "roots": ""}                      # implicit and
//! {"or": [{"owners": {"userIds": "u1"}}, {"publics": ""}]}
//! {"createds-7d": ""}                               # created in the last 7 days
//! ```
//!
//! # Main Components
//!
//! - [`Compiler`] - Walks a [`SetExpr`] and merges the result into a [`Filter`](sq_core::Filter)
//! - [`Conditions`] - Builds the predicate for one named condition at a fixed instant
//! - [`Window`] - Parsed `-<amount><unit>` suffixes of dynamic conditions
//! - [`CompilerConfig`] - Field names and the nesting limit, loaded from TOML
//!
//! Compilation never fails. Unknown names compile to the neutral predicate,
//! identity conditions without an identity compile to a predicate matching
//! nothing, and combinators nested past the limit match nothing.
//!
//! ```rust,ignore
//! use sq_sets::{Compiler, CompilerConfig, SetExpr};
//!
//! let compiler = Compiler::new(CompilerConfig::default());
//! let set = SetExpr::parse(r#"{"actives": "", "publics": ""}"#)?;
//! let filter = compiler.compile(&set, None);
//! ```

pub mod compile;
pub mod conditions;
pub mod config;
pub mod error;
pub mod expr;
pub mod merge;
pub mod window;

pub use compile::{Compiled, Compiler};
pub use conditions::Conditions;
pub use config::{CompilerConfig, FieldMap, DEFAULT_MAX_DEPTH};
pub use error::{Error, Result};
pub use expr::{Condition, SetExpr, SetKey, UserScope};
pub use merge::merge;
pub use window::{Window, WindowBase, WindowUnit};
