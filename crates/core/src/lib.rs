// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sq-core: Shared query types for the set expression compiler
//!
//! This crate provides the predicate tree handed to the storage layer, the
//! complete filter that carries it, a reference evaluator for predicates, and
//! the clock seam used by time-window conditions.

pub mod clock;
pub mod error;
pub mod filter;
pub mod predicate;

pub use clock::{timestamp, ClockSource, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use filter::{Filter, Order};
pub use predicate::{Cond, Where};
