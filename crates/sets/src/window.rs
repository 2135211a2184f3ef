// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time windows for dynamic conditions.
//!
//! A dynamic condition is a base name with a duration suffix:
//!
//! ```text
//! createds-7d       # created in the last 7 days
//! actives-90min     # became active in the last 90 minutes
//! expireds-2w       # expired in the last 2 weeks
//! pendings-3mo      # created in the last 3 calendar months, not yet active
//! ```
//!
//! Units: `min` (or `m`), `d` (or `day`), `w`, `mon` (or `mo`). Months are
//! calendar months, not 30-day blocks.

use chrono::{DateTime, Duration, Months, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Hard-coded pattern, verified by the window tests.
static WINDOWED_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^(createds|actives|pendings|expireds)-(\d+)(min|m|d|day|w|mon|mo)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Conditions that accept a duration suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowBase {
    /// Creation timestamp inside the window.
    Createds,
    /// Active, and became valid inside the window.
    Actives,
    /// Not yet valid, and created inside the window.
    Pendings,
    /// Validity ended inside the window.
    Expireds,
}

impl WindowBase {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowBase::Createds => "createds",
            WindowBase::Actives => "actives",
            WindowBase::Pendings => "pendings",
            WindowBase::Expireds => "expireds",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "createds" => Some(WindowBase::Createds),
            "actives" => Some(WindowBase::Actives),
            "pendings" => Some(WindowBase::Pendings),
            "expireds" => Some(WindowBase::Expireds),
            _ => None,
        }
    }
}

/// Units a window can be measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowUnit {
    Minute,
    Day,
    Week,
    /// Calendar month.
    Month,
}

impl WindowUnit {
    /// Returns the canonical suffix (`min`, `d`, `w`, `mon`).
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowUnit::Minute => "min",
            WindowUnit::Day => "d",
            WindowUnit::Week => "w",
            WindowUnit::Month => "mon",
        }
    }

    /// Parses a lowercase unit suffix, accepting the `m`, `day` and `mo` synonyms.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "min" | "m" => Some(WindowUnit::Minute),
            "d" | "day" => Some(WindowUnit::Day),
            "w" => Some(WindowUnit::Week),
            "mon" | "mo" => Some(WindowUnit::Month),
            _ => None,
        }
    }
}

/// A positive amount of some unit, counted back from `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub amount: u32,
    pub unit: WindowUnit,
}

impl Window {
    /// Creates a window. Returns `None` for a zero amount.
    pub fn new(amount: u32, unit: WindowUnit) -> Option<Self> {
        (amount > 0).then_some(Window { amount, unit })
    }

    /// Returns the instant the window opens, `now` minus the window length.
    ///
    /// Months subtract from the month-of-year; a day missing from the target
    /// month clamps to that month's last day (Mar 31 minus 1 month is Feb 28).
    /// Returns `None` if the result is out of range.
    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let amount = i64::from(self.amount);
        match self.unit {
            WindowUnit::Minute => now.checked_sub_signed(Duration::try_minutes(amount)?),
            WindowUnit::Day => now.checked_sub_signed(Duration::try_days(amount)?),
            WindowUnit::Week => now.checked_sub_signed(Duration::try_weeks(amount)?),
            WindowUnit::Month => now.checked_sub_months(Months::new(self.amount)),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.as_str())
    }
}

/// Parses a dynamic condition name such as `createds-7d`.
///
/// The name must already be lowercase. Returns `None` when it doesn't follow
/// the pattern or the amount is zero or too large.
pub fn parse_windowed(name: &str) -> Option<(WindowBase, Window)> {
    let caps = WINDOWED_RE.captures(name)?;
    let base = WindowBase::parse(caps.get(1)?.as_str())?;
    let unit = WindowUnit::parse(caps.get(3)?.as_str())?;
    let amount = caps.get(2)?.as_str();
    let window = amount.parse::<u32>().ok().and_then(|n| Window::new(n, unit));
    if window.is_none() {
        tracing::debug!(name, amount, "rejecting window amount");
    }
    Some((base, window?))
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
