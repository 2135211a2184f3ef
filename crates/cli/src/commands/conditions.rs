// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sq_sets::Condition;

use crate::error::Result;

pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

pub(crate) fn render() -> String {
    let mut out = String::from("Conditions:\n");
    for name in Condition::STATIC_NAMES {
        out.push_str(&format!("  {}\n", name));
    }
    out.push_str("\nTime windows:\n");
    out.push_str(&format!("  {}\n", Condition::WINDOWED_PATTERN));
    out.push_str("\nCombinators:\n  and\n  or\n");
    out
}

#[cfg(test)]
#[path = "conditions_tests.rs"]
mod tests;
