// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! setql - the `sq` command-line front end.
//!
//! Wraps [`sq_sets::Compiler`] for shell use: reads a set expression and an
//! optional caller filter, compiles them, and prints the merged filter as
//! JSON.

mod cli;
mod commands;
pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, CompileArgs};
pub use error::{Error, Result};

/// Runs a parsed command line.
///
/// # Errors
///
/// Returns an error if the config can't be loaded or the command fails.
pub fn run(cli: Cli) -> Result<()> {
    let config = config::resolve(cli.config.as_deref())?;
    match cli.command {
        Command::Compile(args) => commands::compile::run(config, &args),
        Command::Conditions => commands::conditions::run(),
    }
}
