// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile named-set expressions into storage query filters")]
#[command(
    long_about = "Compile named-set expressions into storage query filters.\n\n\
    A set expression names conditions such as actives, owners or createds-7d, \
    combined with and/or. The compiled predicate is merged into an optional \
    caller filter and printed as JSON."
)]
pub struct Cli {
    /// Read compiler settings from <path>
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a set expression and merge it into a filter
    #[command(after_help = "Examples:\n  \
        sq compile --set '{\"actives\": \"\"}'\n  \
        sq compile --set '{\"or\": [{\"publics\": \"\"}, {\"createds-7d\": \"\"}]}' --filter '{\"limit\": 10}'\n  \
        echo '{\"pendings\": \"\"}' | sq compile --now 2026-10-14T09:00:00Z")]
    Compile(CompileArgs),

    /// List the condition names a set expression may use
    Conditions,
}

#[derive(Args, Debug, Default)]
pub struct CompileArgs {
    /// Set expression as JSON (read from stdin when neither --set nor --set-file is given)
    #[arg(long, value_name = "json", conflicts_with = "set_file")]
    pub set: Option<String>,

    /// Read the set expression from <path>
    #[arg(long, value_name = "path")]
    pub set_file: Option<PathBuf>,

    /// Caller filter as JSON
    #[arg(long, value_name = "json")]
    pub filter: Option<String>,

    /// Compile as of this RFC 3339 instant instead of the current time
    #[arg(long, value_name = "time")]
    pub now: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
