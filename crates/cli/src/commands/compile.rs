// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::{self, Read};

use chrono::{DateTime, Utc};
use sq_core::Filter;
use sq_sets::{Compiler, CompilerConfig, SetExpr};

use crate::cli::CompileArgs;
use crate::error::{Error, Result};

pub fn run(config: CompilerConfig, args: &CompileArgs) -> Result<()> {
    let set = read_set(args, &mut io::stdin().lock())?;
    let filter = args.filter.as_deref().map(Filter::parse).transpose()?;
    let now = args.now.as_deref().map(parse_now).transpose()?;
    let output = render(config, &set, filter.as_ref(), now, args.pretty)?;
    println!("{}", output);
    Ok(())
}

/// Reads the set expression from `--set`, `--set-file`, or `stdin`, in that order.
pub(crate) fn read_set(args: &CompileArgs, stdin: &mut impl Read) -> Result<SetExpr> {
    let text = match (&args.set, &args.set_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|source| Error::Read { target: path.display().to_string(), source })?,
        (None, None) => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .map_err(|source| Error::Read { target: "stdin".to_string(), source })?;
            text
        }
    };
    if text.trim().is_empty() {
        return Err(Error::NoSetInput);
    }
    Ok(SetExpr::parse(&text)?)
}

pub(crate) fn parse_now(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTime(format!("{}: {}", text, e)))
}

/// Compiles and serializes the merged filter.
pub(crate) fn render(
    config: CompilerConfig,
    set: &SetExpr,
    filter: Option<&Filter>,
    now: Option<DateTime<Utc>>,
    pretty: bool,
) -> Result<String> {
    let compiler = Compiler::new(config);
    let merged = match now {
        Some(at) => compiler.compile_at(set, filter, at),
        None => compiler.compile(set, filter),
    };
    let output =
        if pretty { serde_json::to_string_pretty(&merged)? } else { serde_json::to_string(&merged)? };
    Ok(output)
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
