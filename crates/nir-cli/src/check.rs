//! # Check Subcommand
//!
//! Batch validation. Numbers come from the command line, or one per line
//! on stdin when none are given.
//!
//! ```bash
//! nir check 223115935012322 2230
//! cat numbers.txt | nir check --json
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::{EXIT_MALFORMED, EXIT_VALID};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Numbers to validate. Reads stdin, one per line, when omitted.
    pub inputs: Vec<String>,

    /// Emit one JSON object per input instead of tab-separated text.
    #[arg(long)]
    pub json: bool,

    /// Print nothing; report only through the exit code.
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,
}

/// Execute the check subcommand against stdin/stdout.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.inputs.is_empty() {
        let stdin = std::io::stdin();
        let lines = read_lines(stdin.lock())?;
        check_all(&lines, args, &mut out)
    } else {
        check_all(&args.inputs, args, &mut out)
    }
}

/// Collect input lines, dropping blank lines.
///
/// `BufRead::lines` already removes one `\n` or `\r\n` terminator; any
/// other whitespace stays part of the input.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read input line")?;
        if !line.is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Validate every input and write one result line each.
pub fn check_all(inputs: &[String], args: &CheckArgs, out: &mut impl Write) -> Result<u8> {
    let mut malformed = 0usize;
    for input in inputs {
        let valid = nir_core::is_valid(input);
        if !valid {
            malformed += 1;
        }
        if args.quiet {
            continue;
        }
        if args.json {
            let line = serde_json::json!({ "input": input, "valid": valid });
            writeln!(out, "{line}").context("failed to write output")?;
        } else {
            let verdict = if valid { "valid" } else { "invalid" };
            writeln!(out, "{input}\t{verdict}").context("failed to write output")?;
        }
    }

    tracing::info!(total = inputs.len(), malformed, "check complete");

    Ok(if malformed == 0 {
        EXIT_VALID
    } else {
        EXIT_MALFORMED
    })
}
