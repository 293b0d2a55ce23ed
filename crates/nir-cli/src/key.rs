//! # Key Subcommand
//!
//! Compute the control key for a 13-digit body and print the complete
//! number. The completed number is checked by the parser, so a body whose
//! fields break a rule (month 13, department 96, ...) is refused.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Args;
use nir_core::{Nir, BODY_LENGTH};

use crate::{EXIT_MALFORMED, EXIT_VALID};

/// Arguments for the key subcommand.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// The first 13 digits of a NIR.
    pub body: String,

    /// Print only the two-digit key.
    #[arg(long)]
    pub key_only: bool,
}

/// Execute the key subcommand against stdout and stderr.
pub fn run_key(args: &KeyArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    complete(args, &mut stdout.lock(), &mut stderr.lock())
}

/// Complete `args.body` with its control key.
///
/// The result goes to `out`; a body whose fields break a rule is reported
/// on `err` so `out` only ever carries a number.
pub fn complete(args: &KeyArgs, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let body = args.body.as_str();
    if body.len() != BODY_LENGTH || !body.bytes().all(|b| b.is_ascii_digit()) {
        bail!("body must be exactly {BODY_LENGTH} ASCII digits, got {body:?}");
    }
    let value: u64 = body.parse().context("body is not a decimal number")?;
    let key = nir_core::control_key(value);
    let candidate = format!("{body}{key:02}");

    let Some(nir) = Nir::parse(&candidate) else {
        tracing::warn!("body does not form a valid NIR");
        tracing::trace!(body, "rejected body");
        writeln!(err, "{body}: fields do not form a valid NIR")
            .context("failed to write output")?;
        return Ok(EXIT_MALFORMED);
    };

    let written = if args.key_only {
        writeln!(out, "{:02}", nir.control_key())
    } else {
        writeln!(out, "{nir}")
    };
    written.context("failed to write output")?;
    Ok(EXIT_VALID)
}
