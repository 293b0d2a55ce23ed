//! # Inspect Subcommand
//!
//! Decode one number and print its fields.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use nir_core::Nir;

use crate::{EXIT_MALFORMED, EXIT_VALID};

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The number to decode.
    pub input: String,

    /// Emit a JSON object instead of a text table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the inspect subcommand against stdout and stderr.
pub fn run_inspect(args: &InspectArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    inspect(args, &mut stdout.lock(), &mut stderr.lock())
}

/// Decode `args.input` and write its fields to `out`.
///
/// A malformed input becomes `{"input": ..., "valid": false}` on `out` in
/// JSON mode, and a plain diagnostic on `err` otherwise.
pub fn inspect(args: &InspectArgs, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let Some(nir) = Nir::parse(&args.input) else {
        if args.json {
            let line = serde_json::json!({ "input": args.input, "valid": false });
            writeln!(out, "{line}").context("failed to write output")?;
        } else {
            writeln!(err, "{}: malformed NIR", args.input).context("failed to write output")?;
        }
        return Ok(EXIT_MALFORMED);
    };

    if args.json {
        writeln!(out, "{}", to_json(&nir)).context("failed to write output")?;
    } else {
        write_table(&nir, out).context("failed to write output")?;
    }
    Ok(EXIT_VALID)
}

/// Field-by-field JSON view of a NIR.
pub fn to_json(nir: &Nir) -> serde_json::Value {
    serde_json::json!({
        "nir": nir,
        "sex": nir.sex(),
        "year": nir.year(),
        "month": nir.month(),
        "department": nir.department(),
        "city": nir.city(),
        "serial": nir.serial(),
        "control_key": nir.control_key(),
        "overseas": nir.is_overseas(),
        "valid": true,
    })
}

fn write_table(nir: &Nir, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "  {:<12} {}", "nir", nir)?;
    writeln!(out, "  {:<12} {}", "sex", nir.sex())?;
    writeln!(out, "  {:<12} {:02}", "year", nir.year())?;
    writeln!(out, "  {:<12} {:02}", "month", nir.month())?;
    writeln!(out, "  {:<12} {:02}", "department", nir.department())?;
    writeln!(out, "  {:<12} {:03}", "city", nir.city())?;
    writeln!(out, "  {:<12} {:03}", "serial", nir.serial())?;
    writeln!(out, "  {:<12} {:02}", "control key", nir.control_key())?;
    if nir.is_overseas() {
        writeln!(out, "  born abroad")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str, json: bool) -> InspectArgs {
        InspectArgs {
            input: input.to_string(),
            json,
        }
    }

    fn run(input: &str, json: bool) -> (u8, Vec<u8>, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = inspect(&args(input, json), &mut out, &mut err).unwrap();
        (code, out, String::from_utf8(err).unwrap())
    }

    #[test]
    fn json_fields() {
        let (code, out, _) = run("223115935012322", true);
        assert_eq!(code, EXIT_VALID);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["nir"], "223115935012322");
        assert_eq!(value["sex"], "female");
        assert_eq!(value["year"], 23);
        assert_eq!(value["month"], 11);
        assert_eq!(value["department"], 59);
        assert_eq!(value["city"], 350);
        assert_eq!(value["serial"], 123);
        assert_eq!(value["control_key"], 22);
        assert_eq!(value["overseas"], false);
        assert_eq!(value["valid"], true);
    }

    #[test]
    fn table_zero_pads() {
        let (_, out, _) = run("100010100003600", false);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("sex          male"));
        assert!(text.contains("serial       036"));
        assert!(text.contains("control key  00"));
        assert!(!text.contains("born abroad"));
    }

    #[test]
    fn table_marks_overseas() {
        let (_, out, _) = run("299019912345680", false);
        assert!(String::from_utf8(out).unwrap().contains("born abroad"));
    }

    #[test]
    fn malformed_exits_one() {
        let (code, out, err) = run("223115935012321", true);
        assert_eq!(code, EXIT_MALFORMED);
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["input"], "223115935012321");
        assert_eq!(value["valid"], false);
    }

    #[test]
    fn malformed_text_goes_to_stderr() {
        let (code, out, err) = run("223115935012321", false);
        assert_eq!(code, EXIT_MALFORMED);
        assert!(out.is_empty());
        assert_eq!(err, "223115935012321: malformed NIR\n");
    }
}
