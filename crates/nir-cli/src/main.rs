//! # nir CLI entry point
//!
//! Parses command-line arguments, sets up logging, and dispatches to the
//! subcommand handlers. Logs go to stderr so stdout stays machine-readable.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nir_cli::check::{run_check, CheckArgs};
use nir_cli::inspect::{run_inspect, InspectArgs};
use nir_cli::key::{run_key, KeyArgs};
use nir_cli::EXIT_ERROR;

/// French social-security number (NIR) toolkit.
///
/// Validates numbers, decodes their fields, and computes control keys.
#[derive(Parser, Debug)]
#[command(name = "nir", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate numbers given as arguments or read from stdin.
    Check(CheckArgs),

    /// Decode one number and print its fields.
    Inspect(InspectArgs),

    /// Compute the control key for a 13-digit body.
    Key(KeyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("nir CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Inspect(args) => run_inspect(&args),
        Commands::Key(args) => run_key(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
