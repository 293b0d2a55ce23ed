//! # nir-cli — Command-Line Interface for the NIR Parser
//!
//! Thin host around [`nir_core`]. Every decision about validity is made by
//! `nir_core::parse`; handlers here only read input and render results.
//!
//! ## Subcommands
//!
//! - `nir check`: validate numbers from arguments or stdin
//! - `nir inspect`: print the decoded fields of one number
//! - `nir key`: compute the control key for a 13-digit body
//!
//! ## Exit Codes
//!
//! - `0`: every input was valid
//! - `1`: at least one input was malformed
//! - `2`: usage or I/O error

pub mod check;
pub mod inspect;
pub mod key;

/// Exit code when every input is valid.
pub const EXIT_VALID: u8 = 0;

/// Exit code when at least one input is malformed.
pub const EXIT_MALFORMED: u8 = 1;

/// Exit code for usage and I/O failures.
pub const EXIT_ERROR: u8 = 2;
