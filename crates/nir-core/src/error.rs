//! # Error Types
//!
//! The public boundary has exactly one failure outcome: the input is not a
//! valid NIR. [`MalformedNir`] carries no sub-kind, so callers cannot branch
//! on which rule rejected the input.
//!
//! The parse pipeline internally tracks a [`Rejection`] naming the failed
//! rule. It is crate-private and only surfaces as a DEBUG `tracing` event.

use thiserror::Error;

/// The input string is not a valid NIR.
///
/// Returned by the trait-based entry points (`FromStr`, `TryFrom<&str>`,
/// serde `Deserialize`). [`crate::parse`] returns `Option` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("malformed NIR")]
pub struct MalformedNir;

/// The rule that rejected an input. Diagnostic only.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// Byte length is not 15.
    #[error("expected 15 characters, got {0} bytes")]
    Length(usize),

    /// Sex digit is not `1` or `2`.
    #[error("sex digit must be 1 or 2")]
    Sex,

    /// Year slice is not two ASCII digits.
    #[error("year is not numeric")]
    Year,

    /// Month slice is not numeric or outside 1..=12.
    #[error("month must be 01-12")]
    Month,

    /// Department slice is not numeric or outside 1..=95 and not 99.
    #[error("department must be 01-95 or 99")]
    Department,

    /// City slice is not three ASCII digits.
    #[error("city is not numeric")]
    City,

    /// Serial slice is not three ASCII digits.
    #[error("serial is not numeric")]
    Serial,

    /// Control key slice is not two ASCII digits.
    #[error("control key is not numeric")]
    ControlKeyFormat,

    /// Control key does not match the modulo-97 checksum of the body.
    #[error("control key {found:02} does not match expected {expected:02}")]
    ControlKeyMismatch {
        /// Key present in the input.
        found: u8,
        /// Key computed from the 13-digit body.
        expected: u8,
    },
}
