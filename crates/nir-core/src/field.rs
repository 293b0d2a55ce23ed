//! # Field Grammar
//!
//! Fixed-width layout of a NIR and one pure validator per field. The
//! validators run in a fixed order from [`crate::nir::Nir::parse`] and
//! short-circuit through `?` on the first [`Rejection`].
//!
//! ```text
//! 0   1  3  5  7   10  13 15
//! | S | YY | MM | DD | CCC | NNN | KK |
//! ```
//!
//! All slicing is on bytes. A non-ASCII byte is never a digit, so multi-byte
//! input is rejected without ever indexing inside a code point.

use std::ops::Range;

use crate::error::Rejection;
use crate::sex::Sex;

/// Total length of a NIR, in bytes (all ASCII).
pub const NIR_LENGTH: usize = 15;

/// Length of the identifying body (everything before the control key).
pub const BODY_LENGTH: usize = 13;

pub(crate) const SEX: usize = 0;
pub(crate) const YEAR: Range<usize> = 1..3;
pub(crate) const MONTH: Range<usize> = 3..5;
pub(crate) const DEPARTMENT: Range<usize> = 5..7;
pub(crate) const CITY: Range<usize> = 7..10;
pub(crate) const SERIAL: Range<usize> = 10..13;
pub(crate) const CONTROL_KEY: Range<usize> = 13..15;

/// Department code reserved for births abroad.
pub const OVERSEAS_DEPARTMENT: u8 = 99;

/// Decode a slice of ASCII decimal digits.
///
/// Empty slices, signs, whitespace and any non-digit byte yield `None`.
/// Callers only pass slices of at most three bytes, so the value fits.
pub(crate) fn digits(slice: &[u8]) -> Option<u16> {
    if slice.is_empty() {
        return None;
    }
    slice.iter().try_fold(0u16, |acc, b| {
        b.is_ascii_digit()
            .then(|| acc * 10 + u16::from(b - b'0'))
    })
}

/// Two-digit variant of [`digits`].
fn two_digits(slice: &[u8]) -> Option<u8> {
    // At most 99.
    digits(slice).map(|v| v as u8)
}

pub(crate) fn length(raw: &[u8]) -> Result<&[u8; NIR_LENGTH], Rejection> {
    raw.try_into().map_err(|_| Rejection::Length(raw.len()))
}

pub(crate) fn sex(raw: &[u8; NIR_LENGTH]) -> Result<Sex, Rejection> {
    Sex::from_ascii(raw[SEX]).ok_or(Rejection::Sex)
}

pub(crate) fn year(raw: &[u8; NIR_LENGTH]) -> Result<u8, Rejection> {
    two_digits(&raw[YEAR]).ok_or(Rejection::Year)
}

pub(crate) fn month(raw: &[u8; NIR_LENGTH]) -> Result<u8, Rejection> {
    two_digits(&raw[MONTH])
        .filter(|m| (1..=12).contains(m))
        .ok_or(Rejection::Month)
}

pub(crate) fn department(raw: &[u8; NIR_LENGTH]) -> Result<u8, Rejection> {
    two_digits(&raw[DEPARTMENT])
        .filter(|d| (1..=95).contains(d) || *d == OVERSEAS_DEPARTMENT)
        .ok_or(Rejection::Department)
}

pub(crate) fn city(raw: &[u8; NIR_LENGTH]) -> Result<u16, Rejection> {
    digits(&raw[CITY]).ok_or(Rejection::City)
}

pub(crate) fn serial(raw: &[u8; NIR_LENGTH]) -> Result<u16, Rejection> {
    digits(&raw[SERIAL]).ok_or(Rejection::Serial)
}

/// Check the control key against the key computed from `body`.
pub(crate) fn control_key(raw: &[u8; NIR_LENGTH], body: u64) -> Result<u8, Rejection> {
    let found = two_digits(&raw[CONTROL_KEY]).ok_or(Rejection::ControlKeyFormat)?;
    let expected = crate::key::control_key(body);
    if found != expected {
        return Err(Rejection::ControlKeyMismatch { found, expected });
    }
    Ok(found)
}
