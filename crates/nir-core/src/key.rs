//! # Control Key
//!
//! The last two digits of a NIR are a checksum over the 13-digit body N
//! (sex, year, month, department, city, serial concatenated):
//!
//! ```text
//! key = 97 - (N mod 97)      with 97 written as 00
//! ```
//!
//! The result is always in `0..=96`, so a key slice of `97`, `98` or `99`
//! can never match.
//!
//! Overseas numbers whose department or city carry letter substitutions are
//! out of scope; the body here is always purely decimal.

/// Modulus of the control-key checksum.
pub const CONTROL_KEY_MODULUS: u64 = 97;

/// Largest value a 13-digit body can take.
pub const MAX_BODY: u64 = 9_999_999_999_999;

/// Compute the control key for a 13-digit body.
pub fn control_key(body: u64) -> u8 {
    let key = CONTROL_KEY_MODULUS - body % CONTROL_KEY_MODULUS;
    // key is in 1..=97; fold 97 onto 0.
    (key % CONTROL_KEY_MODULUS) as u8
}
