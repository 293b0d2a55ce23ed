//! # nir-core — French Social-Security Number Parser
//!
//! Turns a raw string into a [`Nir`] or nothing. A `Nir` value is proof of
//! validity: it can only be obtained by passing every rule of the parser.
//!
//! ## Grammar
//!
//! 15 ASCII digits, no separators:
//!
//! | Offset | Field | Rule |
//! |--------|-------|------|
//! | 0 | sex | `1` or `2` |
//! | 1..3 | year | any two digits |
//! | 3..5 | month | 01-12 |
//! | 5..7 | department | 01-95 or 99 |
//! | 7..10 | city | any three digits |
//! | 10..13 | serial | any three digits |
//! | 13..15 | control key | `97 - (N mod 97)`, 97 written as 00 |
//!
//! N is the 13-digit body formed by the first six fields.
//!
//! ## Crate Policy
//!
//! - One parser. [`is_valid`], `FromStr`, serde and [`Nir::assemble`] all
//!   delegate to [`parse`].
//! - The public failure outcome carries no detail about which rule failed.
//! - No `unsafe`, no `panic!()` or `.unwrap()` outside tests. `parse` is
//!   total over `&str`.

pub mod error;
pub mod field;
pub mod key;
pub mod nir;
pub mod sex;

// Re-export primary types for ergonomic imports.
pub use error::MalformedNir;
pub use field::{BODY_LENGTH, NIR_LENGTH, OVERSEAS_DEPARTMENT};
pub use key::{control_key, CONTROL_KEY_MODULUS, MAX_BODY};
pub use nir::{is_valid, parse, Nir};
pub use sex::Sex;
