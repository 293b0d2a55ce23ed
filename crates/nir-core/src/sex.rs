//! # Sex
//!
//! The first digit of a NIR: `1` for male, `2` for female. No other value
//! is accepted.

use serde::{Deserialize, Serialize};

/// Sex as encoded in the first position of a NIR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Encoded as `1`.
    Male = 1,
    /// Encoded as `2`.
    Female = 2,
}

impl Sex {
    /// Both variants, in digit order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// The digit this sex is encoded as (1 or 2).
    pub fn digit(self) -> u8 {
        self as u8
    }

    /// Decode from the raw ASCII byte at position 0.
    pub(crate) fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'1' => Some(Self::Male),
            b'2' => Some(Self::Female),
            _ => None,
        }
    }

    /// Lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
