//! # Nir: the Validated Record
//!
//! [`Nir`] is only ever produced by [`Nir::parse`]. Every other way of
//! obtaining one (`FromStr`, `TryFrom<&str>`, serde, [`Nir::assemble`])
//! routes through that single parser, so there is one definition of
//! validity in the crate.
//!
//! Rejections are logged at DEBUG with the failed rule; the input itself is
//! only logged at TRACE.

use serde::{Deserialize, Serialize};

use crate::error::{MalformedNir, Rejection};
use crate::field::{self, OVERSEAS_DEPARTMENT};
use crate::sex::Sex;

/// A French social-security number whose every field and control key have
/// been checked.
///
/// Fields are private and there are no setters: holding a `Nir` is proof
/// that the string it came from was valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nir {
    sex: Sex,
    year: u8,
    month: u8,
    department: u8,
    city: u16,
    serial: u16,
    control_key: u8,
}

impl Nir {
    /// Parse a raw string into a validated NIR.
    ///
    /// Returns `None` for any input that breaks a length, field, or
    /// checksum rule. Never panics.
    pub fn parse(raw: &str) -> Option<Self> {
        match Self::try_parse(raw) {
            Ok(nir) => Some(nir),
            Err(rejection) => {
                tracing::debug!(reason = %rejection, "rejected NIR");
                tracing::trace!(input = raw, "rejected NIR input");
                None
            }
        }
    }

    /// `true` when [`Nir::parse`] would return `Some`.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    /// Build a NIR from its identifying fields, computing the control key.
    ///
    /// The body and key are rendered to their fixed-width form and fed to
    /// [`Nir::parse`], so the same rules apply. Out-of-range values
    /// (including any value too wide for its slot) yield `None`.
    pub fn assemble(
        sex: Sex,
        year: u8,
        month: u8,
        department: u8,
        city: u16,
        serial: u16,
    ) -> Option<Self> {
        // A wider value would carry into the neighbouring field of the body.
        if year > 99 || month > 99 || department > 99 || city > 999 || serial > 999 {
            return None;
        }
        let body = body_of(sex, year, month, department, city, serial);
        let key = crate::key::control_key(body);
        Self::parse(&format!("{body:013}{key:02}"))
    }

    fn try_parse(raw: &str) -> Result<Self, Rejection> {
        let raw = field::length(raw.as_bytes())?;
        let sex = field::sex(raw)?;
        let year = field::year(raw)?;
        let month = field::month(raw)?;
        let department = field::department(raw)?;
        let city = field::city(raw)?;
        let serial = field::serial(raw)?;
        let body = body_of(sex, year, month, department, city, serial);
        let control_key = field::control_key(raw, body)?;
        Ok(Self {
            sex,
            year,
            month,
            department,
            city,
            serial,
            control_key,
        })
    }

    /// Sex encoded in the first digit.
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Two-digit year of birth, 0-99.
    pub fn year(&self) -> u8 {
        self.year
    }

    /// Month of birth, 1-12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Department of birth: 1-95, or 99 for births abroad.
    pub fn department(&self) -> u8 {
        self.department
    }

    /// City of birth code within the department, 0-999.
    pub fn city(&self) -> u16 {
        self.city
    }

    /// Birth registration serial within the month and city, 0-999.
    pub fn serial(&self) -> u16 {
        self.serial
    }

    /// Two-digit modulo-97 control key, 0-96.
    pub fn control_key(&self) -> u8 {
        self.control_key
    }

    /// Whether the holder was born abroad (department 99).
    pub fn is_overseas(&self) -> bool {
        self.department == OVERSEAS_DEPARTMENT
    }

    /// The 13-digit identifying body the control key is computed over.
    pub fn body(&self) -> u64 {
        body_of(
            self.sex,
            self.year,
            self.month,
            self.department,
            self.city,
            self.serial,
        )
    }
}

/// Concatenate the decoded fields into the 13-digit integer N.
fn body_of(sex: Sex, year: u8, month: u8, department: u8, city: u16, serial: u16) -> u64 {
    let mut n = u64::from(sex.digit());
    n = n * 100 + u64::from(year);
    n = n * 100 + u64::from(month);
    n = n * 100 + u64::from(department);
    n = n * 1000 + u64::from(city);
    n * 1000 + u64::from(serial)
}

/// Parse a raw string into a validated NIR. See [`Nir::parse`].
pub fn parse(raw: &str) -> Option<Nir> {
    Nir::parse(raw)
}

/// `parse(raw).is_some()`.
pub fn is_valid(raw: &str) -> bool {
    Nir::is_valid(raw)
}

/// Canonical 15-digit rendering. Parsing it yields an equal `Nir`.
impl std::fmt::Display for Nir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{:02}{:02}{:02}{:03}{:03}{:02}",
            self.sex.digit(),
            self.year,
            self.month,
            self.department,
            self.city,
            self.serial,
            self.control_key
        )
    }
}

impl std::str::FromStr for Nir {
    type Err = MalformedNir;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(MalformedNir)
    }
}

impl TryFrom<&str> for Nir {
    type Error = MalformedNir;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Nir {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserializes from a string and validates through [`Nir::parse`], so a
/// malformed value is rejected at deserialization time.
impl<'de> Deserialize<'de> for Nir {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
