//! Print job input types with smart constructors.
//!
//! A `PrintJobInput` can only be built from in-range values, so the engine
//! never has to re-check them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{Field, ValidationError};

/// Number of sheets in the run, 1..=1_000_000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest accepted run.
    pub const MIN: u32 = 1;
    /// Largest accepted run.
    pub const MAX: u32 = 1_000_000;

    /// Smart constructor: rejects values outside `MIN..=MAX`.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        check_range(Field::Quantity, i64::from(value), Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    /// Parse field text as entered by the user.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let value = parse_integer(Field::Quantity, text)?;
        check_range(Field::Quantity, value, Self::MIN, Self::MAX)?;
        // In range, so it fits.
        Ok(Self(value as u32))
    }

    /// Number of sheets.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Share of the printed area covered by ink, 1..=100 percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coverage(u32);

impl Coverage {
    /// Lowest accepted percentage.
    pub const MIN: u32 = 1;
    /// Highest accepted percentage.
    pub const MAX: u32 = 100;

    /// Smart constructor: rejects values outside `MIN..=MAX`.
    pub fn new(percent: u32) -> Result<Self, ValidationError> {
        check_range(Field::Coverage, i64::from(percent), Self::MIN, Self::MAX)?;
        Ok(Self(percent))
    }

    /// Parse field text as entered by the user.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let value = parse_integer(Field::Coverage, text)?;
        check_range(Field::Coverage, value, Self::MIN, Self::MAX)?;
        Ok(Self(value as u32))
    }

    /// Coverage in percent.
    pub fn percent(self) -> u32 {
        self.0
    }
}

/// Supported paper formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperFormat {
    /// 297 x 420 mm.
    #[serde(alias = "a3")]
    A3,
    /// 210 x 297 mm.
    #[serde(alias = "a4")]
    A4,
}

impl PaperFormat {
    /// All formats in selector order.
    pub const ALL: [PaperFormat; 2] = [PaperFormat::A3, PaperFormat::A4];

    /// Canonical upper-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            PaperFormat::A3 => "A3",
            PaperFormat::A4 => "A4",
        }
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaperFormat {
    type Err = ValidationError;

    /// Accepts `A3`/`A4` in either case, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField(Field::PaperFormat));
        }
        PaperFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownFormat(trimmed.to_string()))
    }
}

/// Validated calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintJobInput {
    /// Sheets in the run.
    pub quantity: Quantity,
    /// Ink coverage.
    pub coverage: Coverage,
    /// Selected paper format.
    pub paper_format: PaperFormat,
}

impl PrintJobInput {
    /// Smart constructor from already-parsed values.
    pub fn new(
        quantity: u32,
        coverage_percent: u32,
        paper_format: PaperFormat,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            quantity: Quantity::new(quantity)?,
            coverage: Coverage::new(coverage_percent)?,
            paper_format,
        })
    }

    /// Build from raw field text. `None` format means nothing selected.
    ///
    /// Fields are checked in form order, so the first error reported is for
    /// the topmost offending field.
    pub fn parse(
        quantity: &str,
        coverage: &str,
        paper_format: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let quantity = Quantity::parse(quantity)?;
        let coverage = Coverage::parse(coverage)?;
        let paper_format = paper_format
            .ok_or(ValidationError::MissingField(Field::PaperFormat))?
            .parse()?;
        Ok(Self {
            quantity,
            coverage,
            paper_format,
        })
    }
}

fn parse_integer(field: Field, text: &str) -> Result<i64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    trimmed.parse::<i64>().map_err(|_| ValidationError::NotAnInteger {
        field,
        text: text.to_string(),
    })
}

fn check_range(field: Field, value: i64, min: u32, max: u32) -> Result<(), ValidationError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
