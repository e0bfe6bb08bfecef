//! Ink calculation engine (pure).
//!
//! Stateless: every call recomputes from its inputs. Callers re-invoke it
//! whenever any of the three inputs changes.

use crate::model::{CalculationResult, PaperFormat, PrintJobInput, Quantity, ValidationError};

/// Runs above this many sheets use the lower density constant.
pub const LARGE_RUN_THRESHOLD: u32 = 5000;

/// Density constant for runs up to and including [`LARGE_RUN_THRESHOLD`].
pub const SMALL_RUN_DENSITY: f64 = 0.4;

/// Density constant for runs strictly above [`LARGE_RUN_THRESHOLD`].
pub const LARGE_RUN_DENSITY: f64 = 0.3;

/// Divisor for the drying-adjusted mass, for every format.
pub const DRYING_DIVISOR: f64 = 5000.0;

/// Empirical ink density multiplier for a run of `quantity` sheets.
pub fn ink_density_constant(quantity: Quantity) -> f64 {
    if quantity.get() > LARGE_RUN_THRESHOLD {
        LARGE_RUN_DENSITY
    } else {
        SMALL_RUN_DENSITY
    }
}

/// Per-format normalization divisor.
pub fn paper_area_divisor(format: PaperFormat) -> f64 {
    match format {
        PaperFormat::A3 => 100.0,
        PaperFormat::A4 => 200.0,
    }
}

/// Ink masses for validated input.
pub fn calculate(input: &PrintJobInput) -> CalculationResult {
    let density = ink_density_constant(input.quantity);
    let ink_mass = density * f64::from(input.coverage.percent()) * f64::from(input.quantity.get());

    CalculationResult {
        ink_grams: ink_mass / paper_area_divisor(input.paper_format),
        ink_grams_with_drying: ink_mass / DRYING_DIVISOR,
    }
}

/// Validate the three inputs and compute.
///
/// # Errors
///
/// Returns [`ValidationError`] if `quantity` or `coverage_percent` is out of range.
pub fn compute(
    quantity: u32,
    coverage_percent: u32,
    paper_format: PaperFormat,
) -> Result<CalculationResult, ValidationError> {
    let input = PrintJobInput::new(quantity, coverage_percent, paper_format)?;
    Ok(calculate(&input))
}

/// Validate raw field text and compute.
///
/// `paper_format` is `None` when no format is selected.
///
/// # Errors
///
/// Returns [`ValidationError`] for a missing field, non-integer text, an
/// out-of-range value or an unknown format.
pub fn compute_from_text(
    quantity: &str,
    coverage_percent: &str,
    paper_format: Option<&str>,
) -> Result<CalculationResult, ValidationError> {
    let input = PrintJobInput::parse(quantity, coverage_percent, paper_format)?;
    Ok(calculate(&input))
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
