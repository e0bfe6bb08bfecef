//! Calculation output.

/// Ink masses derived from a [`PrintJobInput`](super::PrintJobInput).
///
/// Recomputed from scratch on every input change; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// Grams of ink to mix for the run.
    pub ink_grams: f64,
    /// Grams lost to drying (fixed 5000 divisor, independent of format).
    pub ink_grams_with_drying: f64,
}

impl CalculationResult {
    /// `ink_grams` formatted to two decimals.
    pub fn ink_grams_display(&self) -> String {
        format!("{:.2}", self.ink_grams)
    }

    /// `ink_grams_with_drying` formatted to two decimals.
    pub fn drying_display(&self) -> String {
        format!("{:.2}", self.ink_grams_with_drying)
    }
}
