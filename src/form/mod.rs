//! Calculator form state.
//!
//! Holds what the input widgets hold: raw text for the two numeric fields and
//! the selected paper format. Each edit recomputes from scratch through the
//! engine, so a stale result can never outlive an invalid edit.

use tracing::{debug, trace};

use crate::engine;
use crate::model::{CalculationResult, PaperFormat, PrintJobInput, ValidationError};

/// Prefix of the drying label, shown bare when there is no result.
pub const DRYING_PREFIX: &str = "2% drying: ";

/// Title line including the usage count.
pub fn window_title(usage_count: u64) -> String {
    format!("ink calculator (uses: {usage_count})")
}

/// Rendered output labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Ink mass line, or the fixed validation message.
    pub result_line: String,
    /// Drying-adjusted mass line, or the bare prefix.
    pub drying_line: String,
    /// Computed result, `None` when inputs are incomplete or invalid.
    pub result: Option<CalculationResult>,
}

impl FormView {
    fn from_outcome(outcome: Result<CalculationResult, ValidationError>) -> Self {
        match outcome {
            Ok(result) => Self {
                result_line: format!("You need to mix {} grams.", result.ink_grams_display()),
                drying_line: format!("{}{} grams.", DRYING_PREFIX, result.drying_display()),
                result: Some(result),
            },
            Err(err) => {
                debug!(error = %err, "Inputs incomplete or invalid");
                Self {
                    result_line: ValidationError::USER_MESSAGE.to_string(),
                    drying_line: DRYING_PREFIX.to_string(),
                    result: None,
                }
            }
        }
    }
}

/// Raw contents of the three calculator inputs.
///
/// Setters replace one field and return the freshly computed [`FormView`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorForm {
    quantity: String,
    coverage: String,
    format: Option<PaperFormat>,
}

impl CalculatorForm {
    /// Empty numeric fields with `format` preselected.
    pub fn with_format(format: PaperFormat) -> Self {
        Self {
            format: Some(format),
            ..Self::default()
        }
    }

    /// Quantity field text as entered.
    pub fn quantity_text(&self) -> &str {
        &self.quantity
    }

    /// Coverage field text as entered.
    pub fn coverage_text(&self) -> &str {
        &self.coverage
    }

    /// Selected format, `None` when nothing is selected.
    pub fn format(&self) -> Option<PaperFormat> {
        self.format
    }

    /// Replace the quantity text and recompute.
    pub fn set_quantity(&mut self, text: impl Into<String>) -> FormView {
        self.quantity = text.into();
        trace!(quantity = %self.quantity, "Quantity edited");
        self.view()
    }

    /// Replace the coverage text and recompute.
    pub fn set_coverage(&mut self, text: impl Into<String>) -> FormView {
        self.coverage = text.into();
        trace!(coverage = %self.coverage, "Coverage edited");
        self.view()
    }

    /// Change the selected format and recompute.
    pub fn select_format(&mut self, format: Option<PaperFormat>) -> FormView {
        self.format = format;
        trace!(format = ?self.format, "Format selected");
        self.view()
    }

    /// Validated input, if every field is complete and in range.
    pub fn input(&self) -> Result<PrintJobInput, ValidationError> {
        PrintJobInput::parse(
            &self.quantity,
            &self.coverage,
            self.format.map(PaperFormat::as_str),
        )
    }

    /// Recompute and render both labels.
    pub fn view(&self) -> FormView {
        FormView::from_outcome(self.input().map(|input| engine::calculate(&input)))
    }
}
