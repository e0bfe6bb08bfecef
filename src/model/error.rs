//! Error types for inkcalc.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal I/O while driving the interactive shell
//! - [`ValidationError`] - Form input rejected by the calculation engine
//! - [`PersistenceError`] - Usage counter record could not be read or written
//!
//! # Error Recovery Strategy
//!
//! Neither `ValidationError` nor `PersistenceError` ever reaches `main`. Validation errors
//! are rendered as a fixed message in place of the results; persistence errors are logged
//! and the counter falls back to a default so the program continues.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error.
///
/// Only startup and terminal failures end up here. Calculation and counter failures
/// are recovered where they occur.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Reading commands from stdin or writing results to stdout failed.
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// One of the three calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Print run size.
    Quantity,
    /// Coverage percentage.
    Coverage,
    /// Paper format selection.
    PaperFormat,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Quantity => "quantity",
            Field::Coverage => "coverage",
            Field::PaperFormat => "paper format",
        };
        f.write_str(name)
    }
}

/// Input rejected before a calculation is attempted.
///
/// The variants carry enough context for logging. End users only ever see
/// [`ValidationError::USER_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field left empty (or no format selected).
    #[error("{0} is missing")]
    MissingField(Field),

    /// Field text is not a decimal integer.
    #[error("{field} is not an integer: {text:?}")]
    NotAnInteger {
        /// Offending field.
        field: Field,
        /// Text as entered.
        text: String,
    },

    /// Integer outside the accepted range for its field.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Offending field.
        field: Field,
        /// Parsed value.
        value: i64,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// Paper format other than A3 or A4.
    #[error("unknown paper format: {0:?}")]
    UnknownFormat(String),
}

impl ValidationError {
    /// Fixed message shown in place of results for any validation failure.
    pub const USER_MESSAGE: &'static str = "Fill in all fields correctly";

    /// Field the error refers to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::NotAnInteger { field, .. } => *field,
            ValidationError::OutOfRange { field, .. } => *field,
            ValidationError::UnknownFormat(_) => Field::PaperFormat,
        }
    }
}

/// Usage counter record could not be read or written.
///
/// Always recovered inside [`crate::counter`]: the caller gets a count regardless.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Record exists but could not be read.
    #[error("Failed to read usage counter at {path:?}: {source}")]
    Read {
        /// Record path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Record could not be written back.
    #[error("Failed to write usage counter at {path:?}: {source}")]
    Write {
        /// Record path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Record is not a `{"count": <non-negative integer>}` object.
    #[error("Malformed usage counter at {path:?}: {source}")]
    Malformed {
        /// Record path.
        path: PathBuf,
        /// JSON decoding error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field_and_bounds() {
        let err = ValidationError::OutOfRange {
            field: Field::Coverage,
            value: 150,
            min: 1,
            max: 100,
        };
        assert_eq!(err.to_string(), "coverage must be between 1 and 100, got 150");
    }

    #[test]
    fn unknown_format_refers_to_paper_format_field() {
        let err = ValidationError::UnknownFormat("A5".to_string());
        assert_eq!(err.field(), Field::PaperFormat);
        assert!(err.to_string().contains("A5"));
    }

    #[test]
    fn missing_field_message() {
        let err = ValidationError::MissingField(Field::Quantity);
        assert_eq!(err.to_string(), "quantity is missing");
    }

    #[test]
    fn app_error_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().starts_with("Terminal error:"));
    }

    #[test]
    fn persistence_write_error_includes_path() {
        let err = PersistenceError::Write {
            path: PathBuf::from("/tmp/usage_counter.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("usage_counter.json"));
    }
}
