//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod job;
pub mod result;

// Re-export for convenience
pub use error::{AppError, Field, PersistenceError, ValidationError};
pub use job::{Coverage, PaperFormat, PrintJobInput, Quantity};
pub use result::CalculationResult;
