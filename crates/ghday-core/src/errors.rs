//! Cross-cutting error types for ghday.
//!
//! Provider and configuration errors live in their respective crates. Only the
//! errors that abort a whole report are defined here; per-facet failures are
//! absorbed by the aggregator.

use thiserror::Error;

/// Errors that abort report generation before any query is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The requested date is not a valid `DD-MM-YYYY` calendar date.
    #[error("invalid date format '{input}': expected DD-MM-YYYY ({reason})")]
    InvalidDateFormat { input: String, reason: String },
}

impl CoreError {
    pub(crate) fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
