//! Error types for bond operations.

use thiserror::Error;

use rsb_core::CoreError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while building schedules and valuations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BondError {
    /// Term is not one of the issued tenors.
    #[error("Invalid term: {years} years (expected 2, 3 or 5)")]
    InvalidTerm {
        /// The rejected term in years.
        years: u32,
    },

    /// Payment type string was not recognised.
    #[error("Invalid payment type: '{value}' (expected semi_annual, monthly or reinvest)")]
    InvalidPaymentType {
        /// The rejected input.
        value: String,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// No published rate for the start month and term.
    #[error("No published rate for {year}-{month:02} ({term_years}-year term)")]
    RateNotFound {
        /// Start year.
        year: i32,
        /// Start month.
        month: u32,
        /// Term in years.
        term_years: u32,
    },

    /// The rate source does not quote this term.
    #[error("Unsupported term for rate lookup: {years} years")]
    UnsupportedTerm {
        /// The requested term in years.
        years: u32,
    },

    /// Schedule generation failed.
    #[error("Schedule generation failed: {reason}")]
    ScheduleFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a schedule failure error.
    #[must_use]
    pub fn schedule_failed(reason: impl Into<String>) -> Self {
        Self::ScheduleFailed {
            reason: reason.into(),
        }
    }
}
