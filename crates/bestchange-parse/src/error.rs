//! Row-level parse errors.
//!
//! None of these abort a load. The parsers log them and move on to the next
//! row.

use thiserror::Error;

/// Why a single row was skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// The row has fewer `;`-separated fields than the member requires.
    #[error("Expected at least {expected} fields, found {found}")]
    TooFewFields {
        /// Minimum field count for this member.
        expected: usize,
        /// Fields present in the row.
        found: usize,
    },

    /// An id field is not a non-negative integer.
    #[error("Field {index}: invalid id '{value}'")]
    InvalidId {
        /// Zero-based field index.
        index: usize,
        /// Raw field text.
        value: String,
    },

    /// An amount field is not a number.
    #[error("Field {index}: invalid amount '{value}'")]
    InvalidAmount {
        /// Zero-based field index.
        index: usize,
        /// Raw field text.
        value: String,
    },

    /// An amount is zero, negative, or not finite.
    #[error("Amounts must be positive (give {give}, receive {receive})")]
    NonPositiveAmount {
        /// Parsed give amount.
        give: f64,
        /// Parsed receive amount.
        receive: f64,
    },
}

/// Failure to read the `last_update` descriptor value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// No known layout matched after month translation.
    #[error("Unrecognized date '{0}'")]
    Unrecognized(String),
}
