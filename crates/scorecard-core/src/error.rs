//! Attempt data boundary errors.
//!
//! These errors represent malformed upstream data caught when an attempt
//! snapshot enters the core. Defined here so callers can match on the
//! specific violation instead of string matching parse output.

use thiserror::Error;

/// Errors raised while converting raw upstream data into an [`Attempt`].
///
/// [`Attempt`]: crate::model::Attempt
#[derive(Debug, Error)]
pub enum AttemptDataError {
    /// The percentage field was a string that does not parse as a number.
    #[error("percentage is not numeric: {0:?}")]
    NonNumericPercentage(String),

    /// A point value was negative.
    #[error("negative {field} ({value}) on {entity}")]
    NegativePoints {
        field: &'static str,
        value: f64,
        entity: String,
    },

    /// The status string is not a known attempt status.
    #[error("{0}")]
    UnknownStatus(String),
}
