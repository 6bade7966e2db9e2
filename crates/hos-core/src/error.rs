//! Error type shared by the `hos-*` crates.
//!
//! The planning engine itself cannot fail once its inputs are valid; these
//! variants cover input validation and rule configuration.  Downstream crates
//! wrap `HosError` as one variant of their own enum.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HosError {
    #[error("Both 'tripDistance' and 'cycleUsed' are required.")]
    MissingInput,

    #[error("'tripDistance' and 'cycleUsed' must be numbers.")]
    NotANumber,

    #[error("Values must be non-negative.")]
    Negative,

    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        field: &'static str,
        value: f64,
    },

    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        max:   f64,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `hos-*` crates.
pub type HosResult<T> = Result<T, HosError>;
