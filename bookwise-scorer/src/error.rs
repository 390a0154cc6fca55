//! Error types raised while configuring the content scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a weight table cannot be used for scoring.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("weight for {signal} must be finite")]
    NonFinite {
        /// Name of the offending signal.
        signal: &'static str,
    },
    /// A weight was below zero.
    #[error("weight for {signal} must not be negative (got {weight})")]
    Negative {
        /// Name of the offending signal.
        signal: &'static str,
        /// Weight supplied for the signal.
        weight: f32,
    },
    /// The weights did not sum to one, so scores would leave `0.0..=1.0`.
    #[error("weights must sum to 1.0 (got {total})")]
    Unnormalised {
        /// Sum of all supplied weights.
        total: f32,
    },
}
