//! Error types raised while configuring similarity scorers.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when configuring a similarity scorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScorerError {
    /// Provided weights were unusable.
    #[error("metric weights must be finite, non-negative and sum to a positive value")]
    InvalidWeights,
}
