//! Errors raised while evaluating users.

use thiserror::Error;

/// Errors returned by [`Evaluator::evaluate`](crate::Evaluator::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The catalog holds no items, so nothing can be suggested.
    #[error("catalog is empty")]
    EmptyCatalog,
    /// No ratings were supplied, so no profile can be built.
    #[error("rating history is empty")]
    EmptyRatingHistory,
    /// A configuration value was outside its valid range.
    #[error("invalid evaluation config: {field} must be at least 1")]
    InvalidConfig {
        /// Name of the offending configuration field.
        field: &'static str,
    },
}
