//! Facade crate for the bookmatch recommendation engine.
//!
//! This crate re-exports the core domain types, the similarity scorers and
//! the evaluation pipeline, and wires the two built-in metrics together as
//! the [`DefaultEvaluator`]. File loaders and report writers are available
//! behind the `data` feature.
//!
//! # Examples
//! ```
//! use bookmatch_engine::{Catalog, CatalogEntry, RatingEvent, RatingHistory, UserId, evaluate};
//!
//! let catalog = Catalog::new([
//!     CatalogEntry::new("A", "War and Love", "X", 2000),
//!     CatalogEntry::new("B", "War", "Y", 2001),
//!     CatalogEntry::new("C", "Peace", "X", 1990),
//! ]);
//! let history = RatingHistory::new([RatingEvent::new("reader", "A", 9.0)]);
//! let keywords = bookmatch_engine::KeywordIndex::new()
//!     .with_keywords("A", ["war", "love"])
//!     .with_keywords("B", ["war"])
//!     .with_keywords("C", ["peace"]);
//!
//! let evaluation = evaluate(&UserId::from("reader"), &history, &catalog, &keywords)?;
//! assert_eq!(evaluation.jaccard.len(), 2);
//! # Ok::<(), bookmatch_engine::EvaluationError>(())
//! ```

#![forbid(unsafe_code)]

pub use bookmatch_core::{
    Agreement, Catalog, CatalogEntry, Favorite, GoldenEntry, Isbn, KeywordIndex, MAX_FAVORITES,
    ProfileBuilder, Ranked, RatingEvent, RatingHistory, SENTINEL_SCORE, ScoredCandidate, Scorer,
    SelectionStrategy, UserId, UserProfile, is_sentinel,
};
pub use bookmatch_rank::{
    DEFAULT_OVERLAP_DEPTH, DEFAULT_SUGGESTIONS, Evaluation, EvaluationConfig, EvaluationError,
    Evaluator, OverlapSummary, TopKSelector, build_golden, overlap, overlap_curve,
};
pub use bookmatch_scorer::{Metric, MetricWeights, ScoreBreakdown, SimilarityScorer};

#[cfg(feature = "data")]
pub use bookmatch_data::{
    DataError, LoadReport, Loaded, ReportKind, ReportWriter, extract_keywords, keyword_index,
    load_books, load_ratings, load_users, sample_users,
};

/// Evaluator comparing the built-in Jaccard and Dice scorers.
pub type DefaultEvaluator = Evaluator<SimilarityScorer, SimilarityScorer>;

/// Build the [`DefaultEvaluator`] with the given configuration.
#[must_use]
pub const fn default_evaluator(config: EvaluationConfig) -> DefaultEvaluator {
    Evaluator::with_config(SimilarityScorer::jaccard(), SimilarityScorer::dice(), config)
}

/// Evaluate one user with the built-in metrics and default configuration.
///
/// # Errors
/// Returns [`EvaluationError`] when the catalog or rating history is empty.
pub fn evaluate(
    user: &UserId,
    history: &RatingHistory,
    catalog: &Catalog,
    keywords: &KeywordIndex,
) -> Result<Evaluation, EvaluationError> {
    default_evaluator(EvaluationConfig::default()).evaluate(user, history, catalog, keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmatch_core::test_support::{sample_catalog, sample_keywords};
    use rstest::rstest;

    #[rstest]
    fn facade_evaluates_sample_reader() {
        let history = RatingHistory::new([RatingEvent::new("reader", "A", 9.0)]);
        let evaluation = evaluate(
            &UserId::from("reader"),
            &history,
            &sample_catalog(),
            &sample_keywords(),
        )
        .expect("sample inputs are valid");

        let jaccard: Vec<_> = evaluation.jaccard.iter().map(|c| c.isbn.as_str()).collect();
        let dice: Vec<_> = evaluation.dice.iter().map(|c| c.isbn.as_str()).collect();
        assert_eq!(jaccard, ["C", "B"]);
        assert_eq!(dice, ["B", "C"]);
        assert_eq!(evaluation.golden.len(), 2);
    }

    #[rstest]
    fn first_fit_configuration_is_honoured() {
        let config = EvaluationConfig {
            strategy: SelectionStrategy::FirstFit,
            ..EvaluationConfig::default()
        };
        assert_eq!(
            default_evaluator(config).config().strategy,
            SelectionStrategy::FirstFit
        );
    }
}
