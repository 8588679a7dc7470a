//! Per-user evaluation: profile, two rankings, consensus and overlaps.

use bookmatch_core::{
    Catalog, GoldenEntry, KeywordIndex, ProfileBuilder, RatingHistory, ScoredCandidate, Scorer,
    SelectionStrategy, UserId, UserProfile,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_OVERLAP_DEPTH, DEFAULT_SUGGESTIONS, EvaluationError, TopKSelector, build_golden,
    overlap,
};

/// Configuration for [`Evaluator`].
///
/// The number of favourites per profile is fixed at
/// [`MAX_FAVORITES`](bookmatch_core::MAX_FAVORITES).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Suggestions kept per metric.
    pub suggestions: usize,
    /// Prefix depth used for the overlap measures.
    pub overlap_depth: usize,
    /// Selection policy for favourites and suggestions.
    pub strategy: SelectionStrategy,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            suggestions: DEFAULT_SUGGESTIONS,
            overlap_depth: DEFAULT_OVERLAP_DEPTH,
            strategy: SelectionStrategy::default(),
        }
    }
}

impl EvaluationConfig {
    /// Check that every bound is usable.
    ///
    /// # Errors
    /// Returns [`EvaluationError::InvalidConfig`] when `suggestions` or
    /// `overlap_depth` is zero.
    pub const fn validate(&self) -> Result<(), EvaluationError> {
        if self.suggestions == 0 {
            return Err(EvaluationError::InvalidConfig {
                field: "suggestions",
            });
        }
        if self.overlap_depth == 0 {
            return Err(EvaluationError::InvalidConfig {
                field: "overlap_depth",
            });
        }
        Ok(())
    }
}

/// Pairwise overlap fractions between the three rankings of one user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapSummary {
    /// Jaccard suggestions against Dice suggestions.
    pub jaccard_vs_dice: f64,
    /// Jaccard suggestions against the consensus.
    pub jaccard_vs_golden: f64,
    /// Dice suggestions against the consensus.
    pub dice_vs_golden: f64,
}

/// Everything computed for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Evaluated user.
    pub user: UserId,
    /// Profile derived from the user's favourites.
    pub profile: UserProfile,
    /// Suggestions under the Jaccard scorer.
    pub jaccard: Vec<ScoredCandidate>,
    /// Suggestions under the Dice scorer.
    pub dice: Vec<ScoredCandidate>,
    /// Consensus of the two suggestion lists.
    pub golden: Vec<GoldenEntry>,
    /// Agreement between the rankings.
    pub overlap: OverlapSummary,
}

/// Runs the full pipeline for users against a shared catalog.
///
/// The evaluator is generic over the two scorers so alternative metrics can
/// be compared; the first scorer fills [`Evaluation::jaccard`] and the second
/// fills [`Evaluation::dice`].
pub struct Evaluator<J, D>
where
    J: Scorer,
    D: Scorer,
{
    jaccard: J,
    dice: D,
    config: EvaluationConfig,
}

impl<J, D> Evaluator<J, D>
where
    J: Scorer,
    D: Scorer,
{
    /// Construct an evaluator using default configuration.
    pub fn new(jaccard: J, dice: D) -> Self {
        Self::with_config(jaccard, dice, EvaluationConfig::default())
    }

    /// Construct an evaluator with explicit configuration.
    pub const fn with_config(jaccard: J, dice: D, config: EvaluationConfig) -> Self {
        Self {
            jaccard,
            dice,
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate a single user.
    ///
    /// A user without ratings in `history`, or whose rated items are all
    /// missing from the catalog, gets an empty profile. Every candidate then
    /// scores zero with the built-in scorers, so suggestions fall back to
    /// catalog order.
    ///
    /// # Errors
    /// Returns [`EvaluationError`] when the catalog or rating history is
    /// empty, or the configuration is invalid.
    pub fn evaluate(
        &self,
        user: &UserId,
        history: &RatingHistory,
        catalog: &Catalog,
        keywords: &KeywordIndex,
    ) -> Result<Evaluation, EvaluationError> {
        self.check_inputs(history, catalog)?;
        Ok(self.evaluate_checked(user, history, catalog, keywords))
    }

    /// Evaluate many users in parallel, returning results in input order.
    ///
    /// # Errors
    /// Returns [`EvaluationError`] under the same conditions as
    /// [`Evaluator::evaluate`]; inputs are checked once before any user runs.
    pub fn evaluate_users(
        &self,
        users: &[UserId],
        history: &RatingHistory,
        catalog: &Catalog,
        keywords: &KeywordIndex,
    ) -> Result<Vec<Evaluation>, EvaluationError> {
        self.check_inputs(history, catalog)?;
        Ok(users
            .par_iter()
            .map(|user| self.evaluate_checked(user, history, catalog, keywords))
            .collect())
    }

    fn check_inputs(
        &self,
        history: &RatingHistory,
        catalog: &Catalog,
    ) -> Result<(), EvaluationError> {
        self.config.validate()?;
        if catalog.is_empty() {
            return Err(EvaluationError::EmptyCatalog);
        }
        if history.is_empty() {
            return Err(EvaluationError::EmptyRatingHistory);
        }
        Ok(())
    }

    fn evaluate_checked(
        &self,
        user: &UserId,
        history: &RatingHistory,
        catalog: &Catalog,
        keywords: &KeywordIndex,
    ) -> Evaluation {
        let profile =
            ProfileBuilder::new(self.config.strategy).build(user, history, catalog, keywords);
        if profile.is_empty() {
            log::warn!("user {user} has no favourites in the catalog");
        }

        let selector = TopKSelector::new(self.config.suggestions, self.config.strategy);
        let jaccard = selector.select(&self.jaccard.score_catalog(catalog, keywords, &profile));
        let dice = selector.select(&self.dice.score_catalog(catalog, keywords, &profile));
        let golden = build_golden(&jaccard, &dice);

        let depth = self.config.overlap_depth;
        let summary = OverlapSummary {
            jaccard_vs_dice: overlap(&jaccard, &dice, depth),
            jaccard_vs_golden: overlap(&jaccard, &golden, depth),
            dice_vs_golden: overlap(&dice, &golden, depth),
        };
        log::debug!(
            "user {user}: {} favourites, {} jaccard, {} dice, {} golden, jaccard/dice overlap {:.2}",
            profile.favorites().len(),
            jaccard.len(),
            dice.len(),
            golden.len(),
            summary.jaccard_vs_dice,
        );

        Evaluation {
            user: user.clone(),
            profile,
            jaccard,
            dice,
            golden,
            overlap: summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmatch_core::test_support::{FixedScorer, sample_catalog, sample_keywords};
    use bookmatch_core::{Agreement, CatalogEntry, RatingEvent};
    use rstest::{fixture, rstest};

    #[fixture]
    fn history() -> RatingHistory {
        RatingHistory::new([
            RatingEvent::new("reader", "A", 9.0),
            RatingEvent::new("other", "B", 4.0),
        ])
    }

    fn evaluator() -> Evaluator<FixedScorer, FixedScorer> {
        Evaluator::new(
            FixedScorer::new([("A", 1.0), ("B", 0.3), ("C", 0.6)]),
            FixedScorer::new([("A", 1.0), ("B", 0.5), ("C", 0.2)]),
        )
    }

    fn isbns<T: bookmatch_core::Ranked>(ranked: &[T]) -> Vec<&str> {
        ranked.iter().map(|item| item.isbn().as_str()).collect()
    }

    #[rstest]
    fn evaluates_profile_rankings_and_consensus(history: RatingHistory) {
        let evaluation = evaluator()
            .evaluate(
                &UserId::from("reader"),
                &history,
                &sample_catalog(),
                &sample_keywords(),
            )
            .expect("inputs are valid");

        assert_eq!(evaluation.profile.preferred_authors(), ["X"]);
        assert_eq!(isbns(&evaluation.jaccard), ["C", "B"]);
        assert_eq!(isbns(&evaluation.dice), ["B", "C"]);
        assert!(
            evaluation
                .golden
                .iter()
                .all(|entry| entry.agreement == Agreement::Both)
        );
        assert_eq!(evaluation.overlap.jaccard_vs_dice, 1.0);
        assert_eq!(evaluation.overlap.jaccard_vs_golden, 1.0);
    }

    #[rstest]
    #[case(SelectionStrategy::Exact, ["C", "E"])]
    #[case(SelectionStrategy::FirstFit, ["E", "C"])]
    fn strategy_shapes_the_suggestion_lists(
        history: RatingHistory,
        #[case] strategy: SelectionStrategy,
        #[case] expected_jaccard: [&str; 2],
    ) {
        let catalog = Catalog::new([
            CatalogEntry::new("A", "War and Love", "X", 2000),
            CatalogEntry::new("B", "War", "Y", 2001),
            CatalogEntry::new("C", "Love", "X", 1995),
            CatalogEntry::new("D", "Night", "Z", 1980),
            CatalogEntry::new("E", "River", "Y", 2004),
        ]);
        let config = EvaluationConfig {
            suggestions: 2,
            strategy,
            ..EvaluationConfig::default()
        };
        let evaluation = Evaluator::with_config(
            FixedScorer::new([("A", 1.0), ("B", 0.2), ("C", 0.7), ("D", 0.5), ("E", 0.6)]),
            FixedScorer::new([("A", 1.0), ("B", 0.8), ("C", 0.1), ("D", 0.3), ("E", 0.2)]),
            config,
        )
        .evaluate(&UserId::from("reader"), &history, &catalog, &KeywordIndex::new())
        .expect("inputs are valid");

        assert_eq!(isbns(&evaluation.jaccard), expected_jaccard);
        assert_eq!(isbns(&evaluation.dice), ["B", "D"]);
        assert_eq!(isbns(&evaluation.golden), ["B", "C", "E", "D"]);
        assert!(
            evaluation
                .golden
                .iter()
                .all(|entry| entry.agreement == Agreement::Single)
        );
        assert_eq!(evaluation.overlap.jaccard_vs_dice, 0.0);
    }

    #[rstest]
    fn empty_catalog_is_rejected(history: RatingHistory) {
        let result = evaluator().evaluate(
            &UserId::from("reader"),
            &history,
            &Catalog::default(),
            &KeywordIndex::new(),
        );
        assert_eq!(result, Err(EvaluationError::EmptyCatalog));
    }

    #[rstest]
    fn empty_history_is_rejected() {
        let result = evaluator().evaluate(
            &UserId::from("reader"),
            &RatingHistory::default(),
            &sample_catalog(),
            &sample_keywords(),
        );
        assert_eq!(result, Err(EvaluationError::EmptyRatingHistory));
    }

    #[rstest]
    #[case(0, 10, "suggestions")]
    #[case(10, 0, "overlap_depth")]
    fn zero_bounds_are_rejected(
        history: RatingHistory,
        #[case] suggestions: usize,
        #[case] overlap_depth: usize,
        #[case] field: &'static str,
    ) {
        let config = EvaluationConfig {
            suggestions,
            overlap_depth,
            ..EvaluationConfig::default()
        };
        let result = Evaluator::with_config(FixedScorer::default(), FixedScorer::default(), config)
            .evaluate(
                &UserId::from("reader"),
                &history,
                &sample_catalog(),
                &sample_keywords(),
            );
        assert_eq!(result, Err(EvaluationError::InvalidConfig { field }));
    }

    #[rstest]
    fn users_are_evaluated_in_input_order(history: RatingHistory) {
        let users = [
            UserId::from("other"),
            UserId::from("reader"),
            UserId::from("ghost"),
        ];
        let evaluations = evaluator()
            .evaluate_users(&users, &history, &sample_catalog(), &sample_keywords())
            .expect("inputs are valid");

        let order: Vec<_> = evaluations.iter().map(|e| e.user.as_str()).collect();
        assert_eq!(order, ["other", "reader", "ghost"]);
        let ghost = evaluations.last().expect("three evaluations");
        assert!(ghost.profile.is_empty());
    }
}
