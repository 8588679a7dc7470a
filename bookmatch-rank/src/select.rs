//! Bounded suggestion lists built from scored candidates.

use std::collections::HashSet;

use bookmatch_core::{ScoredCandidate, SelectionStrategy, is_sentinel, select_best};

/// Default number of suggestions kept per metric.
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// Reduces a scored candidate list to at most `k` suggestions.
///
/// Sentinel-scored candidates (the user's own perfect match) are skipped, as
/// are repeated ISBNs after their first occurrence. Under
/// [`SelectionStrategy::Exact`] the result is the true top-`k`, best first;
/// under [`SelectionStrategy::FirstFit`] it reproduces the legacy first-fit
/// replacement and keeps buffer order.
///
/// # Examples
/// ```
/// use bookmatch_core::ScoredCandidate;
/// use bookmatch_rank::TopKSelector;
///
/// let candidates = [
///     ScoredCandidate::new("A", 1.0),
///     ScoredCandidate::new("B", 0.53),
///     ScoredCandidate::new("C", 0.49),
/// ];
/// let ranked = TopKSelector::default().select(&candidates);
/// let isbns: Vec<_> = ranked.iter().map(|c| c.isbn.as_str()).collect();
/// assert_eq!(isbns, ["B", "C"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopKSelector {
    k: usize,
    strategy: SelectionStrategy,
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTIONS, SelectionStrategy::default())
    }
}

impl TopKSelector {
    /// Construct a selector keeping `k` suggestions.
    #[must_use]
    pub const fn new(k: usize, strategy: SelectionStrategy) -> Self {
        Self { k, strategy }
    }

    /// Maximum number of suggestions returned.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Select the suggestions from `candidates`, read in catalog order.
    #[must_use]
    pub fn select(&self, candidates: &[ScoredCandidate]) -> Vec<ScoredCandidate> {
        let mut seen = HashSet::new();
        let eligible = candidates
            .iter()
            .filter(|candidate| !is_sentinel(candidate.score))
            .filter(|candidate| seen.insert(&candidate.isbn))
            .cloned();
        select_best(eligible, self.k, self.strategy, |candidate| candidate.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn candidates(scores: &[(&str, f64)]) -> Vec<ScoredCandidate> {
        scores
            .iter()
            .map(|&(isbn, score)| ScoredCandidate::new(isbn, score))
            .collect()
    }

    fn isbns(ranked: &[ScoredCandidate]) -> Vec<&str> {
        ranked.iter().map(|c| c.isbn.as_str()).collect()
    }

    #[rstest]
    #[case(SelectionStrategy::Exact)]
    #[case(SelectionStrategy::FirstFit)]
    fn sentinel_scores_are_excluded(#[case] strategy: SelectionStrategy) {
        let scored = candidates(&[("A", 1.0), ("B", 0.9), ("C", 1.0)]);
        let ranked = TopKSelector::new(10, strategy).select(&scored);
        assert_eq!(isbns(&ranked), ["B"]);
    }

    #[rstest]
    fn exact_selection_sorts_best_first() {
        let scored = candidates(&[("A", 0.2), ("B", 0.7), ("C", 0.5), ("D", 0.9)]);
        let ranked = TopKSelector::new(3, SelectionStrategy::Exact).select(&scored);
        assert_eq!(isbns(&ranked), ["D", "B", "C"]);
    }

    #[rstest]
    fn first_fit_replaces_first_weaker_entry() {
        // Buffer [A 0.2, B 0.7, C 0.5]; D evicts A, then E (0.6) evicts C
        // because D and B are not weaker.
        let scored = candidates(&[("A", 0.2), ("B", 0.7), ("C", 0.5), ("D", 0.9), ("E", 0.6)]);
        let ranked = TopKSelector::new(3, SelectionStrategy::FirstFit).select(&scored);
        assert_eq!(isbns(&ranked), ["D", "B", "E"]);
    }

    #[rstest]
    fn repeated_isbns_keep_first_occurrence() {
        let scored = candidates(&[("A", 0.2), ("A", 0.9), ("B", 0.5)]);
        let ranked = TopKSelector::default().select(&scored);
        assert_eq!(isbns(&ranked), ["B", "A"]);
        assert!(ranked.iter().all(|c| c.score < 0.9));
    }
}
