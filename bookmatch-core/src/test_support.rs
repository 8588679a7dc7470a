//! Test-only fixtures shared by unit and behaviour tests across the
//! workspace.

use std::collections::HashMap;

use crate::{Catalog, CatalogEntry, Isbn, KeywordIndex, Scorer, UserProfile};

/// Three-book catalog used throughout the scoring scenarios.
///
/// `A` (author X, 2000, "war love"), `B` (author Y, 2001, "war") and `C`
/// (author X, 1990, no keywords).
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new([
        CatalogEntry::new("A", "War and Love", "X", 2000),
        CatalogEntry::new("B", "War", "Y", 2001),
        CatalogEntry::new("C", "1990", "X", 1990),
    ])
}

/// Keyword sets matching [`sample_catalog`].
#[must_use]
pub fn sample_keywords() -> KeywordIndex {
    KeywordIndex::new()
        .with_keywords("A", ["war", "love"])
        .with_keywords("B", ["war"])
        .with_keywords("C", Vec::<String>::new())
}

/// Scorer returning pre-assigned scores, `0.0` for unknown items.
///
/// The profile is ignored, which lets ranking tests dictate exact scores.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<Isbn, f64>,
}

impl FixedScorer {
    /// Build a scorer from `(isbn, score)` pairs.
    pub fn new<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<Isbn>,
    {
        Self {
            scores: scores
                .into_iter()
                .map(|(isbn, score)| (isbn.into(), score))
                .collect(),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, entry: &CatalogEntry, _keywords: &[String], _profile: &UserProfile) -> f64 {
        self.scores
            .get(entry.isbn.as_str())
            .copied()
            .unwrap_or(0.0)
    }
}
