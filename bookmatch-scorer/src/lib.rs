//! Similarity scoring between catalog items and user taste profiles.
//!
//! The crate implements the [`Scorer`](bookmatch_core::Scorer) trait for two
//! weighted metrics:
//!
//! | metric | author | keyword | year |
//! |---|---|---|---|
//! | [`Metric::Jaccard`] | 0.4 | 0.2 | 0.4 |
//! | [`Metric::Dice`] | 0.3 | 0.5 | 0.2 |
//!
//! Both metrics share the author and year components and differ only in the
//! keyword overlap formula. Scores are the plain sum of the three weighted
//! components and are not clamped.
//!
//! # Examples
//!
//! ```
//! use bookmatch_core::{Catalog, CatalogEntry, KeywordIndex, Scorer, UserProfile};
//! use bookmatch_scorer::SimilarityScorer;
//!
//! let catalog = Catalog::new([
//!     CatalogEntry::new("A", "War and Love", "X", 2000),
//!     CatalogEntry::new("B", "War", "Y", 2001),
//! ]);
//! let keywords = KeywordIndex::new()
//!     .with_keywords("A", ["war", "love"])
//!     .with_keywords("B", ["war"]);
//! let profile = UserProfile::new()
//!     .with_author("X")
//!     .with_year(2000)
//!     .with_keywords(["war", "love"]);
//!
//! let scores = SimilarityScorer::dice().score_catalog(&catalog, &keywords, &profile);
//! assert_eq!(scores.len(), 2);
//! assert!(scores[0].score > scores[1].score);
//! ```

#![forbid(unsafe_code)]

mod error;
mod metric;
mod similarity;

pub use error::ScorerError;
pub use metric::{Metric, MetricWeights};
pub use similarity::{
    ScoreBreakdown, SimilarityScorer, YEAR_SPAN, common_keywords, dice_overlap, jaccard_overlap,
    year_proximity,
};
