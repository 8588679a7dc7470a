//! Score catalog items against a user's taste profile.
//!
//! The `Scorer` trait assigns a similarity score to a
//! [`CatalogEntry`](crate::CatalogEntry) given its title keywords and a
//! [`UserProfile`](crate::UserProfile).

use crate::{Catalog, CatalogEntry, KeywordIndex, ScoredCandidate, UserProfile};

/// Calculate a similarity score for a catalog item.
///
/// Higher scores indicate a closer match between the item and the profile.
/// Implementations must be thread-safe (`Send` + `Sync`) so users can be
/// evaluated in parallel against shared scorers. The method is infallible;
/// degenerate inputs (empty keyword sets, empty profiles) contribute `0.0`.
///
/// A score of exactly [`SENTINEL_SCORE`](crate::SENTINEL_SCORE) is reserved
/// for a perfect self-match and is excluded downstream.
///
/// # Examples
///
/// ```rust
/// use bookmatch_core::{CatalogEntry, Scorer, UserProfile};
///
/// struct AuthorScorer;
///
/// impl Scorer for AuthorScorer {
///     fn score(&self, entry: &CatalogEntry, _keywords: &[String], profile: &UserProfile) -> f64 {
///         if profile.prefers_author(&entry.author) { 0.5 } else { 0.0 }
///     }
/// }
///
/// let entry = CatalogEntry::new("A", "Title", "X", 2000);
/// let profile = UserProfile::new().with_author("X");
/// assert_eq!(AuthorScorer.score(&entry, &[], &profile), 0.5);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `entry`, whose title keywords are `keywords`.
    fn score(&self, entry: &CatalogEntry, keywords: &[String], profile: &UserProfile) -> f64;

    /// Score every catalog entry, in catalog order.
    fn score_catalog(
        &self,
        catalog: &Catalog,
        keywords: &KeywordIndex,
        profile: &UserProfile,
    ) -> Vec<ScoredCandidate> {
        catalog
            .iter()
            .map(|entry| {
                let score = self.score(entry, keywords.get(entry.isbn.as_str()), profile);
                ScoredCandidate::new(entry.isbn.clone(), score)
            })
            .collect()
    }
}
