//! Weighted multi-feature similarity between a catalog item and a profile.
//!
//! Each item earns three independent components that are summed without
//! clamping:
//!
//! - **author**: the full author weight when the item's author is among the
//!   profile's preferred authors;
//! - **keyword**: the keyword weight times the Jaccard or Dice overlap between
//!   the item's keyword set and the profile's keyword list;
//! - **year**: the year weight times the proximity to the closest preferred
//!   year, `max(0, 1 - |Δyear| / 2005)`.

use bookmatch_core::{CatalogEntry, Scorer, UserProfile};

use crate::{Metric, MetricWeights, ScorerError};

/// Divisor turning a year gap into a proximity penalty.
pub const YEAR_SPAN: f64 = 2005.0;

/// Per-component contributions to a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Author match contribution, `0.0` or the author weight.
    pub author: f64,
    /// Weighted keyword overlap.
    pub keyword: f64,
    /// Weighted proximity to the closest preferred year.
    pub year: f64,
}

impl ScoreBreakdown {
    /// Sum of the components, added in author, keyword, year order.
    #[expect(clippy::float_arithmetic, reason = "the score is a plain sum")]
    #[must_use]
    pub fn total(self) -> f64 {
        self.author + self.keyword + self.year
    }
}

/// Number of item keywords that appear anywhere in the profile keywords.
#[must_use]
pub fn common_keywords(item: &[String], profile: &[String]) -> usize {
    item.iter().filter(|keyword| profile.contains(keyword)).count()
}

/// Jaccard overlap between an item keyword set and a profile keyword list.
///
/// The union starts from the item keywords and appends each profile keyword
/// not yet present, so repeated profile keywords count once. An empty item
/// set yields `0.0`.
///
/// # Examples
/// ```
/// use bookmatch_scorer::jaccard_overlap;
///
/// let item = vec!["war".to_owned()];
/// let profile = vec!["war".to_owned(), "love".to_owned(), "war".to_owned()];
/// assert_eq!(jaccard_overlap(&item, &profile), 0.5);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "overlap ratios divide small keyword counts"
)]
#[must_use]
pub fn jaccard_overlap(item: &[String], profile: &[String]) -> f64 {
    if item.is_empty() {
        return 0.0;
    }
    let mut union: Vec<&str> = item.iter().map(String::as_str).collect();
    for keyword in profile {
        if !union.contains(&keyword.as_str()) {
            union.push(keyword.as_str());
        }
    }
    common_keywords(item, profile) as f64 / union.len() as f64
}

/// Dice overlap between an item keyword set and a profile keyword list.
///
/// The profile list is counted with its duplicates in the denominator. An
/// empty item set yields `0.0`.
///
/// # Examples
/// ```
/// use bookmatch_scorer::dice_overlap;
///
/// let item = vec!["war".to_owned()];
/// let profile = vec!["war".to_owned(), "love".to_owned()];
/// assert!((dice_overlap(&item, &profile) - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "overlap ratios divide small keyword counts"
)]
#[must_use]
pub fn dice_overlap(item: &[String], profile: &[String]) -> f64 {
    if item.is_empty() {
        return 0.0;
    }
    let common = common_keywords(item, profile) as f64;
    2.0 * common / (item.len() + profile.len()) as f64
}

/// Proximity of `year` to the closest of `preferred`, in `0.0..=1.0`.
///
/// The running maximum starts at `0.0`, so an empty preference list or
/// years more than [`YEAR_SPAN`] apart contribute nothing.
#[expect(
    clippy::float_arithmetic,
    reason = "proximity is a linear penalty on the year gap"
)]
#[must_use]
pub fn year_proximity(year: i32, preferred: &[i32]) -> f64 {
    preferred
        .iter()
        .map(|&favorite| {
            let gap = (f64::from(year) - f64::from(favorite)).abs();
            (1.0 - gap / YEAR_SPAN).max(0.0)
        })
        .fold(0.0, f64::max)
}

/// Scorer applying one metric's overlap formula and weights.
///
/// # Examples
/// ```
/// use bookmatch_core::{CatalogEntry, Scorer, UserProfile};
/// use bookmatch_scorer::{Metric, SimilarityScorer};
///
/// let scorer = SimilarityScorer::new(Metric::Dice);
/// let profile = UserProfile::new()
///     .with_author("X")
///     .with_year(2000)
///     .with_keywords(["war", "love"]);
/// let entry = CatalogEntry::new("C", "1990", "X", 1990);
///
/// let score = scorer.score(&entry, &[], &profile);
/// assert!((score - 0.499).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScorer {
    metric: Metric,
    weights: MetricWeights,
}

impl SimilarityScorer {
    /// Construct a scorer using the metric's fixed weight preset.
    #[must_use]
    pub const fn new(metric: Metric) -> Self {
        Self {
            metric,
            weights: metric.weights(),
        }
    }

    /// Construct a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when the weights fail
    /// [`MetricWeights::validate`].
    pub fn with_weights(metric: Metric, weights: MetricWeights) -> Result<Self, ScorerError> {
        Ok(Self {
            metric,
            weights: weights.validate()?,
        })
    }

    /// Jaccard scorer with default weights.
    #[must_use]
    pub const fn jaccard() -> Self {
        Self::new(Metric::Jaccard)
    }

    /// Dice scorer with default weights.
    #[must_use]
    pub const fn dice() -> Self {
        Self::new(Metric::Dice)
    }

    /// Metric this scorer applies.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Weights this scorer applies.
    #[must_use]
    pub const fn weights(&self) -> MetricWeights {
        self.weights
    }

    /// Keyword overlap under this scorer's metric.
    #[must_use]
    pub fn keyword_overlap(&self, item: &[String], profile: &[String]) -> f64 {
        match self.metric {
            Metric::Jaccard => jaccard_overlap(item, profile),
            Metric::Dice => dice_overlap(item, profile),
        }
    }

    /// Compute each weighted component for `entry`.
    #[expect(
        clippy::float_arithmetic,
        reason = "components are weights times unit-interval similarities"
    )]
    #[must_use]
    pub fn breakdown(
        &self,
        entry: &CatalogEntry,
        keywords: &[String],
        profile: &UserProfile,
    ) -> ScoreBreakdown {
        let author = if profile.prefers_author(&entry.author) {
            self.weights.author
        } else {
            0.0
        };
        let keyword = self.weights.keyword
            * self.keyword_overlap(keywords, profile.preferred_keywords());
        let year = self.weights.year * year_proximity(entry.year, profile.preferred_years());
        ScoreBreakdown {
            author,
            keyword,
            year,
        }
    }
}

impl Scorer for SimilarityScorer {
    fn score(&self, entry: &CatalogEntry, keywords: &[String], profile: &UserProfile) -> f64 {
        self.breakdown(entry, keywords, profile).total()
    }
}
