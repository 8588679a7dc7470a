//! Named similarity metrics and their component weights.
#![forbid(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ScorerError;

/// Keyword overlap formula and weight preset used by a scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Jaccard keyword overlap; weights author 0.4, keyword 0.2, year 0.4.
    Jaccard,
    /// Dice keyword overlap; weights author 0.3, keyword 0.5, year 0.2.
    Dice,
}

impl Metric {
    /// Fixed weight preset for the metric.
    ///
    /// # Examples
    /// ```
    /// use bookmatch_scorer::Metric;
    ///
    /// let weights = Metric::Dice.weights();
    /// assert_eq!((weights.author, weights.keyword, weights.year), (0.3, 0.5, 0.2));
    /// ```
    #[must_use]
    pub const fn weights(self) -> MetricWeights {
        match self {
            Self::Jaccard => MetricWeights {
                author: 0.4,
                keyword: 0.2,
                year: 0.4,
            },
            Self::Dice => MetricWeights {
                author: 0.3,
                keyword: 0.5,
                year: 0.2,
            },
        }
    }

    /// Lower-case name used in reports and file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jaccard => "jaccard",
            Self::Dice => "dice",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative weighting of the author, keyword and year components.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricWeights {
    /// Awarded in full when the item's author is a preferred author.
    pub author: f64,
    /// Multiplier applied to the keyword overlap.
    pub keyword: f64,
    /// Multiplier applied to the closest-year proximity.
    pub year: f64,
}

impl MetricWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when any weight is negative or
    /// not finite, or when the weights sum to zero.
    pub fn validate(self) -> Result<Self, ScorerError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerError::InvalidWeights)
        }
    }

    /// Sum of the three weights.
    #[expect(
        clippy::float_arithmetic,
        reason = "the total weight bounds the maximum score"
    )]
    #[must_use]
    pub fn total(self) -> f64 {
        self.author + self.keyword + self.year
    }

    fn is_valid(self) -> bool {
        let parts = [self.author, self.keyword, self.year];
        parts.iter().all(|w| w.is_finite() && *w >= 0.0) && self.total() > 0.0
    }
}
