//! Scored candidates, suggestion lists and consensus rows.

use crate::Isbn;

/// Score marking a candidate as the user's own maximum match.
///
/// Candidates at this score are excluded from suggestions, never ranked.
pub const SENTINEL_SCORE: f64 = 1.0;

/// Absolute tolerance applied when comparing a score against
/// [`SENTINEL_SCORE`].
///
/// Summing the component weights of a perfect match can land one or two
/// ulps away from `1.0`; the tolerance keeps such matches excluded.
pub const SENTINEL_TOLERANCE: f64 = 1e-12;

/// Report whether `score` is the already-owned sentinel.
///
/// # Examples
/// ```
/// use bookmatch_core::is_sentinel;
///
/// assert!(is_sentinel(1.0));
/// assert!(is_sentinel(0.4 + 0.2 + 0.4));
/// assert!(!is_sentinel(0.999));
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "sentinel detection measures the distance to 1.0"
)]
#[must_use]
pub fn is_sentinel(score: f64) -> bool {
    (score - SENTINEL_SCORE).abs() <= SENTINEL_TOLERANCE
}

/// Anything positioned in a ranking by item identifier.
pub trait Ranked {
    /// Identifier of the ranked item.
    fn isbn(&self) -> &Isbn;
}

/// One catalog item scored against one profile under one metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    /// Scored item.
    pub isbn: Isbn,
    /// Similarity score, nominally within `0.0..=1.0`.
    pub score: f64,
}

impl ScoredCandidate {
    /// Build a scored candidate.
    #[must_use]
    pub fn new(isbn: impl Into<Isbn>, score: f64) -> Self {
        Self {
            isbn: isbn.into(),
            score,
        }
    }
}

impl Ranked for ScoredCandidate {
    fn isbn(&self) -> &Isbn {
        &self.isbn
    }
}

/// In how many source rankings a consensus entry appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
pub enum Agreement {
    /// Only one ranking listed the item.
    Single,
    /// Both rankings listed the item.
    Both,
}

impl Agreement {
    /// Numeric agreement count, `1` or `2`.
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Both => 2,
        }
    }
}

impl From<Agreement> for u8 {
    fn from(agreement: Agreement) -> Self {
        agreement.count()
    }
}

/// Raised when decoding an agreement count outside `1..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("agreement count must be 1 or 2, got {0}")]
pub struct InvalidAgreement(pub u8);

impl TryFrom<u8> for Agreement {
    type Error = InvalidAgreement;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(Self::Single),
            2 => Ok(Self::Both),
            other => Err(InvalidAgreement(other)),
        }
    }
}

/// One row of the consensus ("golden") ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldenEntry {
    /// Ranked item.
    pub isbn: Isbn,
    /// Whether both source rankings listed the item.
    pub agreement: Agreement,
    /// Mean of the source scores when both listed it, else the single score.
    pub average_score: f64,
}

impl Ranked for GoldenEntry {
    fn isbn(&self) -> &Isbn {
        &self.isbn
    }
}
