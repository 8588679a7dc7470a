//! Prefix overlap between two rankings.
//!
//! For each prefix length `k` the overlap is the share of the first `k`
//! items of one ranking that also appear among the first `k` items of the
//! other. When a ranking is shorter than `k` its whole length is used.

use std::collections::HashSet;

use bookmatch_core::{Isbn, Ranked};

/// Default prefix depth used when comparing two rankings.
pub const DEFAULT_OVERLAP_DEPTH: usize = 10;

/// Prefix depth actually evaluated for lists of the given lengths.
///
/// Depths beyond the longer list add no information, so they are clipped.
/// Two empty lists yield an effective depth of zero.
#[must_use]
pub fn effective_depth(depth: usize, len_a: usize, len_b: usize) -> usize {
    depth.min(len_a.max(len_b))
}

/// Overlap fraction at every prefix length `1..=effective_depth`.
///
/// # Examples
/// ```
/// use bookmatch_core::ScoredCandidate;
/// use bookmatch_rank::overlap_curve;
///
/// let a = [ScoredCandidate::new("A", 0.9), ScoredCandidate::new("B", 0.8)];
/// let b = [ScoredCandidate::new("B", 0.7), ScoredCandidate::new("A", 0.6)];
/// assert_eq!(overlap_curve(&a, &b, 10), vec![0.0, 1.0]);
/// ```
#[must_use]
pub fn overlap_curve<A: Ranked, B: Ranked>(a: &[A], b: &[B], depth: usize) -> Vec<f64> {
    let limit = effective_depth(depth, a.len(), b.len());
    let mut seen_a: HashSet<&Isbn> = HashSet::with_capacity(limit);
    let mut seen_b: HashSet<&Isbn> = HashSet::with_capacity(limit);
    let mut shared = 0_usize;

    (1..=limit)
        .map(|k| {
            if let Some(item) = a.get(k - 1) {
                let isbn = item.isbn();
                if seen_a.insert(isbn) && seen_b.contains(isbn) {
                    shared += 1;
                }
            }
            if let Some(item) = b.get(k - 1) {
                let isbn = item.isbn();
                if seen_b.insert(isbn) && seen_a.contains(isbn) {
                    shared += 1;
                }
            }
            fraction(shared, k)
        })
        .collect()
}

/// Overlap fraction at the effective depth.
///
/// Returns `0.0` when the effective depth is zero, that is when `depth` is
/// zero or both rankings are empty.
#[must_use]
pub fn overlap<A: Ranked, B: Ranked>(a: &[A], b: &[B], depth: usize) -> f64 {
    overlap_curve(a, b, depth).last().copied().unwrap_or(0.0)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ranking prefixes are tiny, so the counts convert exactly"
)]
fn fraction(shared: usize, k: usize) -> f64 {
    shared as f64 / k as f64
}
