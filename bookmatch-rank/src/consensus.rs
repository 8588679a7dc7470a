//! Consensus ("golden") ranking merged from two suggestion lists.

use std::collections::{HashMap, HashSet};

use bookmatch_core::{Agreement, GoldenEntry, Isbn, ScoredCandidate};

/// Merge the Jaccard and Dice suggestion lists into one consensus ranking.
///
/// Every item listed by either input appears exactly once. Items listed by
/// both carry [`Agreement::Both`] and the mean of their two scores; the rest
/// carry [`Agreement::Single`] and their one score. The result is ordered by
/// agreement, then by average score, both descending. The sort is stable:
/// ties keep Jaccard items before Dice-only items, each in input order.
///
/// # Examples
/// ```
/// use bookmatch_core::{Agreement, ScoredCandidate};
/// use bookmatch_rank::build_golden;
///
/// let jaccard = [ScoredCandidate::new("A", 0.6), ScoredCandidate::new("B", 0.5)];
/// let dice = [ScoredCandidate::new("B", 0.7), ScoredCandidate::new("C", 0.9)];
/// let golden = build_golden(&jaccard, &dice);
///
/// let rows: Vec<_> = golden
///     .iter()
///     .map(|entry| (entry.isbn.as_str(), entry.agreement))
///     .collect();
/// assert_eq!(
///     rows,
///     [("B", Agreement::Both), ("C", Agreement::Single), ("A", Agreement::Single)]
/// );
/// ```
#[must_use]
pub fn build_golden(jaccard: &[ScoredCandidate], dice: &[ScoredCandidate]) -> Vec<GoldenEntry> {
    let mut dice_scores: HashMap<&Isbn, f64> = HashMap::with_capacity(dice.len());
    for candidate in dice {
        dice_scores.entry(&candidate.isbn).or_insert(candidate.score);
    }

    let mut placed: HashSet<&Isbn> = HashSet::with_capacity(jaccard.len() + dice.len());
    let mut golden = Vec::with_capacity(jaccard.len() + dice.len());

    for candidate in jaccard {
        if !placed.insert(&candidate.isbn) {
            continue;
        }
        let entry = match dice_scores.get(&candidate.isbn) {
            Some(&dice_score) => GoldenEntry {
                isbn: candidate.isbn.clone(),
                agreement: Agreement::Both,
                average_score: mean(candidate.score, dice_score),
            },
            None => single(candidate),
        };
        golden.push(entry);
    }

    for candidate in dice {
        if placed.insert(&candidate.isbn) {
            golden.push(single(candidate));
        }
    }

    golden.sort_by(|left, right| {
        right
            .agreement
            .cmp(&left.agreement)
            .then_with(|| right.average_score.total_cmp(&left.average_score))
    });
    golden
}

fn single(candidate: &ScoredCandidate) -> GoldenEntry {
    GoldenEntry {
        isbn: candidate.isbn.clone(),
        agreement: Agreement::Single,
        average_score: candidate.score,
    }
}

#[expect(clippy::float_arithmetic, reason = "consensus averages two scores")]
fn mean(first: f64, second: f64) -> f64 {
    (first + second) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ranking(scores: &[(&str, f64)]) -> Vec<ScoredCandidate> {
        scores
            .iter()
            .map(|&(isbn, score)| ScoredCandidate::new(isbn, score))
            .collect()
    }

    #[rstest]
    fn shared_items_are_averaged_and_ranked_first() {
        let jaccard = ranking(&[("A", 0.4), ("B", 0.8)]);
        let dice = ranking(&[("A", 0.6), ("C", 0.95)]);
        let golden = build_golden(&jaccard, &dice);

        let first = golden.first().expect("golden ranking should not be empty");
        assert_eq!(first.isbn.as_str(), "A");
        assert_eq!(first.agreement, Agreement::Both);
        assert_eq!(first.average_score, 0.5);

        let rest: Vec<_> = golden.iter().skip(1).map(|e| e.isbn.as_str()).collect();
        assert_eq!(rest, ["C", "B"]);

        let dice_only = golden
            .iter()
            .find(|entry| entry.isbn.as_str() == "C")
            .expect("C comes from the dice list");
        assert_eq!(dice_only.agreement, Agreement::Single);
        assert_eq!(dice_only.average_score, 0.95);
    }

    #[rstest]
    fn every_input_item_appears_once() {
        let jaccard = ranking(&[("A", 0.4), ("B", 0.8), ("C", 0.3)]);
        let dice = ranking(&[("C", 0.2), ("D", 0.1), ("A", 0.5)]);
        let golden = build_golden(&jaccard, &dice);

        let mut isbns: Vec<_> = golden.iter().map(|e| e.isbn.as_str()).collect();
        isbns.sort_unstable();
        assert_eq!(isbns, ["A", "B", "C", "D"]);
    }

    #[rstest]
    fn ties_keep_jaccard_items_first() {
        let jaccard = ranking(&[("A", 0.5)]);
        let dice = ranking(&[("B", 0.5)]);
        let golden = build_golden(&jaccard, &dice);
        let isbns: Vec<_> = golden.iter().map(|e| e.isbn.as_str()).collect();
        assert_eq!(isbns, ["A", "B"]);
    }

    #[rstest]
    fn empty_inputs_give_empty_consensus() {
        assert!(build_golden(&[], &[]).is_empty());
    }
}
