#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the evaluation pipeline with the built-in
//! similarity scorers.

use std::cell::RefCell;

use bookmatch_core::test_support::{sample_catalog, sample_keywords};
use bookmatch_core::{
    Agreement, Catalog, KeywordIndex, Ranked, RatingEvent, RatingHistory, UserId,
};
use bookmatch_rank::{Evaluation, Evaluator};
use bookmatch_scorer::SimilarityScorer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    catalog: RefCell<Catalog>,
    keywords: RefCell<KeywordIndex>,
    history: RefCell<RatingHistory>,
    evaluation: RefCell<Option<Evaluation>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        catalog: RefCell::new(Catalog::default()),
        keywords: RefCell::new(KeywordIndex::new()),
        history: RefCell::new(RatingHistory::default()),
        evaluation: RefCell::new(None),
    }
}

#[given("the sample catalog with similarity scorers")]
fn sample_books(context: &TestContext) {
    *context.catalog.borrow_mut() = sample_catalog();
    *context.keywords.borrow_mut() = sample_keywords();
}

#[given("a reader who rated book A highly")]
fn reader_rates_a(context: &TestContext) {
    *context.history.borrow_mut() = RatingHistory::new([RatingEvent::new("reader", "A", 9.0)]);
}

#[when("the reader is evaluated")]
fn evaluate_reader(context: &TestContext) {
    let evaluator = Evaluator::new(SimilarityScorer::jaccard(), SimilarityScorer::dice());
    let evaluation = evaluator
        .evaluate(
            &UserId::from("reader"),
            &context.history.borrow(),
            &context.catalog.borrow(),
            &context.keywords.borrow(),
        )
        .expect("evaluation should succeed");
    *context.evaluation.borrow_mut() = Some(evaluation);
}

#[then("neither ranking contains book A")]
fn assert_no_a(context: &TestContext) {
    with_evaluation(context, |evaluation| {
        assert!(!isbns(&evaluation.jaccard).contains(&"A"));
        assert!(!isbns(&evaluation.dice).contains(&"A"));
    });
}

#[then("both rankings suggest books B and C")]
fn assert_b_and_c(context: &TestContext) {
    with_evaluation(context, |evaluation| {
        for ranking in [isbns(&evaluation.jaccard), isbns(&evaluation.dice)] {
            let mut sorted = ranking;
            sorted.sort_unstable();
            assert_eq!(sorted, ["B", "C"]);
        }
    });
}

#[then("the jaccard ranking starts with book C")]
fn assert_jaccard_head(context: &TestContext) {
    with_evaluation(context, |evaluation| {
        assert_eq!(isbns(&evaluation.jaccard).first(), Some(&"C"));
    });
}

#[then("the dice ranking starts with book B")]
fn assert_dice_head(context: &TestContext) {
    with_evaluation(context, |evaluation| {
        assert_eq!(isbns(&evaluation.dice).first(), Some(&"B"));
    });
}

#[then("every consensus entry is agreed by both metrics")]
fn assert_consensus(context: &TestContext) {
    with_evaluation(context, |evaluation| {
        assert_eq!(evaluation.golden.len(), 2);
        assert!(
            evaluation
                .golden
                .iter()
                .all(|entry| entry.agreement == Agreement::Both)
        );
    });
}

#[then("the jaccard and dice overlap is 1.0")]
fn assert_full_overlap(context: &TestContext) {
    with_evaluation(context, |evaluation| {
        assert_eq!(evaluation.overlap.jaccard_vs_dice, 1.0);
    });
}

fn with_evaluation(context: &TestContext, check: impl FnOnce(&Evaluation)) {
    let guard = context.evaluation.borrow();
    let evaluation = guard.as_ref().expect("evaluation should have run");
    check(evaluation);
}

fn isbns<T: Ranked>(ranked: &[T]) -> Vec<&str> {
    ranked.iter().map(|item| item.isbn().as_str()).collect()
}

#[scenario(path = "tests/features/evaluation.feature", index = 0)]
fn favourite_is_not_suggested(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/evaluation.feature", index = 1)]
fn metrics_disagree_on_order(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/evaluation.feature", index = 2)]
fn shared_rankings_overlap_fully(context: TestContext) {
    let _ = context;
}
