#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the Book-Crossing file loaders.

use std::cell::RefCell;

use bookmatch_core::Catalog;
use bookmatch_data::{DataError, LoadReport, keyword_index, load_books, load_ratings};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

const HEADER: &[u8] = b"\"ISBN\";\"Book-Title\";\"Book-Author\";\"Year-Of-Publication\";\"Publisher\"\n";

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    dir: TempDir,
    path: RefCell<Option<Utf8PathBuf>>,
    catalog: RefCell<Option<(Catalog, LoadReport)>>,
    error: RefCell<Option<DataError>>,
}

#[fixture]
/// Build a fresh `TestContext` backed by its own temporary directory.
pub fn context() -> TestContext {
    TestContext {
        dir: TempDir::new().expect("create temp dir"),
        path: RefCell::new(None),
        catalog: RefCell::new(None),
        error: RefCell::new(None),
    }
}

fn write_file(context: &TestContext, name: &str, rows: &[u8]) {
    let path = Utf8PathBuf::from_path_buf(context.dir.path().join(name))
        .expect("temp dir should be UTF-8");
    let mut contents = HEADER.to_vec();
    contents.extend_from_slice(rows);
    std::fs::write(&path, contents).expect("write fixture file");
    *context.path.borrow_mut() = Some(path);
}

fn path(context: &TestContext) -> Utf8PathBuf {
    context
        .path
        .borrow()
        .clone()
        .expect("a file path should have been prepared")
}

#[given("a books file with two valid rows and one without an author")]
fn books_with_gap(context: &TestContext) {
    write_file(
        context,
        "books.csv",
        b"\"A\";\"War and Love\";\"X\";\"2000\";\"P\"\n\
\"B\";\"War\";\"\";\"2001\";\"P\"\n\
\"C\";\"1990\";\"X\";\"1990\";\"P\"\n",
    );
}

#[given("a books file with a Latin-1 encoded title")]
fn latin1_books(context: &TestContext) {
    write_file(
        context,
        "books.csv",
        b"\"A\";\"Caf\xe9 Society\";\"X\";\"2000\";\"P\"\n",
    );
}

#[given("no ratings file exists")]
fn missing_ratings(context: &TestContext) {
    let missing = Utf8PathBuf::from_path_buf(context.dir.path().join("ratings.csv"))
        .expect("temp dir should be UTF-8");
    *context.path.borrow_mut() = Some(missing);
}

#[when("the books file is loaded")]
fn load_books_file(context: &TestContext) {
    let loaded = load_books(&path(context)).expect("books should load");
    *context.catalog.borrow_mut() = Some((loaded.data, loaded.report));
}

#[when("the ratings file is loaded")]
fn load_ratings_file(context: &TestContext) {
    let err = load_ratings(&path(context)).expect_err("loading should fail");
    *context.error.borrow_mut() = Some(err);
}

#[then("the catalog holds two books")]
fn two_books(context: &TestContext) {
    let guard = context.catalog.borrow();
    let (catalog, _) = guard.as_ref().expect("catalog should be loaded");
    assert_eq!(catalog.len(), 2);
    assert!(!catalog.contains("B"));
}

#[then("one row is reported as skipped")]
fn one_skipped(context: &TestContext) {
    let guard = context.catalog.borrow();
    let (_, report) = guard.as_ref().expect("catalog should be loaded");
    assert_eq!(report.skipped, 1);
    assert_eq!(report.accepted, 2);
}

#[then("the title keywords include the accented word")]
fn accented_keyword(context: &TestContext) {
    let guard = context.catalog.borrow();
    let (catalog, _) = guard.as_ref().expect("catalog should be loaded");
    let entry = catalog.get("A").expect("book A should be loaded");
    assert_eq!(entry.title, "Caf\u{e9} Society");
    let keywords = keyword_index(catalog);
    assert_eq!(keywords.get("A"), ["caf\u{e9}", "society"]);
}

#[then("loading fails with an open error")]
fn open_error(context: &TestContext) {
    let guard = context.error.borrow();
    let err = guard.as_ref().expect("an error should be recorded");
    assert!(matches!(err, DataError::Open { .. }), "unexpected error: {err}");
}

#[scenario(path = "tests/features/loading.feature", index = 0)]
fn malformed_rows_are_skipped(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/loading.feature", index = 1)]
fn latin1_titles_decode(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/loading.feature", index = 2)]
fn missing_file_is_fatal(context: TestContext) {
    let _ = context;
}
