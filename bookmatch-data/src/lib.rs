//! Data access for the bookmatch engine.
//!
//! Responsibilities:
//! - Load the book catalog, rating history and user list from the
//!   semicolon-delimited, Latin-1 encoded Book-Crossing exports.
//! - Derive title keywords for the catalog.
//! - Draw reproducible user samples.
//! - Write per-user suggestion reports.
//!
//! Boundaries:
//! - Scoring and ranking rules live in `bookmatch-scorer` and
//!   `bookmatch-rank`; this crate only moves data in and out.
//!
//! Invariants:
//! - Malformed rows never abort a load; they are skipped, logged and counted.

#![forbid(unsafe_code)]

mod error;
mod fs;
mod keywords;
mod load;
mod report;
mod sample;

pub use error::DataError;
pub use keywords::{MIN_KEYWORD_CHARS, extract_keywords, keyword_index};
pub use load::{
    DELIMITER, LoadReport, Loaded, decode_latin1, load_books, load_ratings, load_users,
    read_books, read_ratings, read_users,
};
pub use report::{ReportKind, ReportWriter, render_report, report_file_name};
pub use sample::{DEFAULT_SAMPLE_SIZE, sample_users};
