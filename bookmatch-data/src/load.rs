//! Loaders for the semicolon-delimited, Latin-1 encoded Book-Crossing files.
//!
//! Every file starts with a header row. Rows that cannot be interpreted are
//! skipped with a warning and counted in the [`LoadReport`]; only I/O
//! failures abort a load.

use std::collections::HashSet;
use std::io::Read;

use bookmatch_core::{Catalog, CatalogEntry, RatingEvent, RatingHistory, UserId};
use camino::{Utf8Path, Utf8PathBuf};
use log::{info, warn};
use thiserror::Error;

use crate::DataError;
use crate::fs::open_utf8_file;

/// Field separator used by the Book-Crossing exports.
pub const DELIMITER: u8 = b';';

/// Outcome counts for one loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Source the rows were read from.
    pub source: Utf8PathBuf,
    /// Rows turned into domain values.
    pub accepted: usize,
    /// Malformed rows that were skipped.
    pub skipped: usize,
}

/// Loaded domain value together with its [`LoadReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    /// Parsed value.
    pub data: T,
    /// Row counts for the load.
    pub report: LoadReport,
}

#[derive(Debug, Error)]
enum RowError {
    #[error("missing {0} column")]
    Missing(&'static str),
    #[error("empty {0}")]
    Empty(&'static str),
    #[error("{field} {value:?} is not a number")]
    NotNumeric { field: &'static str, value: String },
}

/// Load the book catalog from `path`.
///
/// Columns: ISBN, title, author, year of publication; further columns are
/// ignored. Rows without an ISBN or author, or with a non-integer year, are
/// skipped. Repeated ISBNs keep their first row and the later rows count
/// as skipped.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened or read.
pub fn load_books(path: &Utf8Path) -> Result<Loaded<Catalog>, DataError> {
    read_books(open(path)?, path)
}

/// Read a book catalog from any reader; `source` labels logs and errors.
///
/// # Errors
/// Returns [`DataError::Read`] when the underlying reader fails.
pub fn read_books<R: Read>(reader: R, source: &Utf8Path) -> Result<Loaded<Catalog>, DataError> {
    let (entries, mut report) = read_rows(reader, source, parse_book)?;
    let rows = entries.len();
    let catalog = Catalog::new(entries);
    let repeated = rows.saturating_sub(catalog.len());
    if repeated > 0 {
        warn!("Skipping {repeated} repeated ISBN rows in {source}");
        report.accepted = catalog.len();
        report.skipped = report.skipped.saturating_add(repeated);
    }
    Ok(Loaded {
        data: catalog,
        report,
    })
}

/// Load the rating history from `path`.
///
/// Columns: user id, ISBN, rating. Rows with an empty user or ISBN, or a
/// rating that is not a finite number, are skipped.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened or read.
pub fn load_ratings(path: &Utf8Path) -> Result<Loaded<RatingHistory>, DataError> {
    read_ratings(open(path)?, path)
}

/// Read a rating history from any reader; `source` labels logs and errors.
///
/// # Errors
/// Returns [`DataError::Read`] when the underlying reader fails.
pub fn read_ratings<R: Read>(
    reader: R,
    source: &Utf8Path,
) -> Result<Loaded<RatingHistory>, DataError> {
    let (events, report) = read_rows(reader, source, parse_rating)?;
    Ok(Loaded {
        data: RatingHistory::new(events),
        report,
    })
}

/// Load user identifiers from the first column of `path`.
///
/// Duplicates are dropped, keeping first-seen order.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened or read.
pub fn load_users(path: &Utf8Path) -> Result<Loaded<Vec<UserId>>, DataError> {
    read_users(open(path)?, path)
}

/// Read user identifiers from any reader; `source` labels logs and errors.
///
/// # Errors
/// Returns [`DataError::Read`] when the underlying reader fails.
pub fn read_users<R: Read>(reader: R, source: &Utf8Path) -> Result<Loaded<Vec<UserId>>, DataError> {
    let (mut users, report) = read_rows(reader, source, parse_user)?;
    let mut seen = HashSet::with_capacity(users.len());
    users.retain(|user| seen.insert(user.clone()));
    Ok(Loaded {
        data: users,
        report,
    })
}

/// Decode ISO-8859-1 bytes; every byte maps to the code point of equal value.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn open(path: &Utf8Path) -> Result<cap_std::fs_utf8::File, DataError> {
    open_utf8_file(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows<R, T, F>(
    reader: R,
    source: &Utf8Path,
    mut parse: F,
) -> Result<(Vec<T>, LoadReport), DataError>
where
    R: Read,
    F: FnMut(&[String]) -> Result<T, RowError>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0_usize;
    for result in csv_reader.byte_records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => {
                return Err(DataError::Read {
                    path: source.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!("Skipped malformed row in {source}: {err}");
                skipped += 1;
                continue;
            }
        };
        let fields: Vec<String> = record.iter().map(decode_latin1).collect();
        match parse(&fields) {
            Ok(row) => rows.push(row),
            Err(err) => {
                let line = record.position().map_or(0, csv::Position::line);
                warn!("Skipped row at {source}:{line}: {err}");
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} rows from {source} ({skipped} skipped)",
        rows.len()
    );
    let report = LoadReport {
        source: source.to_path_buf(),
        accepted: rows.len(),
        skipped,
    };
    Ok((rows, report))
}

fn field<'a>(fields: &'a [String], index: usize, name: &'static str) -> Result<&'a str, RowError> {
    fields
        .get(index)
        .map(|value| value.trim())
        .ok_or(RowError::Missing(name))
}

fn required<'a>(
    fields: &'a [String],
    index: usize,
    name: &'static str,
) -> Result<&'a str, RowError> {
    let value = field(fields, index, name)?;
    if value.is_empty() {
        return Err(RowError::Empty(name));
    }
    Ok(value)
}

fn parse_book(fields: &[String]) -> Result<CatalogEntry, RowError> {
    let isbn = required(fields, 0, "ISBN")?;
    let title = field(fields, 1, "title")?;
    let author = required(fields, 2, "author")?;
    let year_text = field(fields, 3, "year")?;
    let year = year_text
        .parse::<i32>()
        .map_err(|_| RowError::NotNumeric {
            field: "year",
            value: year_text.to_owned(),
        })?;
    Ok(CatalogEntry::new(isbn, title, author, year))
}

fn parse_rating(fields: &[String]) -> Result<RatingEvent, RowError> {
    let user = required(fields, 0, "user")?;
    let isbn = required(fields, 1, "ISBN")?;
    let rating_text = field(fields, 2, "rating")?;
    let rating = rating_text
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| RowError::NotNumeric {
            field: "rating",
            value: rating_text.to_owned(),
        })?;
    Ok(RatingEvent::new(user, isbn, rating))
}

fn parse_user(fields: &[String]) -> Result<UserId, RowError> {
    required(fields, 0, "user").map(UserId::from)
}
