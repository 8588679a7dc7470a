//! Error types produced while loading inputs and writing reports.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by the data loaders and the report writer.
///
/// Malformed rows are not errors: they are skipped and counted in the
/// [`LoadReport`](crate::LoadReport). Only unreadable sources and unwritable
/// destinations surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// The input file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading records from the input failed part-way.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying reader error.
        #[source]
        source: csv::Error,
    },
    /// The report directory could not be created or opened.
    #[error("failed to prepare output directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be prepared.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A report file could not be written.
    #[error("failed to write report {path}: {source}")]
    WriteReport {
        /// Report file that could not be written.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
