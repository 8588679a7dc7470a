//! Plain-text suggestion reports, one file per user and ranking.

use std::fmt;

use bookmatch_core::{Catalog, Ranked};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8;
use log::{debug, warn};

use crate::DataError;
use crate::fs::create_dir_all;

/// Ranking a report file describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Suggestions under the Jaccard scorer.
    Jaccard,
    /// Suggestions under the Dice scorer.
    Dice,
    /// Consensus of the two suggestion lists.
    Golden,
}

impl ReportKind {
    /// Lower-case tag used in file names.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Jaccard => "jaccard",
            Self::Dice => "dice",
            Self::Golden => "golden",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// File name of the `kind` report for the user at `index` in the sample.
///
/// # Examples
/// ```
/// use bookmatch_data::{ReportKind, report_file_name};
///
/// assert_eq!(report_file_name(0, ReportKind::Jaccard), "user-0-jaccard.txt");
/// ```
#[must_use]
pub fn report_file_name(index: usize, kind: ReportKind) -> String {
    format!("user-{index}-{kind}.txt")
}

/// Render a ranking as two lines per item, resolving details from `catalog`.
///
/// Items missing from the catalog are left out.
#[must_use]
pub fn render_report<R: Ranked>(items: &[R], catalog: &Catalog) -> String {
    let mut out = String::new();
    for item in items {
        let Some(entry) = catalog.get(item.isbn().as_str()) else {
            warn!("Report omits {}: not in the catalog", item.isbn());
            continue;
        };
        out.push_str(&format!(
            "ISBN: {} \t with title: {}\nAuthor is: {} and year is {}\n",
            entry.isbn, entry.title, entry.author, entry.year
        ));
    }
    out
}

/// Writes report files into one output directory.
pub struct ReportWriter {
    dir: fs_utf8::Dir,
    root: Utf8PathBuf,
}

impl ReportWriter {
    /// Open `root` for writing, creating it and its ancestors when missing.
    ///
    /// # Errors
    /// Returns [`DataError::CreateDir`] when the directory cannot be
    /// created or opened.
    pub fn create(root: &Utf8Path) -> Result<Self, DataError> {
        let dir = create_dir_all(root).map_err(|source| DataError::CreateDir {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self {
            dir,
            root: root.to_path_buf(),
        })
    }

    /// Directory reports are written to.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write the `kind` report for the user at `index`, replacing any
    /// previous file, and return its path.
    ///
    /// # Errors
    /// Returns [`DataError::WriteReport`] when the file cannot be written.
    pub fn write<R: Ranked>(
        &self,
        index: usize,
        kind: ReportKind,
        items: &[R],
        catalog: &Catalog,
    ) -> Result<Utf8PathBuf, DataError> {
        let name = report_file_name(index, kind);
        let path = self.root.join(&name);
        self.dir
            .write(&name, render_report(items, catalog))
            .map_err(|source| DataError::WriteReport {
                path: path.clone(),
                source,
            })?;
        debug!("Wrote {} items to {path}", items.len());
        Ok(path)
    }
}
