//! Test helpers that lay out small Book-Crossing datasets on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

const BOOKS: &[u8] = b"\"ISBN\";\"Book-Title\";\"Book-Author\";\"Year-Of-Publication\";\"Publisher\"\n\
\"A\";\"War and Love\";\"X\";\"2000\";\"P\"\n\
\"B\";\"War\";\"Y\";\"2001\";\"P\"\n\
\"C\";\"1990\";\"X\";\"1990\";\"P\"\n\
\"D\";\"Broken row\"\n";

const RATINGS: &[u8] = b"\"User-ID\";\"ISBN\";\"Book-Rating\"\n\
\"reader\";\"A\";\"9\"\n\
\"other\";\"B\";\"4\"\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Books, ratings and an output directory inside one temporary directory.
pub(super) struct Dataset {
    _dir: TempDir,
    pub(super) books: Utf8PathBuf,
    pub(super) ratings: Utf8PathBuf,
    pub(super) output_dir: Utf8PathBuf,
}

impl Dataset {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let books = root.join("books.csv");
        let ratings = root.join("ratings.csv");
        write_utf8(&books, BOOKS);
        write_utf8(&ratings, RATINGS);
        Self {
            _dir: dir,
            books,
            ratings,
            output_dir: root.join("results"),
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        self.output_dir.parent().expect("output dir has a parent")
    }
}
