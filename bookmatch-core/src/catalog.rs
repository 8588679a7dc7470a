//! The recommendable catalogue and the keyword sets derived from its titles.

use std::collections::HashMap;

use crate::Isbn;

/// A single recommendable book.
///
/// # Examples
/// ```
/// use bookmatch_core::CatalogEntry;
///
/// let entry = CatalogEntry::new("0195153448", "Classical Mythology", "Mark P. O. Morford", 2002);
/// assert_eq!(entry.year, 2002);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    /// Item identifier.
    pub isbn: Isbn,
    /// Human-readable title, used only for reports.
    pub title: String,
    /// Author name, compared verbatim.
    pub author: String,
    /// Year of publication.
    pub year: i32,
}

impl CatalogEntry {
    /// Build an entry from its parts.
    #[must_use]
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

/// Ordered, read-only collection of catalog entries.
///
/// Iteration follows insertion order, which is the "catalog order" used to
/// break ties during selection. Duplicate ISBNs keep their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    positions: HashMap<Isbn, usize>,
}

impl Catalog {
    /// Build a catalog, discarding later duplicates of an ISBN.
    ///
    /// # Examples
    /// ```
    /// use bookmatch_core::{Catalog, CatalogEntry};
    ///
    /// let catalog = Catalog::new([
    ///     CatalogEntry::new("A", "War and Love", "X", 2000),
    ///     CatalogEntry::new("A", "Duplicate", "Y", 1999),
    /// ]);
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.get("A").map(|e| e.author.as_str()), Some("X"));
    /// ```
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Self::default();
        for entry in entries {
            if catalog.positions.contains_key(&entry.isbn) {
                continue;
            }
            catalog
                .positions
                .insert(entry.isbn.clone(), catalog.entries.len());
            catalog.entries.push(entry);
        }
        catalog
    }

    /// Look up an entry by ISBN.
    #[must_use]
    pub fn get(&self, isbn: &str) -> Option<&CatalogEntry> {
        self.positions
            .get(isbn)
            .and_then(|&position| self.entries.get(position))
    }

    /// Report whether the catalog contains an ISBN.
    #[must_use]
    pub fn contains(&self, isbn: &str) -> bool {
        self.positions.contains_key(isbn)
    }

    /// Iterate over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Normalised title keywords keyed by ISBN.
///
/// The engine only tests membership and counts; it never re-derives keywords
/// from titles. Items without an entry behave as if their keyword set were
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordIndex {
    keywords: HashMap<Isbn, Vec<String>>,
}

impl KeywordIndex {
    /// Construct an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the keyword set for an item.
    pub fn insert(&mut self, isbn: impl Into<Isbn>, keywords: Vec<String>) {
        self.keywords.insert(isbn.into(), keywords);
    }

    /// Add a keyword set while returning `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use bookmatch_core::KeywordIndex;
    ///
    /// let index = KeywordIndex::new().with_keywords("A", ["war", "love"]);
    /// assert_eq!(index.get("A"), ["war", "love"]);
    /// assert!(index.get("missing").is_empty());
    /// ```
    #[must_use]
    pub fn with_keywords<I, S>(mut self, isbn: impl Into<Isbn>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(isbn, keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Keywords for an item; empty when the item is unknown.
    #[must_use]
    pub fn get(&self, isbn: &str) -> &[String] {
        self.keywords
            .get(isbn)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of items with a recorded keyword set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Report whether no keyword sets are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl FromIterator<(Isbn, Vec<String>)> for KeywordIndex {
    fn from_iter<T: IntoIterator<Item = (Isbn, Vec<String>)>>(iter: T) -> Self {
        Self {
            keywords: iter.into_iter().collect(),
        }
    }
}
