//! Title keyword extraction.

use std::collections::HashSet;

use bookmatch_core::{Catalog, KeywordIndex};

/// Shortest fragment, in characters, kept as a keyword.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Extract the keyword set of a title.
///
/// Whitespace-separated tokens containing a digit are dropped. The remaining
/// tokens are lower-cased and split on every non-alphabetic character;
/// fragments longer than two characters are kept, each once, in order of
/// first appearance.
///
/// # Examples
/// ```
/// use bookmatch_data::extract_keywords;
///
/// assert_eq!(
///     extract_keywords("The Lord of the Rings: 50th Anniversary (Rings)"),
///     ["the", "lord", "rings", "anniversary"]
/// );
/// ```
#[must_use]
pub fn extract_keywords(title: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    title
        .split_whitespace()
        .filter(|token| !token.chars().any(char::is_numeric))
        .flat_map(|token| {
            token
                .to_lowercase()
                .split(|ch: char| !ch.is_alphabetic())
                .filter(|fragment| fragment.chars().count() >= MIN_KEYWORD_CHARS)
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}

/// Build the keyword index for every entry of `catalog`.
#[must_use]
pub fn keyword_index(catalog: &Catalog) -> KeywordIndex {
    catalog
        .iter()
        .map(|entry| (entry.isbn.clone(), extract_keywords(&entry.title)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmatch_core::CatalogEntry;
    use rstest::rstest;

    #[rstest]
    #[case("War and Love", &["war", "and", "love"])]
    #[case("War", &["war"])]
    #[case("1990", &[])]
    #[case("  ", &[])]
    #[case("Harry Potter and the Sorcerer's Stone", &["harry", "potter", "and", "the", "sorcerer", "stone"])]
    #[case("Rock-and-Roll Heaven", &["rock", "and", "roll", "heaven"])]
    #[case("Up Up and Away", &["and", "away"])]
    #[case("Love, love, LOVE", &["love"])]
    #[case("Catch-22 Revisited", &["revisited"])]
    #[case("Caf\u{e9} Society", &["caf\u{e9}", "society"])]
    fn extracts_keywords(#[case] title: &str, #[case] expected: &[&str]) {
        assert_eq!(extract_keywords(title), expected);
    }

    #[rstest]
    fn indexes_every_catalog_entry() {
        let catalog = Catalog::new([
            CatalogEntry::new("A", "War and Love", "X", 2000),
            CatalogEntry::new("C", "1990", "X", 1990),
        ]);
        let index = keyword_index(&catalog);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("A"), ["war", "and", "love"]);
        assert!(index.get("C").is_empty());
    }
}
