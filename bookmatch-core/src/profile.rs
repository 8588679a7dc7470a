//! Taste profiles derived from a user's highest-rated catalog items.
//!
//! A profile aggregates the authors, publication years and title keywords of
//! at most [`MAX_FAVORITES`] favourite items. The aggregated lists keep
//! duplicates: two favourites by the same author list that author twice. The
//! scorer only tests membership against these lists, but the keyword list's
//! length feeds the Dice denominator, so duplicates are observable there.

use crate::{Catalog, Isbn, KeywordIndex, RatingHistory, SelectionStrategy, UserId, select_best};

/// Upper bound on the number of favourites a profile is built from.
pub const MAX_FAVORITES: usize = 3;

/// One of a user's top-rated items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Favorite {
    /// Rated item.
    pub isbn: Isbn,
    /// The user's rating of the item.
    pub rating: f64,
}

/// Aggregated author, year and keyword preferences of one user.
///
/// # Examples
/// ```
/// use bookmatch_core::UserProfile;
///
/// let profile = UserProfile::new()
///     .with_author("X")
///     .with_year(2000)
///     .with_keywords(["war", "love"]);
/// assert!(profile.prefers_author("X"));
/// assert_eq!(profile.preferred_keywords(), ["war", "love"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    favorites: Vec<Favorite>,
    preferred_authors: Vec<String>,
    preferred_years: Vec<i32>,
    preferred_keywords: Vec<String>,
}

impl UserProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Favourites the profile was derived from.
    #[must_use]
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Authors of the favourites, duplicates retained.
    #[must_use]
    pub fn preferred_authors(&self) -> &[String] {
        &self.preferred_authors
    }

    /// Publication years of the favourites.
    #[must_use]
    pub fn preferred_years(&self) -> &[i32] {
        &self.preferred_years
    }

    /// Concatenated keyword sets of the favourites, not de-duplicated.
    #[must_use]
    pub fn preferred_keywords(&self) -> &[String] {
        &self.preferred_keywords
    }

    /// Report whether `author` appears among the preferred authors.
    #[must_use]
    pub fn prefers_author(&self, author: &str) -> bool {
        self.preferred_authors.iter().any(|known| known == author)
    }

    /// Report whether the profile carries no preferences at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferred_authors.is_empty()
            && self.preferred_years.is_empty()
            && self.preferred_keywords.is_empty()
    }

    /// Add a preferred author while returning `self` for chaining.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.preferred_authors.push(author.into());
        self
    }

    /// Add a preferred year while returning `self` for chaining.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.preferred_years.push(year);
        self
    }

    /// Append preferred keywords while returning `self` for chaining.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_keywords
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Derive the aggregated preferences of the given favourites.
    ///
    /// Favourites missing from the catalog are dropped.
    #[must_use]
    pub fn from_favorites(
        favorites: Vec<Favorite>,
        catalog: &Catalog,
        keywords: &KeywordIndex,
    ) -> Self {
        let mut profile = Self::default();
        for favorite in favorites {
            let Some(entry) = catalog.get(favorite.isbn.as_str()) else {
                continue;
            };
            profile.preferred_authors.push(entry.author.clone());
            profile.preferred_years.push(entry.year);
            profile
                .preferred_keywords
                .extend(keywords.get(entry.isbn.as_str()).iter().cloned());
            profile.favorites.push(favorite);
        }
        profile
    }
}

/// Builds [`UserProfile`]s from rating histories.
///
/// # Examples
/// ```
/// use bookmatch_core::{
///     Catalog, CatalogEntry, KeywordIndex, ProfileBuilder, RatingEvent, RatingHistory, UserId,
/// };
///
/// let catalog = Catalog::new([CatalogEntry::new("A", "War and Love", "X", 2000)]);
/// let keywords = KeywordIndex::new().with_keywords("A", ["war", "love"]);
/// let history = RatingHistory::new([
///     RatingEvent::new("u1", "A", 9.0),
///     RatingEvent::new("u1", "not-in-catalog", 10.0),
/// ]);
///
/// let profile = ProfileBuilder::default().build(&UserId::from("u1"), &history, &catalog, &keywords);
/// assert_eq!(profile.favorites().len(), 1);
/// assert_eq!(profile.preferred_years(), [2000]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileBuilder {
    strategy: SelectionStrategy,
}

impl ProfileBuilder {
    /// Construct a builder using the given favourite selection strategy.
    #[must_use]
    pub const fn new(strategy: SelectionStrategy) -> Self {
        Self { strategy }
    }

    /// Selection strategy for the favourites buffer.
    #[must_use]
    pub const fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Pick the user's favourites among ratings of catalog items.
    #[must_use]
    pub fn favorites(
        &self,
        user: &UserId,
        history: &RatingHistory,
        catalog: &Catalog,
    ) -> Vec<Favorite> {
        let qualifying = history
            .for_user(user)
            .filter(|event| catalog.contains(event.isbn.as_str()))
            .map(|event| Favorite {
                isbn: event.isbn.clone(),
                rating: event.rating,
            });
        select_best(qualifying, MAX_FAVORITES, self.strategy, |favorite| {
            favorite.rating
        })
    }

    /// Build the profile of `user`.
    ///
    /// Users without qualifying ratings get an empty profile rather than an
    /// error.
    #[must_use]
    pub fn build(
        &self,
        user: &UserId,
        history: &RatingHistory,
        catalog: &Catalog,
        keywords: &KeywordIndex,
    ) -> UserProfile {
        let favorites = self.favorites(user, history, catalog);
        UserProfile::from_favorites(favorites, catalog, keywords)
    }
}
