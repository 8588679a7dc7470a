//! Core domain types for the bookmatch engine.
//!
//! The crate holds the read-only inputs of an evaluation (catalog, keyword
//! index, rating history), the per-user taste profile and its builder, the
//! ranked outputs, and the [`Scorer`] seam that similarity metrics plug into.
//! Everything here is a pure function over immutable inputs; nothing is
//! retained between users.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod ids;
pub mod profile;
mod rating;
mod ranking;
mod scorer;
mod selection;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{Catalog, CatalogEntry, KeywordIndex};
pub use ids::{Isbn, UserId};
pub use profile::{Favorite, MAX_FAVORITES, ProfileBuilder, UserProfile};
pub use ranking::{
    Agreement, GoldenEntry, InvalidAgreement, Ranked, SENTINEL_SCORE, SENTINEL_TOLERANCE,
    ScoredCandidate, is_sentinel,
};
pub use rating::{RatingEvent, RatingHistory};
pub use scorer::Scorer;
pub use selection::{SelectionStrategy, UnknownStrategy, select_best};
