//! Rating events and the per-user history index.

use std::collections::{HashMap, HashSet};

use crate::{Isbn, UserId};

/// One user's rating of one item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingEvent {
    /// Who rated.
    pub user: UserId,
    /// What was rated.
    pub isbn: Isbn,
    /// Rating on the source's scale; only ordering matters.
    pub rating: f64,
}

impl RatingEvent {
    /// Build a rating event.
    #[must_use]
    pub fn new(user: impl Into<UserId>, isbn: impl Into<Isbn>, rating: f64) -> Self {
        Self {
            user: user.into(),
            isbn: isbn.into(),
            rating,
        }
    }
}

/// All rating events, in source order, with an index by user.
///
/// # Examples
/// ```
/// use bookmatch_core::{RatingEvent, RatingHistory, UserId};
///
/// let history = RatingHistory::new([
///     RatingEvent::new("u1", "A", 9.0),
///     RatingEvent::new("u2", "B", 5.0),
///     RatingEvent::new("u1", "C", 3.0),
/// ]);
/// let isbns: Vec<_> = history
///     .for_user(&UserId::from("u1"))
///     .map(|event| event.isbn.as_str())
///     .collect();
/// assert_eq!(isbns, ["A", "C"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingHistory {
    events: Vec<RatingEvent>,
    by_user: HashMap<UserId, Vec<usize>>,
}

impl RatingHistory {
    /// Index a sequence of rating events.
    pub fn new<I>(events: I) -> Self
    where
        I: IntoIterator<Item = RatingEvent>,
    {
        let ordered: Vec<RatingEvent> = events.into_iter().collect();
        let mut by_user: HashMap<UserId, Vec<usize>> = HashMap::new();
        for (position, event) in ordered.iter().enumerate() {
            by_user
                .entry(event.user.clone())
                .or_default()
                .push(position);
        }
        Self {
            events: ordered,
            by_user,
        }
    }

    /// Iterate over one user's ratings in source order.
    pub fn for_user<'a>(
        &'a self,
        user: &UserId,
    ) -> impl Iterator<Item = &'a RatingEvent> + use<'a> {
        self.by_user
            .get(user)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|&position| self.events.get(position))
    }

    /// Distinct users in order of their first rating.
    #[must_use]
    pub fn users(&self) -> Vec<UserId> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .filter(|event| seen.insert(&event.user))
            .map(|event| event.user.clone())
            .collect()
    }

    /// Iterate over all events in source order.
    pub fn iter(&self) -> impl Iterator<Item = &RatingEvent> {
        self.events.iter()
    }

    /// Total number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Report whether the history holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<RatingEvent> for RatingHistory {
    fn from_iter<T: IntoIterator<Item = RatingEvent>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unknown_user_has_no_ratings() {
        let history = RatingHistory::new([RatingEvent::new("u1", "A", 1.0)]);
        assert_eq!(history.for_user(&UserId::from("nobody")).count(), 0);
    }

    #[rstest]
    fn users_are_listed_once_in_first_seen_order() {
        let history = RatingHistory::new([
            RatingEvent::new("u2", "A", 1.0),
            RatingEvent::new("u1", "B", 1.0),
            RatingEvent::new("u2", "C", 1.0),
        ]);
        assert_eq!(history.users(), [UserId::from("u2"), UserId::from("u1")]);
    }
}
