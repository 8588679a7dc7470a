//! Bounded best-of-N selection.
//!
//! Both the favourites buffer and the suggestion list keep the `K` best items
//! seen in a single pass. [`SelectionStrategy::Exact`] keeps a fixed-capacity
//! min-heap and yields a true top-K; [`SelectionStrategy::FirstFit`]
//! reproduces the legacy behaviour, which evicts the first buffered item that
//! scores strictly lower than the newcomer rather than the weakest one.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

/// How a bounded selection decides which item to evict once full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectionStrategy {
    /// Evict the weakest item; output ordered best-first.
    #[default]
    Exact,
    /// Evict the first item weaker than the newcomer; output keeps buffer
    /// order.
    FirstFit,
}

impl SelectionStrategy {
    /// Kebab-case name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::FirstFit => "first-fit",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when parsing an unrecognised selection strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown selection strategy {0:?} (expected \"exact\" or \"first-fit\")")]
pub struct UnknownStrategy(pub String);

impl FromStr for SelectionStrategy {
    type Err = UnknownStrategy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "first-fit" | "first_fit" | "firstfit" => Ok(Self::FirstFit),
            _ => Err(UnknownStrategy(raw.to_owned())),
        }
    }
}

/// Keep at most `capacity` items from `items`, ranked by `key`.
///
/// Earlier items win ties under both strategies: a later item only displaces
/// a kept one when its key is strictly greater.
///
/// # Examples
/// ```
/// use bookmatch_core::{SelectionStrategy, select_best};
///
/// let values = [3.0, 9.0, 1.0, 7.0, 8.0];
/// let exact = select_best(values, 3, SelectionStrategy::Exact, |v| *v);
/// assert_eq!(exact, [9.0, 8.0, 7.0]);
///
/// // First-fit evicts 3.0 for 7.0, then 7.0 for 8.0; the weak 1.0 survives.
/// let first_fit = select_best(values, 3, SelectionStrategy::FirstFit, |v| *v);
/// assert_eq!(first_fit, [8.0, 9.0, 1.0]);
/// ```
pub fn select_best<T, I, F>(
    items: I,
    capacity: usize,
    strategy: SelectionStrategy,
    key: F,
) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    if capacity == 0 {
        return Vec::new();
    }
    match strategy {
        SelectionStrategy::Exact => select_exact(items, capacity, key),
        SelectionStrategy::FirstFit => select_first_fit(items, capacity, key),
    }
}

fn select_exact<T, I, F>(items: I, capacity: usize, key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    let mut heap: BinaryHeap<Reverse<Slot<T>>> = BinaryHeap::with_capacity(capacity);
    for (seq, item) in items.into_iter().enumerate() {
        let slot = Slot {
            key: key(&item),
            seq,
            item,
        };
        if heap.len() < capacity {
            heap.push(Reverse(slot));
            continue;
        }
        let displaces_weakest = heap
            .peek()
            .is_some_and(|Reverse(weakest)| slot.key > weakest.key);
        if displaces_weakest {
            heap.pop();
            heap.push(Reverse(slot));
        }
    }
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(slot)| slot.item)
        .collect()
}

fn select_first_fit<T, I, F>(items: I, capacity: usize, key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    let mut kept: Vec<(f64, T)> = Vec::with_capacity(capacity);
    for item in items {
        let item_key = key(&item);
        if kept.len() < capacity {
            kept.push((item_key, item));
        } else if let Some(slot) = kept.iter_mut().find(|(kept_key, _)| *kept_key < item_key) {
            *slot = (item_key, item);
        }
    }
    kept.into_iter().map(|(_, item)| item).collect()
}

/// Heap entry ordered by key, then by earliest arrival.
struct Slot<T> {
    key: f64,
    seq: usize,
    item: T,
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Slot<T> {}

impl<T> PartialOrd for Slot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Slot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Greater means better: higher key, or the same key seen earlier.
        self.key
            .total_cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
