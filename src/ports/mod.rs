//! # Ports
//!
//! Trait contracts between index implementations and their callers.
//!
//! Two implementations ship with the crate: the [`BkTree`] engine and the
//! exhaustive [`LinearScan`] adapter. Keeping both behind the same pair of
//! traits lets tests run one against the other, and lets callers swap the
//! pruned index for a brute-force scan without touching call sites.
//!
//! [`BkTree`]: crate::engine::BkTree
//! [`LinearScan`]: crate::adapters::scan::LinearScan

use crate::core::{Distance, Metric};

/// A single hit from a radius search: the matching item and its distance
/// from the query.
#[derive(Debug, PartialEq, Eq)]
pub struct Match<'a, T> {
    /// The indexed item, borrowed from the index.
    pub item: &'a T,

    /// Its distance from the query.
    pub distance: Distance,
}

impl<T> Clone for Match<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Match<'_, T> {}

/// Accepting new items.
pub trait Insert<T: Metric> {
    /// Index `item`. Always succeeds; duplicates are stored, not deduped.
    fn add(&mut self, item: T);

    /// Number of indexed items.
    fn len(&self) -> usize;

    /// Whether nothing has been indexed yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Radius-bounded search.
pub trait Within<T: Metric> {
    /// Every indexed item within `radius` of `query`, inclusive.
    ///
    /// Returns an empty vector when the index is empty or nothing matches.
    /// Result order is unspecified; sort before comparing.
    fn within(&self, query: &T, radius: Distance) -> Vec<Match<'_, T>>;
}
