//! # Linear Scan Adapter
//!
//! Brute force over a flat vector: every query compares against every
//! indexed item.
//!
//! Good for:
//! - Small datasets, where tree overhead outweighs pruning
//! - Adversarial metrics that defeat pruning anyway
//! - Differential testing - this is the correctness oracle the tree is
//!   checked against

use crate::core::{Distance, Metric};
use crate::ports::{Insert, Match, Within};

/// Exhaustive radius search over a flat vector.
#[derive(Debug, Clone)]
pub struct LinearScan<T> {
    items: Vec<T>,
}

impl<T> LinearScan<T> {
    /// An empty scan.
    pub fn new() -> Self {
        LinearScan { items: Vec::new() }
    }

    /// All indexed items, in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for LinearScan<T> {
    fn default() -> Self {
        LinearScan::new()
    }
}

impl<T: Metric> Insert<T> for LinearScan<T> {
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Metric> Within<T> for LinearScan<T> {
    fn within(&self, query: &T, radius: Distance) -> Vec<Match<'_, T>> {
        self.items
            .iter()
            .filter_map(|item| {
                let distance = item.distance(query);
                (distance <= radius).then_some(Match { item, distance })
            })
            .collect()
    }
}

impl<T: Metric> FromIterator<T> for LinearScan<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LinearScan {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Metric> Extend<T> for LinearScan<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metric::Levenshtein;

    fn words(list: &[&str]) -> LinearScan<Levenshtein> {
        list.iter().map(|w| Levenshtein::new(*w)).collect()
    }

    #[test]
    fn test_scan_fuzzy_match() {
        let scan = words(&["some", "soft", "sorted", "same", "mole", "soda", "salmon"]);

        let mut hits: Vec<&str> = scan
            .within(&Levenshtein::new("sort"), Distance::new(2))
            .into_iter()
            .map(|m| m.item.as_str())
            .collect();
        hits.sort_unstable();

        assert_eq!(hits, vec!["soft", "sorted"]);
    }

    #[test]
    fn test_scan_exact_match() {
        let scan = words(&["some", "soft", "mole"]);

        let hits = scan.within(&Levenshtein::new("mole"), Distance::ZERO);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item.as_str(), "mole");
        assert_eq!(hits[0].distance, Distance::ZERO);
    }

    #[test]
    fn test_scan_empty() {
        let scan: LinearScan<Levenshtein> = LinearScan::new();
        assert!(scan.is_empty());
        assert!(scan.within(&Levenshtein::new("anything"), Distance::new(10)).is_empty());
    }
}
