//! # BkTree
//!
//! The main entry point: a Burkhard-Keller tree over any [`Metric`] type.
//!
//! The tree starts empty. The first `add` creates the root; every later
//! `add` attaches exactly one new leaf. Nodes are never moved, merged, or
//! removed, so the shape is fixed by insertion order and by how the metric
//! behaves on the inserted set. There is no deletion and no rebalancing.

use crate::core::{Distance, Metric, Node};
use crate::ports::{Insert, Match, Within};

/// A BK-tree: radius-bounded fuzzy lookup over a caller-supplied metric.
///
/// ```
/// use bktree::{BkTree, Distance, Levenshtein};
///
/// let tree: BkTree<Levenshtein> =
///     ["some", "soft", "sorted"].into_iter().map(Levenshtein::new).collect();
///
/// let hits = tree.within(&Levenshtein::new("sort"), Distance::new(2));
/// assert_eq!(hits.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BkTree<T> {
    root: Option<Node<T>>,
    len: usize,
}

impl<T> BkTree<T> {
    /// An empty tree.
    pub fn new() -> Self {
        BkTree { root: None, len: 0 }
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, for structural inspection.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// Borrowing iterator over every indexed item, in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.iter().collect(),
        }
    }
}

impl<T: Metric> BkTree<T> {
    /// Index `item`.
    ///
    /// An empty tree makes `item` the root. Otherwise descent starts at the
    /// root: at each node the distance `d` to `item` picks the child edge;
    /// a vacant edge receives `item` as a new leaf, an occupied edge is
    /// followed. Duplicates are not deduped - re-adding an item attaches a
    /// second node at edge 0 of its twin, and a radius-0 search reports
    /// both.
    pub fn add(&mut self, item: T) {
        match self.root.as_mut() {
            None => self.root = Some(Node::new(item)),
            Some(root) => root.insert(item),
        }
        self.len += 1;
    }

    /// Every indexed item within `radius` of `query`, inclusive.
    ///
    /// Iterative traversal over an explicit worklist, run to exhaustion.
    /// For each candidate at distance `d` from the query, only child edges
    /// in `[d - radius, d + radius]` are followed: by the triangle
    /// inequality, an item behind an edge of length `e` is at least
    /// `|d - e|` from the query, so an edge outside the window cannot lead
    /// to a match and the whole subtree is skipped. Subtrees inside the
    /// window are enqueued, never dropped, so every match is found.
    ///
    /// Result order is unspecified; sort before comparing.
    pub fn within(&self, query: &T, radius: Distance) -> Vec<Match<'_, T>> {
        let mut hits = Vec::new();
        let Some(root) = self.root.as_ref() else {
            return hits;
        };

        let mut worklist = vec![root];
        while let Some(cand) = worklist.pop() {
            let d = cand.item().distance(query);
            if d <= radius {
                hits.push(Match {
                    item: cand.item(),
                    distance: d,
                });
            }
            worklist.extend(
                cand.children_within(d.saturating_sub(radius), d.saturating_add(radius)),
            );
        }
        hits
    }
}

impl<T> Default for BkTree<T> {
    fn default() -> Self {
        BkTree::new()
    }
}

impl<T: Metric> Insert<T> for BkTree<T> {
    fn add(&mut self, item: T) {
        BkTree::add(self, item);
    }

    fn len(&self) -> usize {
        BkTree::len(self)
    }
}

impl<T: Metric> Within<T> for BkTree<T> {
    fn within(&self, query: &T, radius: Distance) -> Vec<Match<'_, T>> {
        BkTree::within(self, query, radius)
    }
}

impl<T: Metric> FromIterator<T> for BkTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BkTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Metric> Extend<T> for BkTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a BkTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first borrowing iterator over a tree's items.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().map(|(_, child)| child));
        Some(node.item())
    }
}
