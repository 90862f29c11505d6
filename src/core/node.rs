//! # Node
//!
//! One indexed value plus a child map keyed by exact distance.
//!
//! Invariant: for every child `c` stored under key `k` in node `n`,
//! `n.item.distance(c.item) == k`. A node has at most one child per
//! distance value; insertion descends into an occupied slot instead of
//! creating a sibling. The stored item never changes after construction,
//! and the child map only ever grows.

use std::collections::btree_map::{BTreeMap, Entry};

use crate::core::{Distance, Metric};

/// A single node: one item and its distance-keyed children.
///
/// Each node exclusively owns its children, so dropping a node drops its
/// whole subtree and the structure is acyclic by construction. The map is
/// ordered so a radius search can enumerate an edge window as a range scan.
#[derive(Debug, Clone)]
pub struct Node<T> {
    item: T,
    children: BTreeMap<Distance, Node<T>>,
}

impl<T> Node<T> {
    /// A leaf holding `item`.
    pub(crate) fn new(item: T) -> Self {
        Node {
            item,
            children: BTreeMap::new(),
        }
    }

    /// The indexed value.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The child at exactly `distance` from this node, if any.
    pub fn child_at(&self, distance: Distance) -> Option<&Node<T>> {
        self.children.get(&distance)
    }

    /// All direct children with their edge distances, ascending.
    pub fn children(&self) -> impl Iterator<Item = (Distance, &Node<T>)> {
        self.children.iter().map(|(d, child)| (*d, child))
    }

    /// Children whose edge distance lies in `[low, high]` inclusive.
    ///
    /// Callers guarantee `low <= high`; both window edges produced by the
    /// search (saturating offsets from a common center) satisfy that.
    pub(crate) fn children_within(
        &self,
        low: Distance,
        high: Distance,
    ) -> impl Iterator<Item = &Node<T>> {
        self.children.range(low..=high).map(|(_, child)| child)
    }
}

impl<T: Metric> Node<T> {
    /// Descend from this node and attach `item` as a new leaf.
    ///
    /// At each step the edge key is the distance between the current node
    /// and `item`: a vacant slot receives the new leaf, an occupied slot is
    /// descended into. Descent only follows parent-to-child edges, so it
    /// visits each node at most once and terminates in at most as many
    /// steps as there are nodes below `self`. Exactly one child-map entry
    /// is added.
    pub(crate) fn insert(&mut self, item: T) {
        let mut cur = self;
        loop {
            let d = cur.item.distance(&item);
            match cur.children.entry(d) {
                Entry::Vacant(slot) => {
                    slot.insert(Node::new(item));
                    return;
                }
                Entry::Occupied(slot) => cur = slot.into_mut(),
            }
        }
    }
}
