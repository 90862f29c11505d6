//! # BK-tree - radius-bounded fuzzy lookup
//!
//! > "Closeness is a tree, not a scan"
//!
//! A BK-tree (Burkhard-Keller tree) indexes values in a metric space. Each
//! node keys its children by their exact distance from that node, which lets
//! a radius search discard whole subtrees via the triangle inequality
//! instead of comparing the query against every indexed value.
//!
//! ## Philosophy
//!
//! - **The metric is the index** - No hashes, no sort keys; distance alone
//!   decides where a value lives and where a search looks
//! - **Caller-supplied, statically checked** - Any type implementing
//!   [`Metric`] can be indexed; incompatible comparisons fail at compile time
//! - **Exhaustive within the radius** - A search visits everything it
//!   enqueues and returns every match, never a time-boxed subset
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        BK-TREE                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure data model, no I/O)                             │
//! │    Distance, Metric, Levenshtein, Hamming, Node             │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Insert, Within, Match                                     │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Scan: LinearScan (exhaustive oracle)                     │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (the index itself)                                   │
//! │    BkTree - the main entry point                            │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use bktree::{BkTree, Distance, Levenshtein};
//!
//! let mut tree = BkTree::new();
//! tree.add(Levenshtein::new("book"));
//! tree.add(Levenshtein::new("books"));
//! tree.add(Levenshtein::new("cake"));
//!
//! // Everything within one edit of "boo"
//! let hits = tree.within(&Levenshtein::new("boo"), Distance::new(1));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].item.as_str(), "book");
//! ```
//!
//! ## Concurrency
//!
//! Both operations run to completion on the calling thread. `add` takes
//! `&mut self` and `within` takes `&self`, so the borrow checker enforces
//! the one-writer/many-readers rule; wrap the tree in an `RwLock` if it
//! must be shared across threads. `BkTree<T>` is `Send` and `Sync`
//! whenever `T` is.

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure data model, no I/O
/// Contains: Distance, Metric trait, example metrics, Node
pub mod core;

/// Port definitions - trait contracts for index implementations
/// Contains: Insert trait, Within trait, Match
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: scan, python submodules
pub mod adapters;

/// Engine - the BK-tree itself
/// Contains: BkTree main struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{Distance, DistanceError, Node};
pub use crate::core::metric::{
    edit_distance, hamming, levenshtein, EditCosts, Hamming, Levenshtein, Metric,
};

// Port traits
pub use crate::ports::{Insert, Match, Within};

// Adapters
pub use crate::adapters::scan::LinearScan;

// Engine
pub use crate::engine::BkTree;
