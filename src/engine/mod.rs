//! # Engine
//!
//! The BK-tree itself: distance-guided insertion and radius-bounded,
//! triangle-inequality-pruned search.

mod bktree;

pub use bktree::{BkTree, Iter};
