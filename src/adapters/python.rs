//! # Python Bindings
//!
//! PyO3 bindings exposing a string BK-tree under edit distance.
//!
//! ## Python API
//!
//! ```python
//! from bktree import BkTree
//!
//! tree = BkTree()
//! tree.add("book")
//! tree.add_all(["books", "cake", "boo"])
//!
//! # (word, distance) pairs, nearest first
//! hits = tree.search("bo", radius=2)
//! for word, distance in hits:
//!     print(f"{word}: {distance}")
//!
//! len(tree)       # number of indexed words
//! ```

use pyo3::prelude::*;

use crate::core::metric::Levenshtein;
use crate::core::Distance;
use crate::engine::BkTree as RustBkTree;

/// Python wrapper for a string BK-tree under edit distance.
#[pyclass(name = "BkTree")]
pub struct PyBkTree {
    inner: RustBkTree<Levenshtein>,
}

#[pymethods]
impl PyBkTree {
    #[new]
    fn new() -> Self {
        PyBkTree {
            inner: RustBkTree::new(),
        }
    }

    /// Index a single word.
    fn add(&mut self, word: String) {
        self.inner.add(Levenshtein::new(word));
    }

    /// Index a batch of words.
    fn add_all(&mut self, words: Vec<String>) {
        self.inner.extend(words.into_iter().map(Levenshtein::new));
    }

    /// Every indexed word within `radius` edits of `query`, as
    /// `(word, distance)` pairs sorted nearest-first.
    #[pyo3(signature = (query, radius))]
    fn search(&self, query: &str, radius: u32) -> Vec<(String, u32)> {
        let query = Levenshtein::new(query);
        let mut hits: Vec<(String, u32)> = self
            .inner
            .within(&query, Distance::new(radius))
            .into_iter()
            .map(|m| (m.item.as_str().to_owned(), m.distance.get()))
            .collect();
        hits.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        hits
    }

    /// Whether any word within `radius` edits of `query` is indexed.
    #[pyo3(signature = (query, radius))]
    fn contains_within(&self, query: &str, radius: u32) -> bool {
        !self
            .inner
            .within(&Levenshtein::new(query), Distance::new(radius))
            .is_empty()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("BkTree(len={})", self.inner.len())
    }
}

#[pymodule]
fn bktree(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBkTree>()?;
    Ok(())
}
