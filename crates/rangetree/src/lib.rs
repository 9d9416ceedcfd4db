//! Multidimensional orthogonal range trees.
//!
//! ## Purpose
//!
//! This crate answers orthogonal range-membership queries over a static set
//! of multi-dimensional points: which points have every coordinate inside a
//! given closed box? A tree is built once from a point sequence and is
//! immutable afterwards, so any number of threads may query it concurrently.
//!
//! Queries run in O((log n)^d) by decomposing each axis interval into
//! O(log n) canonical subtrees and descending into the secondary structure
//! that every node carries for the next axis.
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API           (builder + tree handle)
//!   ↓
//! Layer 6: Input         (slices, vectors, arrays, ndarray)
//!   ↓
//! Layer 5: Query Engine  (multi-axis composition)
//!   ↓
//! Layer 4: Decomposition (canonical subtrees)
//!   ↓
//! Layer 3: Navigation    (search / predecessor / successor)
//!   ↓
//! Layer 2: Tree          (nodes + construction)
//!   ↓
//! Layer 1: Primitives    (points, axis keys, errors)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use rangetree::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let points = [[0, 2, 4], [2, 0, 6], [4, 4, 0], [6, 6, 6], [8, 8, 2]];
//! let tree = RangeTree::from_points(&points)?;
//!
//! // Points whose x lies in [1, 5], y in [0, 5], and z in [0, 7].
//! let hits: Vec<Point<i32>> = tree.query(&[1, 0, 0], &[5, 5, 7])?.collect();
//! assert_eq!(hits.len(), 2);
//! assert_eq!(tree.len(), 5);
//! # Ok(())
//! # }
//! ```

/// Layer 1: points, axis keys, and error types.
pub mod primitives;

/// Layer 2: tree nodes and construction.
pub mod tree;

/// Layer 3: path-recording descents (search, predecessor, successor).
pub mod navigate;

/// Layer 4: canonical-subtree decomposition of one-axis ranges.
pub mod decompose;

/// Layer 5: the multi-axis query engine.
pub mod query;

/// Layer 6: input format abstraction.
pub mod input;

/// Layer 7: the public build-and-query surface.
pub mod api;

/// Commonly used types, re-exported for glob import.
pub mod prelude {
    pub use crate::api::{RangeTree, RangeTreeBuilder};
    pub use crate::input::RangeInput;
    pub use crate::primitives::errors::{RangeTreeError, Result};
    pub use crate::primitives::point::{AxisKey, Point};
}
