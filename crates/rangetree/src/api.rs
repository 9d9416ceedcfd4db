//! High-level API for building and querying range trees.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring construction and a
//! tree handle that owns the finished structure and answers box queries.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with sensible defaults; one call builds
//!   every axis of the structure.
//! * **Polymorphic**: accepts any [`RangeInput`] container, so slices of
//!   rows, vectors, fixed-size arrays, and ndarray matrices all work.
//! * **Validated**: input shape problems surface as errors at build time;
//!   queries only validate corner arity, never allocate tree state.
//! * **Immutable**: the handle never mutates the tree after construction, so
//!   shared references may query it from many threads at once.
//!
//! ## Key concepts
//!
//! * **Build once, query many**: there is no incremental insertion;
//!   rebuilding means constructing a new tree.
//! * **Closed boxes**: a query takes two corner tuples and matches points
//!   with every coordinate inside the closed per-axis intervals.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RangeTreeBuilder`] via `RangeTreeBuilder::new()`.
//! 2. Chain configuration methods (`.parallel()`).
//! 3. Call `.build(&points)` to obtain a [`RangeTree`].

// Internal dependencies
use crate::primitives::errors::{RangeTreeError, Result};
use crate::primitives::point::{AxisKey, Point};

// Publicly re-exported types
pub use crate::decompose::{canonical_subtrees, range_points, CanonicalSubtrees};
pub use crate::input::RangeInput;
pub use crate::navigate::{
    max_leaf, min_leaf, predecessor, search, successor, Branch, Descent, Visit,
};
pub use crate::query::Query;
pub use crate::tree::build::{build_from_points, build_from_points_parallel, build_from_sorted};
pub use crate::tree::node::{Leaves, Node};

// ============================================================================
// Builder
// ============================================================================

/// Fluent configuration for constructing a [`RangeTree`].
#[derive(Debug, Clone, Default)]
pub struct RangeTreeBuilder {
    parallel: Option<bool>,
}

impl RangeTreeBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose between parallel and sequential construction.
    ///
    /// Defaults to parallel, which only engages above an internal size
    /// cutoff; small inputs always build sequentially.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = Some(enabled);
        self
    }

    /// Build a tree over every axis of the given point set.
    ///
    /// Fails if the input is empty, has zero-width points, mixes arities,
    /// or cannot expose its rows (see [`RangeInput`]).
    pub fn build<T, I>(self, points: &I) -> Result<RangeTree<T>>
    where
        T: Copy + PartialOrd + Send + Sync,
        I: RangeInput<T> + ?Sized,
    {
        let rows = points.point_rows()?;
        let owned: Vec<Point<T>> = rows.into_iter().map(Point::new).collect();

        let root = if self.parallel.unwrap_or(true) {
            build_from_points_parallel(&owned, 0)?
        } else {
            build_from_points(&owned, 0)?
        };
        let arity = root.min().point().arity();

        Ok(RangeTree { root, arity })
    }
}

// ============================================================================
// Range Tree Handle
// ============================================================================

/// An immutable multidimensional range tree over a fixed point set.
///
/// Built once via [`RangeTree::from_points`] or a [`RangeTreeBuilder`];
/// afterwards every operation takes `&self`, so concurrent readers need no
/// coordination.
#[derive(Debug, Clone)]
pub struct RangeTree<T> {
    root: Node<T>,
    arity: usize,
}

impl<T: Copy + PartialOrd + Send + Sync> RangeTree<T> {
    /// Build a tree with default settings.
    pub fn from_points<I>(points: &I) -> Result<Self>
    where
        I: RangeInput<T> + ?Sized,
    {
        RangeTreeBuilder::new().build(points)
    }

    /// Stream every point inside the closed box spanned by two corners.
    ///
    /// Corner `k` of `start` and `end` bounds axis `k`. Fails if either
    /// corner's arity disagrees with the tree's. A box with `start` above
    /// `end` on some axis is not an error; it simply matches nothing.
    pub fn query(&self, start: &[T], end: &[T]) -> Result<Query<'_, T>> {
        if start.len() != self.arity {
            return Err(RangeTreeError::MismatchedCornerArity {
                expected: self.arity,
                found: start.len(),
                corner: "start",
            });
        }
        if end.len() != self.arity {
            return Err(RangeTreeError::MismatchedCornerArity {
                expected: self.arity,
                found: end.len(),
                corner: "end",
            });
        }
        Ok(Query::new(&self.root, start.to_vec(), end.to_vec()))
    }

    /// Number of points in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.root.size()
    }

    /// Always false: a tree cannot be built from an empty point set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of coordinates per point.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// All points in axis-0 key order, each occurrence yielded separately.
    pub fn points(&self) -> impl Iterator<Item = &Point<T>> {
        self.root.leaves().map(AxisKey::point)
    }

    /// The root node of the primary (axis 0) tree.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }
}
