//! Points and their single-axis key projections.
//!
//! ## Purpose
//!
//! This module defines the two value types every layer above it speaks in:
//! [`Point`], an immutable d-tuple of coordinates, and [`AxisKey`], a point
//! viewed through one axis so it can be ordered during construction and
//! search.
//!
//! ## Design notes
//!
//! * **Cheap handles**: a `Point` wraps a shared immutable buffer
//!   (`Arc<[T]>`). Every secondary structure in a tree re-stores the same
//!   points, so cloning must be a reference-count bump, not a copy.
//! * **Projection ordering**: `AxisKey` comparisons look at exactly one
//!   coordinate. Two keys compare equal whenever their projections are
//!   equal, even if the underlying points differ.
//! * **Total order over partial order**: all ordering decisions in the crate
//!   go through [`coord_ord`], which collapses un-ordered pairs (float NaN)
//!   to `Equal` instead of panicking.
//!
//! ## Invariants
//!
//! * An `AxisKey`'s axis index is below its point's arity.
//! * Coordinates are never mutated after a point is created.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Comparison used for every ordering decision in the crate. Un-ordered
/// pairs (float NaN) collapse to `Equal` instead of panicking.
pub(crate) fn coord_ord<T: Copy + PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// An immutable multi-dimensional point.
///
/// Cloning is a reference-count bump on the shared coordinate buffer.
#[derive(Clone, PartialEq)]
pub struct Point<T> {
    coords: Arc<[T]>,
}

impl<T: Clone> Point<T> {
    /// Create a point from a coordinate slice.
    pub fn new(coords: &[T]) -> Self {
        Self {
            coords: Arc::from(coords),
        }
    }

    /// The coordinates as a freshly allocated vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.coords.to_vec()
    }
}

impl<T> Point<T> {
    /// Number of coordinates.
    pub fn arity(&self) -> usize {
        self.coords.len()
    }

    /// All coordinates, in axis order.
    pub fn coords(&self) -> &[T] {
        &self.coords
    }
}

impl<T: Copy> Point<T> {
    /// The coordinate on `axis`. The axis must be below `arity()`.
    pub fn coord(&self, axis: usize) -> T {
        self.coords[axis]
    }
}

impl<T> Index<usize> for Point<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        &self.coords[axis]
    }
}

impl<T: fmt::Debug> fmt::Debug for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Point");
        for coord in self.coords.iter() {
            tuple.field(coord);
        }
        tuple.finish()
    }
}

/// A point viewed through a single axis for ordering purposes.
///
/// Keys with equal projections are interchangeable for ordering even when
/// their points differ; range queries on this axis cannot tell them apart.
#[derive(Clone)]
pub struct AxisKey<T> {
    point: Point<T>,
    axis: usize,
}

impl<T: Copy + PartialOrd> AxisKey<T> {
    /// Project `point` onto `axis`.
    pub fn new(point: Point<T>, axis: usize) -> Self {
        debug_assert!(
            axis < point.arity(),
            "axis {} out of range for arity {}",
            axis,
            point.arity()
        );
        Self { point, axis }
    }

    /// The underlying point.
    pub fn point(&self) -> &Point<T> {
        &self.point
    }

    /// The axis this key projects onto.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The projected coordinate.
    pub fn value(&self) -> T {
        self.point.coord(self.axis)
    }
}

impl<T: Copy + PartialOrd> PartialEq for AxisKey<T> {
    fn eq(&self, other: &Self) -> bool {
        coord_ord(self.value(), other.value()) == Ordering::Equal
    }
}

impl<T: Copy + PartialOrd> PartialOrd for AxisKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(coord_ord(self.value(), other.value()))
    }
}

impl<T: fmt::Debug> fmt::Debug for AxisKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisKey")
            .field("value", &self.point[self.axis])
            .field("axis", &self.axis)
            .field("point", &self.point)
            .finish()
    }
}
