//! Input abstractions for tree construction.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over point-set inputs, allowing
//! the builder to consume multiple data formats (slices of rows, vectors,
//! fixed-size arrays, ndarray matrices) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: rows are exposed as borrowed slices into
//!   the caller's buffers; coordinates are only copied once, when the builder
//!   turns rows into shared points.
//! * **Interoperability**: bridges standard Rust collections with ndarray
//!   matrices, where each matrix row is one point.
//! * **Fail-fast validation**: memory-layout problems (non-contiguous
//!   arrays, zero-width rows) surface here; arity consistency across rows is
//!   the builder's concern.
//!
//! ## Key concepts
//!
//! * **RangeInput Trait**: the core abstraction that requires types to
//!   expose their points as a sequence of coordinate rows.
//! * **Row = point**: every yielded slice is the full coordinate tuple of
//!   one point, in axis order.
//!
//! ## Invariants
//!
//! * The returned rows cover every point in the input container, in input
//!   order.
//! * ndarray inputs must be contiguous in standard (row-major) layout;
//!   non-contiguous views return an error.
//!
//! ## Non-goals
//!
//! * This module does not deduplicate, sort, or otherwise clean the points.
//! * This module does not enforce equal row lengths; ragged inputs are
//!   rejected during the build itself.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::primitives::errors::RangeTreeError;
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix2};

// Internal dependencies
use crate::primitives::errors::Result;

/// Trait for types that can be used as a point set for tree construction.
pub trait RangeInput<T> {
    /// Expose the input as one coordinate row per point.
    fn point_rows(&self) -> Result<Vec<&[T]>>;
}

impl<T> RangeInput<T> for [Vec<T>] {
    fn point_rows(&self) -> Result<Vec<&[T]>> {
        Ok(self.iter().map(Vec::as_slice).collect())
    }
}

impl<T> RangeInput<T> for Vec<Vec<T>> {
    fn point_rows(&self) -> Result<Vec<&[T]>> {
        self.as_slice().point_rows()
    }
}

impl<T, const N: usize> RangeInput<T> for [[T; N]] {
    fn point_rows(&self) -> Result<Vec<&[T]>> {
        Ok(self.iter().map(|row| row.as_slice()).collect())
    }
}

impl<T, const N: usize> RangeInput<T> for Vec<[T; N]> {
    fn point_rows(&self) -> Result<Vec<&[T]>> {
        self.as_slice().point_rows()
    }
}

impl<T, const N: usize, const M: usize> RangeInput<T> for [[T; N]; M] {
    fn point_rows(&self) -> Result<Vec<&[T]>> {
        self.as_slice().point_rows()
    }
}

#[cfg(feature = "cpu")]
impl<T, S> RangeInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn point_rows(&self) -> Result<Vec<&[T]>> {
        let columns = self.ncols();
        if columns == 0 {
            return Err(RangeTreeError::InvalidInput(
                "ndarray input must have at least one column".to_string(),
            ));
        }
        let flat = self.as_slice().ok_or_else(|| {
            RangeTreeError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })?;
        Ok(flat.chunks_exact(columns).collect())
    }
}
