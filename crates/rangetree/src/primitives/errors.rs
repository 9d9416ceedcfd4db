//! Error types for range-tree construction and queries.

use thiserror::Error;

/// Result type alias using RangeTreeError.
pub type Result<T> = std::result::Result<T, RangeTreeError>;

/// Errors that can occur while building or querying a range tree.
///
/// All variants are raised before any tree state is produced: a failed build
/// leaves nothing behind, and a failed query never starts iterating. An
/// inverted query box is not an error; it yields an empty result.
#[derive(Debug, Error)]
pub enum RangeTreeError {
    /// Input that cannot seed a tree at all: an empty point set, or a
    /// container whose layout cannot be read (non-contiguous ndarray input).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A point (or query corner) whose coordinate count disagrees with the
    /// rest of the input.
    #[error("mismatched arity: expected {expected}, found {found} at point {index}")]
    MismatchedArity {
        expected: usize,
        found: usize,
        index: usize,
    },

    /// A query corner whose coordinate count disagrees with the tree's arity.
    #[error("mismatched corner arity: expected {expected}, found {found} for the {corner} corner")]
    MismatchedCornerArity {
        expected: usize,
        found: usize,
        corner: &'static str,
    },

    /// An axis index at or beyond the point arity.
    #[error("axis {axis} out of range for arity {arity}")]
    AxisOutOfRange { axis: usize, arity: usize },
}
