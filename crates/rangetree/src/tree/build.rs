//! Tree construction.
//!
//! ## Purpose
//!
//! This module builds complete multidimensional range trees: leaves are
//! paired into a balanced single-axis tree, then every node of every
//! non-terminal axis gets a secondary tree over its own leaf points, keyed
//! on the next axis.
//!
//! ## Design notes
//!
//! * **Shape from length alone**: the pairwise merge produces a tree whose
//!   shape depends only on the number of keys, so the height is ⌈log₂ n⌉
//!   regardless of the key distribution.
//! * **Stable ordering**: keys are stable-sorted, so points with equal
//!   coordinates keep their input order all the way down the recursion.
//! * **Secondary trees everywhere**: attachment visits every leaf and every
//!   internal node of the full tree, trading O(n·(log n)^(d−1)) space for a
//!   query that can descend from any canonical node.
//! * **Recursive parallelism**: attachment forks at internal nodes via
//!   `rayon::join` while the subtree holds more than `PARALLEL_CUTOFF`
//!   leaves, and runs sequentially below that.
//!
//! ## Invariants
//!
//! * Parallel construction produces a tree identical to sequential
//!   construction.
//! * A successful build attaches a secondary tree to every node above the
//!   terminal axis, and to none on the terminal axis.

use tracing::debug;

use crate::primitives::errors::{RangeTreeError, Result};
use crate::primitives::point::{coord_ord, AxisKey, Point};
use crate::tree::node::Node;

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::join;
#[cfg(feature = "cpu")]
use rayon::slice::ParallelSliceMut;

/// Subtree size above which construction recurses on worker threads.
#[cfg(feature = "cpu")]
pub(crate) const PARALLEL_CUTOFF: usize = 1024;

// ============================================================================
// Public entry points
// ============================================================================

/// Build a balanced tree from keys already sorted ascending (ties allowed).
///
/// Leaves are emitted in order, then adjacent nodes are paired left-to-right
/// into internal nodes, carrying an unpaired trailing node into the next
/// round, until one root remains. No secondary structures are attached.
pub fn build_from_sorted<T>(keys: Vec<AxisKey<T>>) -> Result<Node<T>>
where
    T: Copy + PartialOrd,
{
    let mut nodes: Vec<Node<T>> = keys.into_iter().map(Node::leaf).collect();
    while nodes.len() > 1 {
        let mut merged = Vec::with_capacity(nodes.len() / 2 + 1);
        let mut pairs = nodes.into_iter();
        while let Some(left) = pairs.next() {
            match pairs.next() {
                Some(right) => merged.push(Node::merge(left, right)),
                None => merged.push(left),
            }
        }
        nodes = merged;
    }
    nodes.pop().ok_or_else(|| {
        RangeTreeError::InvalidInput("cannot build a tree from an empty key sequence".to_string())
    })
}

/// Build a complete tree over `points`, keyed on `axis`, sequentially.
///
/// Secondary structures cover the remaining axes recursively. Fails on an
/// empty point set, inconsistent arity, or an axis at or beyond the arity.
pub fn build_from_points<T>(points: &[Point<T>], axis: usize) -> Result<Node<T>>
where
    T: Copy + PartialOrd + Send + Sync,
{
    let arity = validate(points, axis)?;
    debug!(points = points.len(), arity, axis, "building range tree");
    build_level(points, axis, arity, false)
}

/// Build a complete tree over `points`, keyed on `axis`, on worker threads.
///
/// Same output as [`build_from_points`], same failure modes.
#[cfg(feature = "cpu")]
pub fn build_from_points_parallel<T>(points: &[Point<T>], axis: usize) -> Result<Node<T>>
where
    T: Copy + PartialOrd + Send + Sync,
{
    let arity = validate(points, axis)?;
    debug!(
        points = points.len(),
        arity, axis, "building range tree in parallel"
    );
    build_level(points, axis, arity, true)
}

/// Fallback for non-CPU targets.
#[cfg(not(feature = "cpu"))]
pub fn build_from_points_parallel<T>(points: &[Point<T>], axis: usize) -> Result<Node<T>>
where
    T: Copy + PartialOrd + Send + Sync,
{
    build_from_points(points, axis)
}

// ============================================================================
// Validation
// ============================================================================

fn validate<T>(points: &[Point<T>], axis: usize) -> Result<usize> {
    let Some(first) = points.first() else {
        return Err(RangeTreeError::InvalidInput(
            "cannot build a tree from an empty point set".to_string(),
        ));
    };
    let arity = first.arity();
    if arity == 0 {
        return Err(RangeTreeError::InvalidInput(
            "points must have at least one coordinate".to_string(),
        ));
    }
    for (index, point) in points.iter().enumerate() {
        if point.arity() != arity {
            return Err(RangeTreeError::MismatchedArity {
                expected: arity,
                found: point.arity(),
                index,
            });
        }
    }
    if axis >= arity {
        return Err(RangeTreeError::AxisOutOfRange { axis, arity });
    }
    Ok(arity)
}

// ============================================================================
// Recursive construction
// ============================================================================

/// Build the tree for one axis and attach secondary trees for the rest.
fn build_level<T>(points: &[Point<T>], axis: usize, arity: usize, parallel: bool) -> Result<Node<T>>
where
    T: Copy + PartialOrd + Send + Sync,
{
    let mut keys: Vec<AxisKey<T>> = points
        .iter()
        .map(|point| AxisKey::new(point.clone(), axis))
        .collect();
    sort_keys(&mut keys, parallel);
    let mut root = build_from_sorted(keys)?;
    if axis + 1 < arity {
        attach_all(&mut root, axis + 1, arity, parallel)?;
    }
    Ok(root)
}

/// Attach a secondary tree to `node` and to every node below it.
///
/// Full traversal: internal nodes are covered, not just the leaves, so the
/// query engine can descend from any canonical node it is handed.
fn attach_all<T>(node: &mut Node<T>, axis: usize, arity: usize, parallel: bool) -> Result<()>
where
    T: Copy + PartialOrd + Send + Sync,
{
    let points: Vec<Point<T>> = node.leaves().map(|key| key.point().clone()).collect();
    let secondary = build_level(&points, axis, arity, parallel)?;
    node.set_secondary(secondary);
    match node {
        Node::Leaf { .. } => Ok(()),
        Node::Internal { left, right, .. } => attach_children(left, right, axis, arity, parallel),
    }
}

#[cfg(feature = "cpu")]
fn attach_children<T>(
    left: &mut Node<T>,
    right: &mut Node<T>,
    axis: usize,
    arity: usize,
    parallel: bool,
) -> Result<()>
where
    T: Copy + PartialOrd + Send + Sync,
{
    // Threshold for spawning new threads
    if parallel && left.size() + right.size() > PARALLEL_CUTOFF {
        let (first, second) = join(
            || attach_all(left, axis, arity, true),
            || attach_all(right, axis, arity, true),
        );
        first?;
        second
    } else {
        attach_all(left, axis, arity, false)?;
        attach_all(right, axis, arity, false)
    }
}

#[cfg(not(feature = "cpu"))]
fn attach_children<T>(
    left: &mut Node<T>,
    right: &mut Node<T>,
    axis: usize,
    arity: usize,
    _parallel: bool,
) -> Result<()>
where
    T: Copy + PartialOrd + Send + Sync,
{
    attach_all(left, axis, arity, false)?;
    attach_all(right, axis, arity, false)
}

// ============================================================================
// Sorting
// ============================================================================

// Stable in both branches, so duplicate coordinates keep point input order.
#[cfg(feature = "cpu")]
fn sort_keys<T>(keys: &mut [AxisKey<T>], parallel: bool)
where
    T: Copy + PartialOrd + Send + Sync,
{
    if parallel && keys.len() > PARALLEL_CUTOFF {
        keys.par_sort_by(|a, b| coord_ord(a.value(), b.value()));
    } else {
        keys.sort_by(|a, b| coord_ord(a.value(), b.value()));
    }
}

#[cfg(not(feature = "cpu"))]
fn sort_keys<T>(keys: &mut [AxisKey<T>], _parallel: bool)
where
    T: Copy + PartialOrd + Send + Sync,
{
    keys.sort_by(|a, b| coord_ord(a.value(), b.value()));
}
