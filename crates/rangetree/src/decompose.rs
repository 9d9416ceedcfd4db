//! Canonical range decomposition.
//!
//! ## Purpose
//!
//! Turn a one-dimensional range `[start, end]` into the minimal set of
//! subtrees whose leaf union is exactly the set of keys inside the range.
//! This is the workhorse of range queries: instead of visiting every leaf in
//! range, the caller receives O(log n) canonical subtree roots and decides
//! per node whether to flatten its leaves or descend into its secondary
//! tree for the next axis.
//!
//! ## Design notes
//!
//! - **Boundary descents:** the decomposition is driven by two navigation
//!   descents, `predecessor(start)` and `successor(end)`. Everything strictly
//!   between those two boundary leaves is in range.
//! - **Split at pointer identity:** the two recorded paths share a prefix
//!   from the root down to the split node (the lowest common ancestor of the
//!   range). The first index where they name different nodes is found by
//!   pointer comparison, never by key comparison, so duplicate keys cannot
//!   confuse the split.
//! - **Lazy phases:** [`CanonicalSubtrees`] yields in five phases (whole
//!   tree, predecessor boundary leaf, predecessor-path walk, successor-path
//!   walk, successor boundary leaf). Each `next` call resumes the phase
//!   where it stopped, so consumers that stop early never pay for the rest.
//! - **Left-to-right order:** the predecessor path is walked bottom-up
//!   yielding right siblings, the successor path top-down yielding left
//!   siblings. Together with the boundary leaves this emits subtrees in
//!   ascending leaf order.
//!
//! ## Invariants
//!
//! - Yielded subtrees are pairwise leaf-disjoint.
//! - The concatenated leaves of all yielded subtrees are exactly the sorted
//!   in-range subsequence of the tree's leaves.
//! - An inverted range (`start > end`) covers nothing and yields nothing.

use std::cmp::Ordering;
use std::iter::Rev;
use std::ops::Range;
use std::ptr;

use crate::navigate::{predecessor, successor, Branch, Visit};
use crate::primitives::point::{coord_ord, AxisKey, Point};
use crate::tree::node::Node;

// ============================================================================
// Entry points
// ============================================================================

/// Decomposes `[start, end]` over `root` into canonical subtrees.
///
/// The returned iterator yields each subtree root whose leaves all satisfy
/// `start <= key <= end`, covering every in-range leaf exactly once, in
/// left-to-right leaf order. Bounds may lie outside the tree's own key range;
/// an inverted range yields an empty sequence.
pub fn canonical_subtrees<'t, T: Copy + PartialOrd>(
    root: &'t Node<T>,
    start: T,
    end: T,
) -> CanonicalSubtrees<'t, T> {
    if coord_ord(start, end) == Ordering::Greater {
        return CanonicalSubtrees::empty();
    }

    let pred = predecessor(root, start);
    let succ = successor(root, end);

    // No leaf below the range and none above it: the whole tree is in range.
    // This also covers the single-leaf tree.
    if pred.found.is_none() && succ.found.is_none() {
        let mut subtrees = CanonicalSubtrees::empty();
        subtrees.whole = Some(root);
        return subtrees;
    }

    // The split node is the last shared ancestor of the two boundary
    // descents. Identical paths mean the boundaries pinch an empty range.
    let diverge = pred
        .path
        .iter()
        .zip(succ.path.iter())
        .position(|(p, s)| !ptr::eq(p.node, s.node));
    let Some(diverge) = diverge else {
        return CanonicalSubtrees::empty();
    };

    CanonicalSubtrees {
        whole: None,
        pred_boundary: pred.found.is_none(),
        succ_boundary: succ.found.is_none(),
        pred_walk: (diverge..pred.path.len().saturating_sub(1)).rev(),
        succ_walk: diverge..succ.path.len().saturating_sub(1),
        pred_path: pred.path,
        succ_path: succ.path,
    }
}

/// Flattens the canonical subtrees of `[start, end]` into their points.
///
/// Terminal-axis form of the decomposition: every in-range leaf's underlying
/// point, in ascending key order, each occurrence yielded separately.
pub fn range_points<'t, T: Copy + PartialOrd>(
    root: &'t Node<T>,
    start: T,
    end: T,
) -> impl Iterator<Item = &'t Point<T>> {
    canonical_subtrees(root, start, end).flat_map(|subtree| subtree.leaves().map(AxisKey::point))
}

// ============================================================================
// Canonical subtree iterator
// ============================================================================

/// Lazy sequence of canonical subtree roots covering a key range.
///
/// Produced by [`canonical_subtrees`]. Single-pass and finite; at most
/// `2 * ceil(log2 n) + 1` nodes are ever yielded.
#[derive(Debug)]
pub struct CanonicalSubtrees<'t, T> {
    /// Entire tree in range; yielded alone when set.
    whole: Option<&'t Node<T>>,
    /// Yield the predecessor descent's landing leaf (range starts at or
    /// before the tree minimum).
    pred_boundary: bool,
    /// Yield the successor descent's landing leaf (range ends at or after
    /// the tree maximum).
    succ_boundary: bool,
    /// Indices into `pred_path` still to visit, bottom-up to the split node.
    pred_walk: Rev<Range<usize>>,
    /// Indices into `succ_path` still to visit, split node downward.
    succ_walk: Range<usize>,
    pred_path: Vec<Visit<'t, T>>,
    succ_path: Vec<Visit<'t, T>>,
}

impl<'t, T> CanonicalSubtrees<'t, T> {
    fn empty() -> Self {
        CanonicalSubtrees {
            whole: None,
            pred_boundary: false,
            succ_boundary: false,
            pred_walk: (0..0).rev(),
            succ_walk: 0..0,
            pred_path: Vec::new(),
            succ_path: Vec::new(),
        }
    }
}

impl<'t, T> Iterator for CanonicalSubtrees<'t, T> {
    type Item = &'t Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.whole.take() {
            return Some(root);
        }

        // The predecessor landed on the leftmost leaf without finding a key
        // below the range, so that leaf itself is in range.
        if self.pred_boundary {
            self.pred_boundary = false;
            if let Some(visit) = self.pred_path.last() {
                return Some(visit.node);
            }
        }

        // Wherever the predecessor descent went left, the untaken right
        // sibling lies strictly between the boundary leaves.
        for i in self.pred_walk.by_ref() {
            let visit = &self.pred_path[i];
            if visit.took == Some(Branch::Left) {
                if let Some(right) = visit.node.right() {
                    return Some(right);
                }
            }
        }

        // Mirror image along the successor path: untaken left siblings.
        for i in self.succ_walk.by_ref() {
            let visit = &self.succ_path[i];
            if visit.took == Some(Branch::Right) {
                if let Some(left) = visit.node.left() {
                    return Some(left);
                }
            }
        }

        // The successor landed on the rightmost leaf without finding a key
        // above the range.
        if self.succ_boundary {
            self.succ_boundary = false;
            if let Some(visit) = self.succ_path.last() {
                return Some(visit.node);
            }
        }

        None
    }
}
