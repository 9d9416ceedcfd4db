//! Multi-axis query engine.
//!
//! ## Purpose
//!
//! Compose the one-axis decomposition across every axis of the tree. The
//! engine decomposes axis 0 into canonical subtrees, then for each subtree
//! decomposes its secondary tree on axis 1, and so on; at the final axis it
//! flattens the surviving subtrees' leaves into points.
//!
//! ## Design notes
//!
//! - **Cursor stack, not recursion:** the engine keeps one live
//!   [`CanonicalSubtrees`] cursor per axis it is currently inside, plus a
//!   leaf drain for the terminal axis. Each `next` call advances the deepest
//!   cursor, pushing a new one when a canonical node opens the next axis and
//!   popping when a cursor runs dry. This keeps the query lazy end to end:
//!   no axis is decomposed before a consumer asks for a point that needs it.
//! - **Bounds are plain coordinates:** the box is held as two coordinate
//!   vectors; axis `k` of the box constrains the cursor opened at depth `k`.
//! - **Inverted boxes:** if any axis has its low bound above its high bound,
//!   every cursor touching that axis comes up empty, so the whole query
//!   yields nothing rather than failing.
//!
//! ## Invariants
//!
//! - A point is yielded once per occurrence in the input set; duplicates are
//!   preserved, never deduplicated.
//! - Yielded points satisfy the box on every axis.

use crate::decompose::{canonical_subtrees, CanonicalSubtrees};
use crate::primitives::point::Point;
use crate::tree::node::{Leaves, Node};

/// Lazy stream of points inside an axis-aligned box.
///
/// Produced by [`RangeTree::query`](crate::api::RangeTree::query).
/// Single-pass and finite; dropping it early abandons the remaining matches
/// without visiting them.
#[derive(Debug)]
pub struct Query<'t, T> {
    lo: Vec<T>,
    hi: Vec<T>,
    /// One cursor per axis currently being decomposed; index is the axis.
    levels: Vec<CanonicalSubtrees<'t, T>>,
    /// Drain of the current terminal-axis canonical subtree.
    leaves: Option<Leaves<'t, T>>,
}

impl<'t, T: Copy + PartialOrd> Query<'t, T> {
    /// Starts a query over `root`, which indexes axis 0 of the box.
    ///
    /// Callers must have checked that `lo` and `hi` match the tree's arity.
    pub(crate) fn new(root: &'t Node<T>, lo: Vec<T>, hi: Vec<T>) -> Self {
        debug_assert!(!lo.is_empty() && lo.len() == hi.len());
        let first = canonical_subtrees(root, lo[0], hi[0]);
        Query {
            lo,
            hi,
            levels: vec![first],
            leaves: None,
        }
    }
}

impl<'t, T: Copy + PartialOrd> Iterator for Query<'t, T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(drain) = self.leaves.as_mut() {
                if let Some(key) = drain.next() {
                    return Some(key.point().clone());
                }
                self.leaves = None;
            }

            let depth = self.levels.len();
            let node = self.levels.last_mut()?.next();
            match node {
                Some(node) if depth == self.lo.len() => {
                    // Terminal axis: every leaf under this node matched the
                    // box on all axes.
                    self.leaves = Some(node.leaves());
                }
                Some(node) => {
                    // Build attaches a secondary tree to every node above
                    // the terminal axis.
                    if let Some(secondary) = node.secondary() {
                        self.levels.push(canonical_subtrees(
                            secondary,
                            self.lo[depth],
                            self.hi[depth],
                        ));
                    }
                }
                None => {
                    self.levels.pop();
                }
            }
        }
    }
}
