//! Path-recording descents over a single-axis tree.
//!
//! ## Purpose
//!
//! This module locates boundary leaves: exact matches, predecessors
//! (greatest leaf strictly below a probe) and successors (least leaf
//! strictly above it), plus the extreme leaves. Every operation returns the
//! full root-to-leaf path it walked, because the decomposition layer
//! consumes those paths to find the split node.
//!
//! ## Design notes
//!
//! * **Paths in results**: descents return a [`Descent`] bundling the
//!   outcome and the visited nodes; no mutable out-parameters are threaded
//!   through the recursion.
//! * **One comparison per level**: predecessor and successor decide each
//!   step from a single aggregate comparison (`right.min` / `left.max`)
//!   instead of a cascade of cases.
//! * **Absent still lands on a leaf**: when no predecessor (successor)
//!   exists, the descent runs out at the minimum (maximum) leaf and reports
//!   `found: None`. The decomposer depends on that boundary path.
//!
//! ## Key concepts
//!
//! * **Branch**: which child a descent stepped into at an internal node.
//! * **Visit**: one path entry, holding the node and the branch taken to
//!   leave it; the terminal leaf takes none.

use std::cmp::Ordering;

use crate::primitives::point::coord_ord;
use crate::tree::node::Node;

/// Which child a descent stepped into at an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Left,
    Right,
}

/// One node on a descent path, with the branch taken to leave it.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'t, T> {
    pub node: &'t Node<T>,
    /// `None` at the terminal leaf.
    pub took: Option<Branch>,
}

/// Outcome of a descent: the located leaf, if any, and the full
/// root-to-leaf path in visitation order.
#[derive(Debug)]
pub struct Descent<'t, T> {
    pub found: Option<&'t Node<T>>,
    pub path: Vec<Visit<'t, T>>,
}

/// Locate the leaf whose key equals `probe`, if one exists.
///
/// Internal nodes send the descent left when the probe is ≤ the split key.
/// With duplicate keys this lands on one of the equal leaves.
pub fn search<T>(root: &Node<T>, probe: T) -> Descent<'_, T>
where
    T: Copy + PartialOrd,
{
    descend(root, |node| {
        if coord_ord(probe, node.split_value()) != Ordering::Greater {
            Branch::Left
        } else {
            Branch::Right
        }
    })
    .resolve(|leaf| coord_ord(leaf, probe) == Ordering::Equal)
}

/// Locate the greatest leaf strictly below `probe`, if one exists.
///
/// The right subtree wins whenever it holds any leaf below the probe; any
/// qualifying leaf on the right beats everything on the left.
pub fn predecessor<T>(root: &Node<T>, probe: T) -> Descent<'_, T>
where
    T: Copy + PartialOrd,
{
    descend(root, |node| match node.right() {
        Some(right) if coord_ord(right.min_value(), probe) == Ordering::Less => Branch::Right,
        _ => Branch::Left,
    })
    .resolve(|leaf| coord_ord(leaf, probe) == Ordering::Less)
}

/// Locate the least leaf strictly above `probe`, if one exists.
pub fn successor<T>(root: &Node<T>, probe: T) -> Descent<'_, T>
where
    T: Copy + PartialOrd,
{
    descend(root, |node| match node.left() {
        Some(left) if coord_ord(left.max_value(), probe) == Ordering::Greater => Branch::Left,
        _ => Branch::Right,
    })
    .resolve(|leaf| coord_ord(leaf, probe) == Ordering::Greater)
}

/// Descend to the leftmost leaf, recording the path.
pub fn min_leaf<T>(root: &Node<T>) -> Descent<'_, T>
where
    T: Copy + PartialOrd,
{
    descend(root, |_| Branch::Left).resolve(|_| true)
}

/// Descend to the rightmost leaf, recording the path.
pub fn max_leaf<T>(root: &Node<T>) -> Descent<'_, T>
where
    T: Copy + PartialOrd,
{
    descend(root, |_| Branch::Right).resolve(|_| true)
}

/// Walk from `root` to a leaf, choosing a branch per internal node.
fn descend<T, F>(root: &Node<T>, mut choose: F) -> RawDescent<'_, T>
where
    T: Copy + PartialOrd,
    F: FnMut(&Node<T>) -> Branch,
{
    let mut path = Vec::new();
    let mut node = root;
    loop {
        match node {
            Node::Leaf { key, .. } => {
                path.push(Visit { node, took: None });
                return RawDescent {
                    leaf: node,
                    leaf_value: key.value(),
                    path,
                };
            }
            Node::Internal { left, right, .. } => {
                let took = choose(node);
                path.push(Visit {
                    node,
                    took: Some(took),
                });
                node = match took {
                    Branch::Left => left.as_ref(),
                    Branch::Right => right.as_ref(),
                };
            }
        }
    }
}

/// A completed walk, before deciding whether its leaf qualifies.
struct RawDescent<'t, T> {
    leaf: &'t Node<T>,
    leaf_value: T,
    path: Vec<Visit<'t, T>>,
}

impl<'t, T: Copy + PartialOrd> RawDescent<'t, T> {
    fn resolve<F>(self, accept: F) -> Descent<'t, T>
    where
        F: FnOnce(T) -> bool,
    {
        let found = accept(self.leaf_value).then_some(self.leaf);
        Descent {
            found,
            path: self.path,
        }
    }
}
