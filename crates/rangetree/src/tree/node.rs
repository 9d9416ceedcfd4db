//! Range-tree nodes.
//!
//! ## Purpose
//!
//! This module defines the node representation shared by every tree in the
//! crate. Trees are leaf-oriented: data lives only in leaves, and an
//! internal node summarizes the contiguous run of leaves below it through
//! cached aggregates (`min`, `max`, `size`) and the split key descents
//! branch on.
//!
//! ## Key concepts
//!
//! * **Split key**: the greatest key of the left subtree. Descents go left
//!   when the probe is less than or equal to it.
//! * **Secondary structure**: a complete tree over the same points keyed on
//!   the next axis, owned by every node of every non-terminal axis.
//!
//! ## Invariants
//!
//! * Every key under `left` is ≤ the split key, every key under `right`
//!   is ≥ it; leaves read left-to-right are sorted on the tree's axis.
//! * Nodes are immutable after construction, except the one-time secondary
//!   attachment performed during the build.

use crate::primitives::point::AxisKey;

/// A node in a single-axis range tree.
///
/// Leaves hold exactly one key. Internal nodes own both children and cache
/// the aggregates of their leaf run.
#[derive(Debug, Clone)]
pub enum Node<T> {
    Leaf {
        key: AxisKey<T>,
        secondary: Option<Box<Node<T>>>,
    },
    Internal {
        left: Box<Node<T>>,
        right: Box<Node<T>>,
        /// Greatest key in `left`; descents go left when the probe is ≤ this.
        split: AxisKey<T>,
        min: AxisKey<T>,
        max: AxisKey<T>,
        size: usize,
        secondary: Option<Box<Node<T>>>,
    },
}

impl<T> Node<T> {
    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves in this subtree.
    pub fn size(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { size, .. } => *size,
        }
    }

    /// Smallest key in this subtree.
    pub fn min(&self) -> &AxisKey<T> {
        match self {
            Node::Leaf { key, .. } => key,
            Node::Internal { min, .. } => min,
        }
    }

    /// Greatest key in this subtree.
    pub fn max(&self) -> &AxisKey<T> {
        match self {
            Node::Leaf { key, .. } => key,
            Node::Internal { max, .. } => max,
        }
    }

    /// The key descents branch on. For a leaf this is its own key.
    pub fn split_key(&self) -> &AxisKey<T> {
        match self {
            Node::Leaf { key, .. } => key,
            Node::Internal { split, .. } => split,
        }
    }

    /// The key held by a leaf, or `None` for internal nodes.
    pub fn leaf_key(&self) -> Option<&AxisKey<T>> {
        match self {
            Node::Leaf { key, .. } => Some(key),
            Node::Internal { .. } => None,
        }
    }

    /// Left child, or `None` for leaves.
    pub fn left(&self) -> Option<&Node<T>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, .. } => Some(left.as_ref()),
        }
    }

    /// Right child, or `None` for leaves.
    pub fn right(&self) -> Option<&Node<T>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { right, .. } => Some(right.as_ref()),
        }
    }

    /// The secondary tree on the next axis, if this node carries one.
    pub fn secondary(&self) -> Option<&Node<T>> {
        match self {
            Node::Leaf { secondary, .. } | Node::Internal { secondary, .. } => {
                secondary.as_deref()
            }
        }
    }

    pub(crate) fn set_secondary(&mut self, tree: Node<T>) {
        match self {
            Node::Leaf { secondary, .. } | Node::Internal { secondary, .. } => {
                *secondary = Some(Box::new(tree));
            }
        }
    }

    /// Left-to-right iteration over the leaf keys of this subtree.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves { stack: vec![self] }
    }
}

impl<T: Copy + PartialOrd> Node<T> {
    /// A fresh leaf with no secondary structure.
    pub fn leaf(key: AxisKey<T>) -> Self {
        Node::Leaf {
            key,
            secondary: None,
        }
    }

    /// Merge two adjacent subtrees into an internal node.
    ///
    /// `left` must hold the smaller run of leaves; the aggregates are cached
    /// from the children, never recomputed from the leaves.
    pub fn merge(left: Node<T>, right: Node<T>) -> Self {
        let size = left.size() + right.size();
        let split = left.max().clone();
        let min = left.min().clone();
        let max = right.max().clone();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            split,
            min,
            max,
            size,
            secondary: None,
        }
    }

    /// Projected coordinate of the smallest key.
    pub fn min_value(&self) -> T {
        self.min().value()
    }

    /// Projected coordinate of the greatest key.
    pub fn max_value(&self) -> T {
        self.max().value()
    }

    /// Projected coordinate of the split key.
    pub fn split_value(&self) -> T {
        self.split_key().value()
    }
}

/// Left-to-right iterator over the leaf keys of a subtree.
#[derive(Debug)]
pub struct Leaves<'t, T> {
    stack: Vec<&'t Node<T>>,
}

impl<'t, T> Iterator for Leaves<'t, T> {
    type Item = &'t AxisKey<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf { key, .. } => return Some(key),
                Node::Internal { left, right, .. } => {
                    self.stack.push(right.as_ref());
                    self.stack.push(left.as_ref());
                }
            }
        }
        None
    }
}
