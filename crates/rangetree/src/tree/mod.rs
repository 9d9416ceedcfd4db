//! Layer 2: Tree
//!
//! ## Purpose
//!
//! This layer provides the leaf-oriented balanced binary tree: the node
//! representation with its cached aggregates, and the construction pipeline
//! that turns a point sequence into a tree with a secondary structure on
//! every node of every non-terminal axis.
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Input
//!   ↓
//! Layer 5: Query Engine
//!   ↓
//! Layer 4: Decomposition
//!   ↓
//! Layer 3: Navigation
//!   ↓
//! Layer 2: Tree ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Node representation and leaf traversal.
pub mod node;

/// Tree construction (pairwise merge, secondary attachment, parallel build).
pub mod build;
