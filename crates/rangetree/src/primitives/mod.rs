//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer provides the vocabulary the rest of the crate is written in:
//! immutable multi-dimensional points, single-axis key projections used for
//! ordering, and the crate's error type.
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
//! Layer 2: Tree
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types and the crate-wide result alias.
pub mod errors;

/// Points and their single-axis key projections.
pub mod point;
