//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Model
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Control-grid shape and multi-index arithmetic.
pub mod shape;

/// Channel grid storage.
pub mod buffer;
