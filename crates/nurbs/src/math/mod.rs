//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions on knot vectors:
//! - Span search, multiplicities and sorted merging
//! - Cox–de Boor basis functions
//!
//! These are reusable building blocks with no knowledge of control grids.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Knot-vector utilities.
pub mod knots;

/// B-spline basis functions.
pub mod basis;
