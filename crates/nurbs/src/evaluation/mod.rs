//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer samples function groups:
//! - Rational tensor-product point evaluation
//! - Maximum deviation between two groups over a parameter lattice
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Model
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Point evaluation.
pub mod point;

/// Shape deviation between groups.
pub mod deviation;
