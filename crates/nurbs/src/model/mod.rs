//! Layer 3: Model
//!
//! # Purpose
//!
//! This layer defines the immutable value types of a tensor-product NURBS:
//! - [`basis::Basis`]: knot vectors, degrees and rational weights
//! - [`function::Function`]: control coordinates of one function
//! - [`group::FunctionGroup`]: a basis plus the functions defined over it
//!
//! Constructors validate shape invariants; nothing here mutates after
//! construction.
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
//! Layer 3: Model ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Tensor-product rational basis.
pub mod basis;

/// Coordinate functions.
pub mod function;

/// Function groups and handles.
pub mod group;
