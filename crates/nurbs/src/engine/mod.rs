//! Layer 6: Engine
//!
//! # Purpose
//!
//! This layer orchestrates refinement by coordinating the model (basis and
//! functions) with the algorithms (channel lifting, axis insertion). It
//! validates requests and runs the per-dimension passes.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine ← You are here
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Model
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Refinement execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;
