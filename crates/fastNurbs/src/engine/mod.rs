//! Layer 6: Engine
//!
//! This layer provides the parallel execution engine for knot refinement.
//! It distributes the slabs of each axis pass across CPU cores.

// Parallel execution engine using CPU threads
#[cfg(feature = "cpu")]
pub mod executor;
