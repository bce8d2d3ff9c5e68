//! Layer 4: Algorithms
//!
//! This layer implements the refinement arithmetic: packing a function group
//! into homogeneous channels and inserting knots along one axis of the
//! resulting grid. It is orchestrated by the engine layer.

// Homogeneous channel lifting and projection.
pub mod homogeneous;

// Multi-knot insertion along one axis.
pub mod insertion;
