//! # fastNurbs — Parallel knot refinement for tensor-product NURBS
//!
//! Extends the [`nurbs`] crate with a multi-threaded refinement engine. The
//! data model, validation and arithmetic are those of `nurbs`; this crate
//! replaces the per-dimension pass with one that refines independent slabs
//! of the control grid on all CPU cores via `rayon`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastNurbs::prelude::*;
//!
//! // Bilinear patch on a 4 x 3 control grid
//! let basis = Basis::clamped_uniform(&[4, 3], &[1, 1])?;
//! let z = Function::scalar((0..12).map(|i| i as f64).collect());
//! let patch = FunctionGroup::new(basis, vec![z])?;
//!
//! let refined = KnotRefiner::new().build()?.refine(&patch, &[vec![0.5], vec![0.25, 0.75]])?;
//!
//! assert_eq!(refined.basis().control_counts(), &[5, 5]);
//! assert!(max_deviation(&patch, &refined, 9)? < 1e-12);
//! # Result::<(), NurbsError>::Ok(())
//! ```
//!
//! ## Sequential Fallback
//!
//! Parallel execution is the default. Turn it off per refiner with
//! `.parallel(false)`, or build without the `cpu` feature. Results are
//! identical either way.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

/// Parallel axis pass, for injection into a `nurbs` refiner.
#[cfg(feature = "cpu")]
pub mod parallel {
    pub use crate::engine::executor::axis_pass_parallel;
}

// Layer 6: Engine - parallel execution.
mod engine;

// High-level fluent API for parallel knot refinement.
mod api;

// Standard fastNurbs prelude.
pub mod prelude {
    pub use crate::api::{
        Basis, ContinuityPolicy,
        ContinuityPolicy::{Continuous, Relaxed},
        ErrorKind, Function, FunctionGroup, FunctionRef, GridShape, NurbsError,
        ParallelKnotRefiner as KnotRefiner, ParallelKnotRefinerBuilder, max_deviation,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
