//! # nurbs — Shape-preserving knot refinement for tensor-product NURBS
//!
//! Represents rational B-spline curves, surfaces and volumes of any number of
//! parameter dimensions, and refines them by knot insertion: new knots are
//! added to the parametrization and a new control grid is computed that
//! describes exactly the same geometry.
//!
//! ## What is knot refinement?
//!
//! A NURBS is defined by knot vectors, degrees, weights and control points.
//! Inserting a knot adds one basis function along its dimension; the control
//! points are recomputed as convex combinations of their neighbours so the
//! curve or surface does not move. Refinement is the standard preparation for
//! splitting, degree elevation and adaptive tessellation.
//!
//! ## Quick Start
//!
//! ```rust
//! use nurbs::prelude::*;
//!
//! // A quarter circle: quadratic, rational
//! let basis = Basis::new(
//!     vec![vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]],
//!     vec![2],
//!     vec![1.0, core::f64::consts::FRAC_1_SQRT_2, 1.0],
//! )?;
//! let xy = Function::new(2, vec![1.0, 0.0, 1.0, 1.0, 0.0, 1.0])?;
//! let arc = FunctionGroup::new(basis, vec![xy])?;
//!
//! // Insert two knots into the only parameter dimension
//! let refiner = KnotRefiner::new().continuity(Continuous).build()?;
//! let refined = refiner.refine(&arc, &[vec![0.25, 0.5]])?;
//!
//! assert_eq!(refined.basis().control_count(0), 5);
//! assert!(max_deviation(&arc, &refined, 33)? < 1e-12);
//!
//! println!("{}", refined);
//! # Result::<(), NurbsError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Parameter dimensions: 1
//!   Degrees:              [2]
//!   Control counts:       [5]
//!   Rational:             true
//!
//! Knot Vectors:
//!   [0] 0.0000 0.0000 0.0000 0.2500 0.5000 1.0000 1.0000 1.0000
//!
//! Functions:
//!   [0] dimension 2, 10 coordinates
//! ```
//!
//! ### Result and Error Handling
//!
//! Construction, refinement and evaluation return `Result<_, NurbsError>`.
//! Errors are classified by [`NurbsError::kind`](prelude::NurbsError::kind):
//!
//! - **Configuration**: inconsistent knot vectors, weights or coordinates.
//! - **Validation**: an insertion request that must not be applied (wrong
//!   number of entries, values outside the domain, excess multiplicity).
//! - **Evaluation**: a parameter outside the domain.
//!
//! A rejected request never produces partial output, and the source group is
//! never modified.
//!
//! ```rust
//! use nurbs::prelude::*;
//!
//! let line = FunctionGroup::new(
//!     Basis::non_rational(vec![vec![0.0, 0.0, 1.0, 1.0]], vec![1])?,
//!     vec![Function::scalar(vec![0.0, 2.0])],
//! )?;
//!
//! match line.refine(&[vec![1.0]]) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert!(e.is_validation()),
//! }
//! # Result::<(), NurbsError>::Ok(())
//! ```
//!
//! ## Grid Layout
//!
//! Weights and coordinates are flat arrays over the control grid with the
//! first parameter dimension varying fastest. A function of dimension `k`
//! stores the `k` components of each control point consecutively.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! nurbs = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: one `debug` record per refined
//! dimension and per refinement, `trace` records for rejected requests. No
//! logger is installed.
//!
//! ## References
//!
//! - Boehm, W. (1980). "Inserting new knots into B-spline curves"
//! - Piegl, L. & Tiller, W. (1997). "The NURBS Book", 2nd ed., chapter 5
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure functions on knot vectors.
mod math;

// Layer 3: Model - basis, functions and groups.
mod model;

// Layer 4: Algorithms - homogeneous channels and axis insertion.
mod algorithms;

// Layer 5: Evaluation - point evaluation and deviation.
mod evaluation;

// Layer 6: Engine - validation and execution control.
mod engine;

// High-level fluent API for knot refinement.
mod api;

// Standard nurbs prelude.
pub mod prelude {
    pub use crate::api::{
        Basis, ContinuityPolicy,
        ContinuityPolicy::{Continuous, Relaxed},
        ErrorKind, Function, FunctionGroup, FunctionRef, GridShape, KnotRefiner, KnotRefinerBuilder,
        NurbsError, max_deviation,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod model {
        pub use crate::model::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
