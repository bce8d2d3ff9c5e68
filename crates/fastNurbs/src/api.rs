//! High-level API for knot refinement with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for parallel
//! refinement. It wraps the `nurbs` builder and injects the parallel axis
//! pass when the refiner runs.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `nurbs` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Feature-Gated**: Without the `cpu` feature the sequential pass runs.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelKnotRefinerBuilder`] via `KnotRefiner::new()`.
//! 2. Chain configuration methods (`.continuity()`, `.parallel()`).
//! 3. Call `.build()` and then `.refine(&group, &insertions)`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::axis_pass_parallel;

// External dependencies
use log::debug;
use num_traits::Float;

// Export dependencies from nurbs crate
use nurbs::internals::api::KnotRefinerBuilder;

// Publicly re-exported types
pub use nurbs::internals::api::{
    Basis, ContinuityPolicy, ErrorKind, Function, FunctionGroup, FunctionRef, GridShape, KnotRefiner,
    NurbsError, max_deviation,
};

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for a knot refiner with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelKnotRefinerBuilder<T: Float> {
    /// Base builder from the nurbs crate
    pub base: KnotRefinerBuilder<T>,
}

impl<T: Float> Default for ParallelKnotRefinerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelKnotRefinerBuilder<T> {
    /// Create a builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the nurbs `KnotRefinerBuilder`
    /// * parallel: true (fastNurbs extension)
    fn new() -> Self {
        let base = KnotRefinerBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the multiplicity bound enforced on inserted knots.
    pub fn continuity(mut self, policy: ContinuityPolicy) -> Self {
        self.base = self.base.continuity(policy);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the refiner.
    pub fn build(self) -> Result<ParallelKnotRefiner<T>, NurbsError> {
        // Validate by attempting to build the base refiner
        let _ = self.base.clone().build()?;

        Ok(ParallelKnotRefiner { config: self })
    }
}

// ============================================================================
// Extended Refiner
// ============================================================================

/// Knot refiner with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelKnotRefiner<T: Float> {
    config: ParallelKnotRefinerBuilder<T>,
}

impl<T: Float + Send + Sync> ParallelKnotRefiner<T> {
    /// Start configuring a parallel refiner.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ParallelKnotRefinerBuilder<T> {
        ParallelKnotRefinerBuilder::new()
    }

    /// Check an insertion request against `group` without refining.
    pub fn check<I: AsRef<[T]>>(&self, group: &FunctionGroup<T>, insertions: &[I]) -> Result<(), NurbsError> {
        self.config.base.clone().build()?.check(group, insertions)
    }

    /// Insert `insertions[d]` into dimension `d` of `group`.
    pub fn refine<I: AsRef<[T]>>(
        &self,
        group: &FunctionGroup<T>,
        insertions: &[I],
    ) -> Result<FunctionGroup<T>, NurbsError> {
        // Configure the base builder with parallel callback if enabled
        let mut builder = self.config.base.clone();

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_axis_pass(axis_pass_parallel);
            } else {
                builder.custom_axis_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_axis_pass = None;
        }

        debug!(
            "refining with {} axis pass",
            if builder.custom_axis_pass.is_some() { "parallel" } else { "sequential" }
        );

        // Delegate execution to the base implementation
        let refiner: KnotRefiner<T> = builder.build()?;
        refiner.refine(group, insertions)
    }
}
