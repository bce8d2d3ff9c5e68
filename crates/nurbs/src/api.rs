//! High-level API for knot refinement.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for refinement.
//! It implements a fluent builder for configuring a [`KnotRefiner`], the
//! one-call [`FunctionGroup::refine`] for the default configuration, and
//! checked point evaluation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builder parameters are validated by `.build()`; insertion
//!   requests are validated by every `.refine()` call before any work.
//! * **Reusable**: A built refiner holds no per-call state and can refine many
//!   groups, from several threads.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KnotRefinerBuilder`] via `KnotRefiner::new()`.
//! 2. Chain configuration methods (`.continuity()`).
//! 3. Call `.build()` and then `.refine(&group, &insertions)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::slice;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{AxisPassFn, RefinementConfig, RefinementExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::point::rational_point;

// Publicly re-exported types
pub use crate::engine::validator::ContinuityPolicy;
pub use crate::evaluation::deviation::max_deviation;
pub use crate::model::basis::Basis;
pub use crate::model::function::Function;
pub use crate::model::group::{FunctionGroup, FunctionRef};
pub use crate::primitives::errors::{ErrorKind, NurbsError};
pub use crate::primitives::shape::GridShape;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`KnotRefiner`].
#[derive(Debug, Clone)]
pub struct KnotRefinerBuilder<T> {
    /// Multiplicity bound for inserted knots.
    pub continuity: Option<ContinuityPolicy>,

    /// Custom axis pass function (only for dev).
    #[doc(hidden)]
    pub custom_axis_pass: Option<AxisPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KnotRefinerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KnotRefinerBuilder<T> {
    /// Create a builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * continuity: [`ContinuityPolicy::Continuous`]
    /// * sequential axis passes
    pub fn new() -> Self {
        Self {
            continuity: None,
            custom_axis_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the multiplicity bound enforced on inserted knots.
    pub fn continuity(mut self, policy: ContinuityPolicy) -> Self {
        if self.continuity.is_some() {
            self.duplicate_param = Some("continuity");
        }
        self.continuity = Some(policy);
        self
    }

    // ========================================================================
    // Development Options
    // ========================================================================

    /// Set a custom axis pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_axis_pass(mut self, pass: AxisPassFn<T>) -> Self {
        self.custom_axis_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the refiner.
    pub fn build(self) -> Result<KnotRefiner<T>, NurbsError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(KnotRefiner {
            config: RefinementConfig {
                continuity: self.continuity.unwrap_or_default(),
                custom_axis_pass: self.custom_axis_pass,
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Refiner
// ============================================================================

/// A configured knot refiner.
#[derive(Debug, Clone)]
pub struct KnotRefiner<T> {
    config: RefinementConfig<T>,
}

impl<T: Float> KnotRefiner<T> {
    /// Start configuring a refiner.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> KnotRefinerBuilder<T> {
        KnotRefinerBuilder::new()
    }

    /// The active multiplicity bound.
    pub fn continuity(&self) -> ContinuityPolicy {
        self.config.continuity
    }

    /// Check an insertion request against `group` without refining.
    pub fn check<I: AsRef<[T]>>(&self, group: &FunctionGroup<T>, insertions: &[I]) -> Result<(), NurbsError> {
        RefinementExecutor::check(group, insertions, self.config.continuity)
    }

    /// Insert `insertions[d]` into dimension `d` of `group`.
    ///
    /// Returns a new group describing the same geometry; `group` is not modified.
    pub fn refine<I: AsRef<[T]>>(
        &self,
        group: &FunctionGroup<T>,
        insertions: &[I],
    ) -> Result<FunctionGroup<T>, NurbsError> {
        RefinementExecutor::run_with_config(group, insertions, &self.config)
    }
}

impl<T: Float> FunctionGroup<T> {
    /// Refine with the default configuration.
    ///
    /// Shorthand for `KnotRefiner::new().build()?.refine(self, insertions)`.
    pub fn refine<I: AsRef<[T]>>(&self, insertions: &[I]) -> Result<FunctionGroup<T>, NurbsError> {
        RefinementExecutor::run_with_config(self, insertions, &RefinementConfig::default())
    }
}

// ============================================================================
// Evaluation
// ============================================================================

impl<T: Float> FunctionGroup<T> {
    /// Evaluate every function at `u`, components concatenated in group order.
    pub fn evaluate(&self, u: &[T]) -> Result<Vec<T>, NurbsError> {
        Validator::check_parameter(self.basis(), u)?;
        Ok(rational_point(self.basis(), self.functions(), u))
    }
}

impl<T: Float> FunctionRef<'_, T> {
    /// Evaluate this function at `u`.
    pub fn evaluate(&self, u: &[T]) -> Result<Vec<T>, NurbsError> {
        Validator::check_parameter(self.basis(), u)?;
        Ok(rational_point(self.basis(), slice::from_ref(self.function()), u))
    }
}
