//! Execution engine for tensor-product knot refinement.
//!
//! ## Purpose
//!
//! This module drives a refinement from request to result: it validates the
//! request, lifts the group into homogeneous channels, runs one insertion
//! pass per parameter dimension and projects the refined grid into a new
//! group.
//!
//! ## Design notes
//!
//! * **Validate-then-apply**: Every check runs before the first allocation of
//!   output storage.
//! * **Separable**: Pass `l + 1` consumes the grid produced by pass `l`.
//!   Dimensions with nothing to insert are skipped; an all-empty request
//!   returns a copy of the source group.
//! * **Pluggable pass**: The slab loop of a pass is a function pointer. The
//!   default walks slabs in order; an extension crate may inject a parallel
//!   one.
//! * **Fresh buffers**: Each pass allocates its output grid; the source group
//!   is only read.
//!
//! ## Invariants
//!
//! * After pass `l`, axis `l` holds `n_l + r_l` control rows and its knot
//!   vector is the sorted merge of the old knots and the inserted values.
//! * Degrees never change.
//!
//! ## Non-goals
//!
//! * This module does not schedule threads itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::homogeneous::{ChannelLayout, lift, project};
use crate::algorithms::insertion::AxisInsertion;
use crate::engine::validator::{ContinuityPolicy, Validator};
use crate::math::knots::merge_sorted;
use crate::model::group::FunctionGroup;
use crate::primitives::buffer::ChannelGrid;
use crate::primitives::errors::NurbsError;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom axis pass function
#[doc(hidden)]
pub type AxisPassFn<T> = fn(
    &AxisInsertion<'_, T>, // axis parameters
    &[T],                  // source grid
    &mut [T],              // target grid
);

/// Configuration of one refinement run.
#[derive(Debug, Clone)]
pub struct RefinementConfig<T> {
    /// Multiplicity bound enforced before refinement.
    pub continuity: ContinuityPolicy,

    /// Custom axis pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_axis_pass: Option<AxisPassFn<T>>,

    /// Whether to use parallel execution
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T> Default for RefinementConfig<T> {
    fn default() -> Self {
        Self {
            continuity: ContinuityPolicy::default(),
            custom_axis_pass: None,
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs refinements.
pub struct RefinementExecutor;

impl RefinementExecutor {
    /// Check an insertion request without refining.
    pub fn check<T, I>(group: &FunctionGroup<T>, insertions: &[I], continuity: ContinuityPolicy) -> Result<(), NurbsError>
    where
        T: Float,
        I: AsRef<[T]>,
    {
        Validator::check_insertion_request(group.basis(), insertions)?;
        Validator::check_continuity(group.basis(), insertions, continuity)
    }

    /// Refine `group` by inserting `insertions[d]` into dimension `d`.
    pub fn run_with_config<T, I>(
        group: &FunctionGroup<T>,
        insertions: &[I],
        config: &RefinementConfig<T>,
    ) -> Result<FunctionGroup<T>, NurbsError>
    where
        T: Float,
        I: AsRef<[T]>,
    {
        Self::check(group, insertions, config.continuity)?;

        if insertions.iter().all(|entry| entry.as_ref().is_empty()) {
            debug!("empty insertion request, copying {} functions", group.len());
            return Ok(group.clone());
        }

        let basis = group.basis();
        let pass: AxisPassFn<T> = match config.custom_axis_pass {
            Some(callback) if config.parallel => callback,
            _ => axis_pass_sequential,
        };

        let layout = ChannelLayout::of(group);
        let mut grid = lift(group, &layout);
        let mut knots: Vec<Vec<T>> = basis.knot_vectors().to_vec();

        for (axis, entry) in insertions.iter().enumerate() {
            let inserted = entry.as_ref();
            if inserted.is_empty() {
                continue;
            }

            let merged = merge_sorted(&knots[axis], inserted);
            let refined = {
                let insertion = AxisInsertion {
                    knots: &knots[axis],
                    merged: &merged,
                    inserted,
                    degree: basis.degree(axis),
                    width: grid.row_width(axis),
                };
                let shape = grid.shape().grown(axis, inserted.len());
                let mut target = ChannelGrid::zeros(shape, grid.channels());
                pass(&insertion, grid.as_slice(), target.as_mut_slice());
                target
            };

            debug!(
                "axis {axis}: inserted {} knots, {} -> {} control rows, {} slabs",
                inserted.len(),
                grid.shape().count(axis),
                refined.shape().count(axis),
                grid.shape().outer(axis)
            );

            knots[axis] = merged;
            grid = refined;
        }

        let refined = project(&grid, &layout, knots, basis.degrees().to_vec())?;
        debug!(
            "refined {} functions: control counts {:?} -> {:?}",
            group.len(),
            basis.control_counts(),
            refined.basis().control_counts()
        );
        Ok(refined)
    }
}

// ============================================================================
// Default Axis Pass
// ============================================================================

/// Refine every slab in order.
pub fn axis_pass_sequential<T: Float>(insertion: &AxisInsertion<'_, T>, src: &[T], dst: &mut [T]) {
    insertion.refine_slabs(src, dst);
}
