//! Shape deviation between two function groups.
//!
//! ## Purpose
//!
//! Compares two groups that should describe the same geometry (typically a
//! group and its refinement) by sampling both on a uniform lattice over their
//! common parametric domain.
//!
//! ## Invariants
//!
//! * Both groups have the same dimension count, function count, function
//!   dimensions and domains.
//! * At least two samples per dimension are taken, so domain corners are
//!   always included.
//! * A NaN component is never hidden by `max`: it is the result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::point::rational_point;
use crate::model::group::FunctionGroup;
use crate::primitives::errors::NurbsError;

// ============================================================================
// Maximum Deviation
// ============================================================================

/// Largest absolute component difference between `a` and `b` over a lattice
/// of `samples_per_dimension` points per dimension.
///
/// Returns NaN as soon as either group evaluates to NaN at a sample.
pub fn max_deviation<T: Float>(
    a: &FunctionGroup<T>,
    b: &FunctionGroup<T>,
    samples_per_dimension: usize,
) -> Result<T, NurbsError> {
    check_compatible(a, b)?;

    let basis = a.basis();
    let dims = basis.parameter_dimensions();
    let samples = samples_per_dimension.max(2);
    let last = T::from(samples - 1).unwrap_or_else(T::one);

    let mut index = vec![0usize; dims];
    let mut u = vec![T::zero(); dims];
    let mut worst = T::zero();
    loop {
        for (d, value) in u.iter_mut().enumerate() {
            let (lower, upper) = basis.domain(d);
            *value = if index[d] + 1 == samples {
                upper
            } else {
                let t = T::from(index[d]).unwrap_or_else(T::zero) / last;
                lower + (upper - lower) * t
            };
        }

        let pa = rational_point(a.basis(), a.functions(), &u);
        let pb = rational_point(b.basis(), b.functions(), &u);
        for (&x, &y) in pa.iter().zip(&pb) {
            let difference = (x - y).abs();
            if difference.is_nan() {
                return Ok(difference);
            }
            worst = worst.max(difference);
        }

        let mut d = 0;
        loop {
            if d == dims {
                return Ok(worst);
            }
            index[d] += 1;
            if index[d] < samples {
                break;
            }
            index[d] = 0;
            d += 1;
        }
    }
}

fn check_compatible<T: Float>(a: &FunctionGroup<T>, b: &FunctionGroup<T>) -> Result<(), NurbsError> {
    let (ba, bb) = (a.basis(), b.basis());
    if ba.parameter_dimensions() != bb.parameter_dimensions() {
        return Err(NurbsError::IncompatibleGroups("parameter dimension counts differ"));
    }
    if a.len() != b.len() {
        return Err(NurbsError::IncompatibleGroups("function counts differ"));
    }
    if a
        .functions()
        .iter()
        .zip(b.functions())
        .any(|(fa, fb)| fa.dimension() != fb.dimension())
    {
        return Err(NurbsError::IncompatibleGroups("function dimensions differ"));
    }
    if (0..ba.parameter_dimensions()).any(|d| ba.domain(d) != bb.domain(d)) {
        return Err(NurbsError::IncompatibleGroups("parametric domains differ"));
    }
    Ok(())
}
