//! B-spline basis functions.
//!
//! ## Purpose
//!
//! Computes the `p + 1` non-vanishing B-spline basis functions of a span with
//! the Cox–de Boor triangle, the building block of tensor-product evaluation.
//!
//! ## Key concepts
//!
//! * **Local support**: On span `k` only `N_{k-p}, …, N_k` are non-zero.
//! * **Partition of unity**: The returned values sum to one.
//!
//! ## Invariants
//!
//! * `U[k] < U[k+1]` for the span passed in, so every denominator
//!   `U[k+1+r] - U[k+1-j+r]` is positive.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Basis Functions
// ============================================================================

/// Scratch space for [`basis_functions`], sized for one degree.
#[derive(Debug, Clone)]
pub struct BasisScratch<T> {
    left: Vec<T>,
    right: Vec<T>,
}

impl<T: Float> BasisScratch<T> {
    /// Allocate scratch space for degree `p`.
    pub fn new(degree: usize) -> Self {
        Self {
            left: vec![T::zero(); degree + 1],
            right: vec![T::zero(); degree + 1],
        }
    }
}

/// Evaluate the non-vanishing basis functions `N_{span-p..=span}` at `u`.
///
/// `out` must hold `degree + 1` values.
pub fn basis_functions<T: Float>(
    knots: &[T],
    degree: usize,
    span: usize,
    u: T,
    scratch: &mut BasisScratch<T>,
    out: &mut [T],
) {
    let left = &mut scratch.left;
    let right = &mut scratch.right;

    out[0] = T::one();
    for j in 1..=degree {
        left[j] = u - knots[span + 1 - j];
        right[j] = knots[span + j] - u;
        let mut saved = T::zero();
        for r in 0..j {
            let temp = out[r] / (right[r + 1] + left[j - r]);
            out[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        out[j] = saved;
    }
}
