//! Rational tensor-product point evaluation.
//!
//! ## Purpose
//!
//! Evaluates a function group, or one of its functions, at a parameter
//! vector. Downstream samplers use it to tessellate; refinement tests use it
//! to confirm that the shape did not change.
//!
//! ## Key concepts
//!
//! * **Neighbourhood**: In each dimension only `p_d + 1` basis functions are
//!   non-zero, so a point depends on `Π (p_d + 1)` control points.
//! * **Rational form**: `C(u) = Σ N(u)·w·P / Σ N(u)·w`.
//!
//! ## Invariants
//!
//! * Callers check parameters first (`Validator::check_parameter`); this
//!   module assumes an admissible `u`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::basis::{BasisScratch, basis_functions};
use crate::math::knots::find_span;
use crate::model::basis::Basis;
use crate::model::function::Function;

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate `functions` over `basis` at `u`, components concatenated.
///
/// `u` must hold one value per dimension inside the parametric domain.
pub fn rational_point<T: Float>(basis: &Basis<T>, functions: &[Function<T>], u: &[T]) -> Vec<T> {
    let dims = basis.parameter_dimensions();
    let mut first = Vec::with_capacity(dims);
    let mut values = Vec::with_capacity(dims);
    for (d, &ud) in u.iter().enumerate() {
        let knots = basis.knot_vector(d);
        let p = basis.degree(d);
        let span = find_span(knots, p, ud);
        let mut scratch = BasisScratch::new(p);
        let mut n = vec![T::zero(); p + 1];
        basis_functions(knots, p, span, ud, &mut scratch, &mut n);
        first.push(span - p);
        values.push(n);
    }

    let output: usize = functions.iter().map(Function::dimension).sum();
    let mut numerator = vec![T::zero(); output];
    let mut denominator = T::zero();
    let shape = basis.shape();
    let weights = basis.weights();

    let mut offset = vec![0usize; dims];
    loop {
        let mut flat = 0;
        let mut coefficient = T::one();
        for d in 0..dims {
            flat += (first[d] + offset[d]) * shape.stride(d);
            coefficient = coefficient * values[d][offset[d]];
        }
        let cw = coefficient * weights[flat];
        denominator = denominator + cw;

        let mut c = 0;
        for function in functions {
            let dim = function.dimension();
            let point = &function.coordinates()[flat * dim..(flat + 1) * dim];
            for (acc, &x) in numerator[c..c + dim].iter_mut().zip(point) {
                *acc = *acc + cw * x;
            }
            c += dim;
        }

        // Odometer over the (p_d + 1)-wide neighbourhood
        let mut d = 0;
        loop {
            if d == dims {
                return numerator.into_iter().map(|v| v / denominator).collect();
            }
            offset[d] += 1;
            if offset[d] <= basis.degree(d) {
                break;
            }
            offset[d] = 0;
            d += 1;
        }
    }
}
