//! Knot-vector utilities.
//!
//! ## Purpose
//!
//! Pure functions on a single knot vector: locating the span of a parameter,
//! counting knot multiplicities, and merging sorted knot sequences.
//!
//! ## Key concepts
//!
//! * **Span**: For a knot vector `U` of degree `p` with `n + 1` control points,
//!   the span of `u` is the index `k` in `[p, n]` with `U[k] <= u < U[k+1]`;
//!   `u == U[n+1]` maps to `n` so the domain end is evaluable.
//! * **Domain**: The parametric domain is `[U[p], U[n+1]]`.
//!
//! ## Invariants
//!
//! * Inputs are non-decreasing and satisfy `knots.len() >= degree + 2`.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (handled by the model layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Span Search
// ============================================================================

/// Index of the last control point for a knot vector of the given degree.
#[inline]
pub fn last_control_index<T>(knots: &[T], degree: usize) -> usize {
    knots.len() - degree - 2
}

/// Parametric domain `[U[p], U[n+1]]`.
#[inline]
pub fn domain<T: Copy>(knots: &[T], degree: usize) -> (T, T) {
    let n = last_control_index(knots, degree);
    (knots[degree], knots[n + 1])
}

/// Find the knot span of `u` by binary search.
///
/// `u` must lie in the parametric domain; values at or above its end map to
/// the last span of non-zero length.
pub fn find_span<T: Float>(knots: &[T], degree: usize, u: T) -> usize {
    let n = last_control_index(knots, degree);
    if u >= knots[n + 1] {
        let mut span = n;
        while span > degree && knots[span] == knots[n + 1] {
            span -= 1;
        }
        return span;
    }

    // Last index in [p, n] with U[i] <= u
    let mut low = degree;
    let mut high = n + 1;
    while low < high {
        let mid = (low + high) / 2;
        if u < knots[mid] {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    // low > degree whenever U[p] <= u
    low.max(degree + 1) - 1
}

// ============================================================================
// Multiplicity
// ============================================================================

/// Number of knots exactly equal to `u`.
pub fn multiplicity<T: Float>(knots: &[T], u: T) -> usize {
    let start = knots.partition_point(|&k| k < u);
    let end = knots.partition_point(|&k| k <= u);
    end - start
}

// ============================================================================
// Merging
// ============================================================================

/// Merge two non-decreasing sequences into one.
///
/// Existing knots equal to an inserted value come first.
pub fn merge_sorted<T: Float>(knots: &[T], inserted: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(knots.len() + inserted.len());
    let mut i = 0;
    for &x in inserted {
        while i < knots.len() && knots[i] <= x {
            merged.push(knots[i]);
            i += 1;
        }
        merged.push(x);
    }
    merged.extend_from_slice(&knots[i..]);
    merged
}
