//! Multi-knot insertion along one axis of a control grid.
//!
//! ## Purpose
//!
//! This module refines one parameter dimension of a homogeneous control grid:
//! every knot of an ascending sequence `X` is inserted into the dimension's
//! knot vector `U` and the control rows are recomputed so the spline is
//! unchanged.
//!
//! ## Design notes
//!
//! * **Single sweep**: All `r + 1` values of `X` are inserted in one backward
//!   sweep over the rows (Boehm insertion generalized to a knot sequence). The
//!   result is the same chain of convex combinations as inserting the values
//!   one at a time, without rebuilding the grid per value.
//! * **Wide points**: Inside a slab, a row along the axis is `width`
//!   contiguous scalars (every channel of every control point sharing that
//!   axis index). Each convex combination is applied to the whole row, which
//!   refines the weight and all coordinates with identical arithmetic.
//! * **Slabs**: Slabs are independent. [`AxisInsertion::refine_slabs`] walks
//!   them in order; an extension crate may walk them in parallel.
//!
//! ## Key concepts
//!
//! * With `U[k] <= x < U[k+1]`, rows `k - p + 1 ..= k` are replaced by
//!   `α·P[j] + (1 - α)·P[j-1]`, `α = (x - U[j]) / (U[j+p] - U[j])`.
//! * Rows before the first affected window and after the last one are copied.
//!
//! ## Invariants
//!
//! * `X` is non-empty, ascending and strictly inside `(U[p], U[n+1])`.
//! * No value reaches multiplicity above `p + 1` in the merged vector, so every
//!   ratio has a positive denominator unless its numerator is zero too.
//! * `merged` is the sorted merge of `U` and `X`.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (handled by the engine).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::knots::{find_span, last_control_index};

// ============================================================================
// Axis Insertion
// ============================================================================

/// Everything one axis pass needs, shared by every slab.
#[derive(Debug, Clone, Copy)]
pub struct AxisInsertion<'a, T> {
    /// Knot vector `U` of the axis before refinement.
    pub knots: &'a [T],

    /// Sorted merge of `knots` and `inserted`.
    pub merged: &'a [T],

    /// Ascending knots `X` to insert.
    pub inserted: &'a [T],

    /// Degree of the axis.
    pub degree: usize,

    /// Scalars per row (`inner × channels`).
    pub width: usize,
}

impl<'a, T: Float> AxisInsertion<'a, T> {
    /// Rows per slab before refinement.
    #[inline]
    pub fn source_rows(&self) -> usize {
        last_control_index(self.knots, self.degree) + 1
    }

    /// Rows per slab after refinement.
    #[inline]
    pub fn target_rows(&self) -> usize {
        self.source_rows() + self.inserted.len()
    }

    /// Scalars per source slab.
    #[inline]
    pub fn source_slab_len(&self) -> usize {
        self.source_rows() * self.width
    }

    /// Scalars per target slab.
    #[inline]
    pub fn target_slab_len(&self) -> usize {
        self.target_rows() * self.width
    }

    /// Refine every slab of `src` into `dst`, one slab after another.
    pub fn refine_slabs(&self, src: &[T], dst: &mut [T]) {
        for (s, d) in src
            .chunks_exact(self.source_slab_len())
            .zip(dst.chunks_exact_mut(self.target_slab_len()))
        {
            self.refine_slab(s, d);
        }
    }

    /// Refine one slab.
    ///
    /// `src` holds `source_rows()` rows and `dst` holds `target_rows()` rows.
    pub fn refine_slab(&self, src: &[T], dst: &mut [T]) {
        let u = self.knots;
        let ubar = self.merged;
        let x = self.inserted;
        let p = self.degree;
        let w = self.width;

        if x.is_empty() {
            dst.copy_from_slice(src);
            return;
        }

        let n = last_control_index(u, p);
        let r = x.len() - 1;
        let a = find_span(u, p, x[0]);
        let b = find_span(u, p, x[r]) + 1;

        // Unaffected head and tail
        dst[..(a - p + 1) * w].copy_from_slice(&src[..(a - p + 1) * w]);
        dst[(b + r) * w..(n + r + 2) * w].copy_from_slice(&src[(b - 1) * w..(n + 1) * w]);

        let mut i = b + p - 1;
        let mut k = b + p + r;
        for j in (0..=r).rev() {
            while x[j] <= u[i] && i > a {
                copy_row(src, i - p - 1, dst, k - p - 1, w);
                k -= 1;
                i -= 1;
            }
            dst.copy_within((k - p) * w..(k - p + 1) * w, (k - p - 1) * w);

            for l in 1..=p {
                let ind = k - p + l;
                let numerator = ubar[k + l] - x[j];
                if numerator == T::zero() {
                    // x coincides with the knot bounding this support
                    dst.copy_within(ind * w..(ind + 1) * w, (ind - 1) * w);
                } else {
                    let alpha = numerator / (ubar[k + l] - u[i + l - p]);
                    blend_rows(dst, ind, alpha, w);
                }
            }
            k -= 1;
        }
    }
}

// ============================================================================
// Row Helpers
// ============================================================================

#[inline]
fn copy_row<T: Copy>(src: &[T], from: usize, dst: &mut [T], to: usize, width: usize) {
    dst[to * width..(to + 1) * width].copy_from_slice(&src[from * width..(from + 1) * width]);
}

/// `row[ind-1] = α·row[ind-1] + (1 - α)·row[ind]`.
#[inline]
fn blend_rows<T: Float>(dst: &mut [T], ind: usize, alpha: T, width: usize) {
    let beta = T::one() - alpha;
    let (head, tail) = dst.split_at_mut(ind * width);
    let target = &mut head[(ind - 1) * width..];
    for (t, &s) in target.iter_mut().zip(&tail[..width]) {
        *t = alpha * *t + beta * s;
    }
}
