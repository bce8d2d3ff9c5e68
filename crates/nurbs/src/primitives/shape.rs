//! Control-grid shape and multi-index arithmetic.
//!
//! ## Purpose
//!
//! A tensor-product spline stores one control point per multi-index
//! `(i_0, …, i_{D-1})`. This module maps multi-indices to flat offsets and
//! describes how a grid splits into independent slabs along one axis.
//!
//! ## Key concepts
//!
//! * **Layout**: The first parameter dimension varies fastest:
//!   `flat = Σ_d i_d · stride_d`, `stride_0 = 1`, `stride_d = Π_{e<d} n_e`.
//! * **Slabs**: Along axis `l` the grid is `outer = Π_{e>l} n_e` contiguous
//!   slabs; inside a slab, index `j` along `l` selects a contiguous row of
//!   `inner = stride_l` control points.
//!
//! ## Invariants
//!
//! * Every count is at least 1, so `total >= 1`.
//! * `strides.len() == counts.len()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Grid Shape
// ============================================================================

/// Per-dimension control counts of a tensor-product control grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridShape {
    counts: Vec<usize>,
    strides: Vec<usize>,
    total: usize,
}

impl GridShape {
    /// Create a shape from per-dimension control counts.
    pub fn new(counts: Vec<usize>) -> Self {
        let mut strides = Vec::with_capacity(counts.len());
        let mut total = 1usize;
        for &n in &counts {
            strides.push(total);
            total *= n;
        }
        Self {
            counts,
            strides,
            total,
        }
    }

    /// Number of parameter dimensions.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.counts.len()
    }

    /// Control count along dimension `d`.
    #[inline]
    pub fn count(&self, d: usize) -> usize {
        self.counts[d]
    }

    /// Control counts of every dimension.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Flat distance between neighbours along dimension `d`.
    #[inline]
    pub fn stride(&self, d: usize) -> usize {
        self.strides[d]
    }

    /// Total number of control points.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of control points in one row along `axis` (the axis stride).
    #[inline]
    pub fn inner(&self, axis: usize) -> usize {
        self.strides[axis]
    }

    /// Number of independent slabs along `axis`.
    #[inline]
    pub fn outer(&self, axis: usize) -> usize {
        self.total / (self.strides[axis] * self.counts[axis])
    }

    /// Flat offset of a multi-index, or `None` if it is out of range.
    pub fn flatten(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.counts.len() {
            return None;
        }
        let mut flat = 0;
        for ((&i, &n), &s) in index.iter().zip(&self.counts).zip(&self.strides) {
            if i >= n {
                return None;
            }
            flat += i * s;
        }
        Some(flat)
    }

    /// Multi-index of a flat offset.
    pub fn unflatten(&self, mut flat: usize) -> Vec<usize> {
        self.counts
            .iter()
            .map(|&n| {
                let i = flat % n;
                flat /= n;
                i
            })
            .collect()
    }

    /// Shape after adding `extra` control points along `axis`.
    pub fn grown(&self, axis: usize, extra: usize) -> Self {
        let mut counts = self.counts.clone();
        counts[axis] += extra;
        Self::new(counts)
    }
}
