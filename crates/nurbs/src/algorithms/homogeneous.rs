//! Homogeneous channel lifting and projection.
//!
//! ## Purpose
//!
//! Knot insertion on a rational spline is an affine operation only in
//! homogeneous coordinates. This module packs a [`FunctionGroup`] into one
//! [`ChannelGrid`] of `(w, w·x₁, w·x₂, …)` tuples and unpacks a refined grid
//! back into a new group.
//!
//! ## Key concepts
//!
//! * **Channel 0** is the weight.
//! * **Function channels** follow in group order; function `f` occupies
//!   `dimension_f` consecutive channels starting at `1 + Σ_{g<f} dimension_g`.
//!
//! ## Invariants
//!
//! * Lifting then projecting with unchanged knots reproduces the group up to
//!   rounding of `(w·x) / w`.
//!
//! ## Non-goals
//!
//! * This module does not refine anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::model::basis::Basis;
use crate::model::function::Function;
use crate::model::group::FunctionGroup;
use crate::primitives::buffer::ChannelGrid;
use crate::primitives::errors::NurbsError;

// ============================================================================
// Channel Layout
// ============================================================================

/// Where each function's components live inside a homogeneous point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLayout {
    offsets: Vec<usize>,
    dimensions: Vec<usize>,
    channels: usize,
}

impl ChannelLayout {
    /// Layout for functions with the given dimensions.
    pub fn new(dimensions: Vec<usize>) -> Self {
        let mut offsets = Vec::with_capacity(dimensions.len());
        let mut next = 1;
        for &d in &dimensions {
            offsets.push(next);
            next += d;
        }
        Self {
            offsets,
            dimensions,
            channels: next,
        }
    }

    /// Layout of a group's functions.
    pub fn of<T: Float>(group: &FunctionGroup<T>) -> Self {
        Self::new(group.functions().iter().map(Function::dimension).collect())
    }

    /// Channels per point, weight included.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of functions.
    #[inline]
    pub fn functions(&self) -> usize {
        self.dimensions.len()
    }

    /// First channel of function `f`.
    #[inline]
    pub fn offset(&self, f: usize) -> usize {
        self.offsets[f]
    }

    /// Components of function `f`.
    #[inline]
    pub fn dimension(&self, f: usize) -> usize {
        self.dimensions[f]
    }
}

// ============================================================================
// Lifting
// ============================================================================

/// Pack a group into weighted homogeneous channels.
pub fn lift<T: Float>(group: &FunctionGroup<T>, layout: &ChannelLayout) -> ChannelGrid<T> {
    let basis = group.basis();
    let mut grid = ChannelGrid::zeros(basis.shape().clone(), layout.channels());

    for (i, &w) in basis.weights().iter().enumerate() {
        let point = grid.point_mut(i);
        point[0] = w;
        for (f, function) in group.functions().iter().enumerate() {
            let dim = layout.dimension(f);
            let start = layout.offset(f);
            let src = &function.coordinates()[i * dim..(i + 1) * dim];
            for (dst, &x) in point[start..start + dim].iter_mut().zip(src) {
                *dst = w * x;
            }
        }
    }
    grid
}

// ============================================================================
// Projection
// ============================================================================

/// Unpack refined homogeneous channels into a new group.
///
/// `knots` and `degrees` describe the refined basis; its control counts must
/// match the grid's shape.
pub fn project<T: Float>(
    grid: &ChannelGrid<T>,
    layout: &ChannelLayout,
    knots: Vec<Vec<T>>,
    degrees: Vec<usize>,
) -> Result<FunctionGroup<T>, NurbsError> {
    let total = grid.shape().total();
    let mut weights = Vec::with_capacity(total);
    let mut coordinates: Vec<Vec<T>> = (0..layout.functions())
        .map(|f| Vec::with_capacity(total * layout.dimension(f)))
        .collect();

    for i in 0..total {
        let point = grid.point(i);
        let w = point[0];
        weights.push(w);
        for (f, coords) in coordinates.iter_mut().enumerate() {
            let start = layout.offset(f);
            coords.extend(point[start..start + layout.dimension(f)].iter().map(|&wx| wx / w));
        }
    }

    let basis = Basis::new(knots, degrees, weights)?;
    let functions = coordinates
        .into_iter()
        .enumerate()
        .map(|(f, coords)| Function::new(layout.dimension(f), coords))
        .collect::<Result<Vec<_>, _>>()?;
    FunctionGroup::new(basis, functions)
}
