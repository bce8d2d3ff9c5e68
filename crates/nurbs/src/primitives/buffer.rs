//! Channel grid storage for homogeneous control points.
//!
//! ## Purpose
//!
//! Refinement drives the weight and every function component through the same
//! interpolation arithmetic. This module provides the flat buffer that holds
//! all of those channels for every control point of a grid.
//!
//! ## Design notes
//!
//! * **Point-major**: The `channels` scalars of one control point are
//!   contiguous, and points follow the [`GridShape`] flat order.
//! * **Rows**: Because points along a slab row are contiguous, one index
//!   along an axis addresses `inner × channels` consecutive scalars. The
//!   per-axis pass treats such a row as one wide point.
//! * **Fresh allocation**: Every pass writes into a newly allocated grid; the
//!   source grid is only read.
//!
//! ## Invariants
//!
//! * `data.len() == shape.total() * channels`.
//! * `channels >= 1`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::shape::GridShape;

// ============================================================================
// Channel Grid
// ============================================================================

/// Flat storage of `channels` scalars per control point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelGrid<T> {
    shape: GridShape,
    channels: usize,
    data: Vec<T>,
}

impl<T: Copy + Zero> ChannelGrid<T> {
    /// Allocate a zero-filled grid.
    pub fn zeros(shape: GridShape, channels: usize) -> Self {
        let len = shape.total() * channels;
        Self {
            shape,
            channels,
            data: vec![T::zero(); len],
        }
    }
}

impl<T> ChannelGrid<T> {
    /// Wrap existing point-major data.
    ///
    /// Returns `None` if `data` does not hold exactly `channels` scalars per point.
    pub fn from_vec(shape: GridShape, channels: usize, data: Vec<T>) -> Option<Self> {
        if channels == 0 || data.len() != shape.total() * channels {
            return None;
        }
        Some(Self {
            shape,
            channels,
            data,
        })
    }

    /// Shape of the control grid.
    #[inline]
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Scalars per control point.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// All scalars, point-major.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All scalars, point-major, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Channels of the control point at flat index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> &[T] {
        &self.data[i * self.channels..(i + 1) * self.channels]
    }

    /// Mutable channels of the control point at flat index `i`.
    #[inline]
    pub fn point_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.channels..(i + 1) * self.channels]
    }

    /// Scalars in one row along `axis` (`inner × channels`).
    #[inline]
    pub fn row_width(&self, axis: usize) -> usize {
        self.shape.inner(axis) * self.channels
    }
}
