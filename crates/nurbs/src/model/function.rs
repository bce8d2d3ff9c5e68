//! Coordinate functions over a shared basis.
//!
//! ## Purpose
//!
//! A [`Function`] holds `dimension` coordinates per control point. It carries
//! no reference to a basis; the owning group pairs it with one.
//!
//! ## Invariants
//!
//! * `dimension >= 1`.
//! * Coordinates are point-major: component `c` of control point `i` is at
//!   `i * dimension + c`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::NurbsError;

// ============================================================================
// Function
// ============================================================================

/// Control coordinates of one (possibly vector-valued) function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function<T> {
    dimension: usize,
    coordinates: Vec<T>,
}

impl<T: Copy> Function<T> {
    /// Create a function with `dimension` components per control point.
    ///
    /// The coordinate count is checked against a basis when the function
    /// joins a group.
    pub fn new(dimension: usize, coordinates: Vec<T>) -> Result<Self, NurbsError> {
        if dimension == 0 {
            return Err(NurbsError::ZeroFunctionDimension);
        }
        Ok(Self {
            dimension,
            coordinates,
        })
    }

    /// Create a scalar function, one value per control point.
    pub fn scalar(values: Vec<T>) -> Self {
        Self {
            dimension: 1,
            coordinates: values,
        }
    }

    /// Components per control point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All coordinates, point-major.
    #[inline]
    pub fn coordinates(&self) -> &[T] {
        &self.coordinates
    }

    /// Number of control points the coordinate array covers.
    #[inline]
    pub fn control_count(&self) -> usize {
        self.coordinates.len() / self.dimension
    }

    /// Components of the control point at flat index `i`.
    pub fn control_point(&self, i: usize) -> Option<&[T]> {
        let start = i.checked_mul(self.dimension)?;
        self.coordinates.get(start..start + self.dimension)
    }
}
