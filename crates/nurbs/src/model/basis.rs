//! Tensor-product rational basis.
//!
//! ## Purpose
//!
//! A [`Basis`] owns, per parameter dimension, a knot vector and a degree, and
//! one rational weight per control point of the tensor-product grid. It is
//! shared by every function of a [`FunctionGroup`](crate::model::group::FunctionGroup).
//!
//! ## Invariants
//!
//! * At least one parameter dimension; knot vectors and degrees agree in count.
//! * Every knot vector is finite, non-decreasing, has `count + degree + 1`
//!   entries with `count >= 1`, and a domain `[U[p], U[n+1]]` of positive length.
//! * `weights.len()` is the product of the control counts; weights are finite
//!   and non-zero.
//!
//! ## Non-goals
//!
//! * Mutation after construction. Refinement always builds a new basis.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::knots::domain;
use crate::primitives::errors::NurbsError;
use crate::primitives::shape::GridShape;

// ============================================================================
// Basis
// ============================================================================

/// Knot vectors, degrees and weights of a tensor-product NURBS.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis<T> {
    knots: Vec<Vec<T>>,
    degrees: Vec<usize>,
    weights: Vec<T>,
    shape: GridShape,
}

impl<T: Float> Basis<T> {
    /// Create a basis, checking every shape invariant.
    ///
    /// Weights are indexed in grid order, first dimension fastest.
    pub fn new(knots: Vec<Vec<T>>, degrees: Vec<usize>, weights: Vec<T>) -> Result<Self, NurbsError> {
        if knots.is_empty() {
            return Err(NurbsError::EmptyBasis);
        }
        if knots.len() != degrees.len() {
            return Err(NurbsError::DimensionCountMismatch {
                knot_vectors: knots.len(),
                degrees: degrees.len(),
            });
        }

        let mut counts = Vec::with_capacity(knots.len());
        for (dimension, (vector, &degree)) in knots.iter().zip(&degrees).enumerate() {
            check_knot_vector(dimension, vector, degree)?;
            counts.push(vector.len() - degree - 1);
        }

        let shape = GridShape::new(counts);
        if weights.len() != shape.total() {
            return Err(NurbsError::WeightCountMismatch {
                expected: shape.total(),
                got: weights.len(),
            });
        }
        if let Some((index, &w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || w.is_zero())
        {
            return Err(NurbsError::InvalidWeight {
                index,
                value: w.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            knots,
            degrees,
            weights,
            shape,
        })
    }

    /// Create a polynomial (non-rational) basis with every weight equal to one.
    pub fn non_rational(knots: Vec<Vec<T>>, degrees: Vec<usize>) -> Result<Self, NurbsError> {
        let total = knots
            .iter()
            .zip(&degrees)
            .map(|(k, &p)| k.len().saturating_sub(p + 1))
            .product();
        Self::new(knots, degrees, vec![T::one(); total])
    }

    /// Create a basis with clamped, uniformly spaced knots on `[0, 1]` and unit weights.
    ///
    /// Each dimension needs `counts[d] > degrees[d]`.
    pub fn clamped_uniform(counts: &[usize], degrees: &[usize]) -> Result<Self, NurbsError> {
        let knots = counts
            .iter()
            .zip(degrees)
            .map(|(&n, &p)| clamped_uniform_knots(n, p))
            .collect();
        Self::non_rational(knots, degrees.to_vec())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of parameter dimensions.
    #[inline]
    pub fn parameter_dimensions(&self) -> usize {
        self.degrees.len()
    }

    /// Degree of dimension `d`.
    #[inline]
    pub fn degree(&self, d: usize) -> usize {
        self.degrees[d]
    }

    /// Degrees of every dimension.
    #[inline]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Knot vector of dimension `d`.
    #[inline]
    pub fn knot_vector(&self, d: usize) -> &[T] {
        &self.knots[d]
    }

    /// Knot vectors of every dimension.
    #[inline]
    pub fn knot_vectors(&self) -> &[Vec<T>] {
        &self.knots
    }

    /// Rational weights in grid order.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Control count along dimension `d`.
    #[inline]
    pub fn control_count(&self, d: usize) -> usize {
        self.shape.count(d)
    }

    /// Control counts of every dimension.
    #[inline]
    pub fn control_counts(&self) -> &[usize] {
        self.shape.counts()
    }

    /// Total number of control points.
    #[inline]
    pub fn total_control_count(&self) -> usize {
        self.shape.total()
    }

    /// Shape of the control grid.
    #[inline]
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Parametric domain `[U[p], U[n+1]]` of dimension `d`.
    #[inline]
    pub fn domain(&self, d: usize) -> (T, T) {
        domain(&self.knots[d], self.degrees[d])
    }

    /// Returns `true` if every weight equals the first one.
    pub fn is_polynomial(&self) -> bool {
        let w0 = self.weights[0];
        self.weights.iter().all(|&w| w == w0)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn check_knot_vector<T: Float>(dimension: usize, knots: &[T], degree: usize) -> Result<(), NurbsError> {
    if knots.len() < degree + 2 {
        return Err(NurbsError::KnotVectorTooShort {
            dimension,
            len: knots.len(),
            degree,
        });
    }
    if let Some(index) = knots.iter().position(|k| !k.is_finite()) {
        return Err(NurbsError::NonFiniteKnot { dimension, index });
    }
    if let Some(index) = (1..knots.len()).find(|&i| knots[i] < knots[i - 1]) {
        return Err(NurbsError::UnsortedKnotVector { dimension, index });
    }
    let (lower, upper) = domain(knots, degree);
    if lower >= upper {
        return Err(NurbsError::EmptyDomain { dimension });
    }
    if let Some(index) = (degree + 1..knots.len()).find(|&i| knots[i] == knots[i - degree - 1]) {
        return Err(NurbsError::KnotMultiplicityExceeded {
            dimension,
            index,
            degree,
        });
    }
    Ok(())
}

/// Clamped uniform knot vector with `count` control points on `[0, 1]`.
///
/// Returns a vector that fails basis validation when `count <= degree`.
fn clamped_uniform_knots<T: Float>(count: usize, degree: usize) -> Vec<T> {
    if count <= degree {
        return vec![T::zero(); count + degree + 1];
    }
    let spans = count - degree;
    let mut knots = Vec::with_capacity(count + degree + 1);
    knots.extend(core::iter::repeat(T::zero()).take(degree + 1));
    for i in 1..spans {
        knots.push(T::from(i).unwrap_or_else(T::zero) / T::from(spans).unwrap_or_else(T::one));
    }
    knots.extend(core::iter::repeat(T::one()).take(degree + 1));
    knots
}
