//! Admissibility checks for knot insertion and evaluation.
//!
//! ## Purpose
//!
//! This module decides whether an insertion request may be applied to a
//! basis, and whether a parameter vector may be evaluated. Refinement runs
//! every check before it allocates any output.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Traceable**: Rejections are logged at `trace` level.
//!
//! ## Key concepts
//!
//! * **Admissible interval**: An inserted knot must lie strictly inside the
//!   parametric domain `(U[p], U[n+1])`, which is never wider than the open
//!   knot range `(U[0], U[m])`.
//! * **Continuity bound**: At a knot of multiplicity `s` a degree-`p` spline
//!   is `C^(p-s)`. [`ContinuityPolicy`] caps `s` after insertion.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * An accepted request never yields a zero denominator in the insertion
//!   sweep.
//!
//! ## Non-goals
//!
//! * This module does not sort or clamp insertion values.

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::math::knots::multiplicity;
use crate::model::basis::Basis;
use crate::primitives::errors::NurbsError;

// ============================================================================
// Continuity Policy
// ============================================================================

/// Upper bound on knot multiplicity after insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinuityPolicy {
    /// At most `max(p, 1)` equal knots: the result stays at least `C^0`.
    #[default]
    Continuous,

    /// At most `p + 1` equal knots: the result may split at a knot.
    Relaxed,
}

impl ContinuityPolicy {
    /// Largest multiplicity allowed for degree `p`.
    #[inline]
    pub fn max_multiplicity(self, degree: usize) -> usize {
        match self {
            Self::Continuous => degree.max(1),
            Self::Relaxed => degree + 1,
        }
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for insertion requests and evaluation parameters.
///
/// All methods return `Result<(), NurbsError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Insertion Requests
    // ========================================================================

    /// Check shape, ordering and domain of an insertion request.
    pub fn check_insertion_request<T, I>(basis: &Basis<T>, insertions: &[I]) -> Result<(), NurbsError>
    where
        T: Float,
        I: AsRef<[T]>,
    {
        // Check 1: One entry per parameter dimension
        let dims = basis.parameter_dimensions();
        if insertions.len() != dims {
            return reject(NurbsError::InsertionDimensionMismatch {
                expected: dims,
                got: insertions.len(),
            });
        }

        for (dimension, entry) in insertions.iter().enumerate() {
            let values = entry.as_ref();

            // Check 2: Finite values
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return reject(NurbsError::NonFiniteInsertion { dimension, index });
            }

            // Check 3: Ascending order
            if let Some(index) = (1..values.len()).find(|&i| values[i] < values[i - 1]) {
                return reject(NurbsError::UnsortedInsertion { dimension, index });
            }

            // Check 4: Strictly inside the domain
            let (lower, upper) = basis.domain(dimension);
            if let Some(index) = values.iter().position(|&v| v <= lower || v >= upper) {
                return reject(NurbsError::InsertionOutsideDomain {
                    dimension,
                    index,
                    value: values[index].to_f64().unwrap_or(f64::NAN),
                    lower: lower.to_f64().unwrap_or(f64::NAN),
                    upper: upper.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    /// Check that no inserted value exceeds the policy's multiplicity bound.
    ///
    /// Expects a request already accepted by [`Self::check_insertion_request`].
    pub fn check_continuity<T, I>(
        basis: &Basis<T>,
        insertions: &[I],
        policy: ContinuityPolicy,
    ) -> Result<(), NurbsError>
    where
        T: Float,
        I: AsRef<[T]>,
    {
        for (dimension, entry) in insertions.iter().enumerate() {
            let values = entry.as_ref();
            let knots = basis.knot_vector(dimension);
            let max = policy.max_multiplicity(basis.degree(dimension));

            let mut start = 0;
            while start < values.len() {
                let value = values[start];
                let run = values[start..].iter().take_while(|&&v| v == value).count();
                let total = multiplicity(knots, value) + run;
                if total > max {
                    return reject(NurbsError::MultiplicityExceeded {
                        dimension,
                        value: value.to_f64().unwrap_or(f64::NAN),
                        multiplicity: total,
                        max,
                    });
                }
                start += run;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Evaluation Parameters
    // ========================================================================

    /// Check that `u` has one finite value per dimension inside the domain.
    pub fn check_parameter<T: Float>(basis: &Basis<T>, u: &[T]) -> Result<(), NurbsError> {
        // Check 1: One value per parameter dimension
        let dims = basis.parameter_dimensions();
        if u.len() != dims {
            return reject(NurbsError::ParameterDimensionMismatch {
                expected: dims,
                got: u.len(),
            });
        }

        // Check 2: Finite and inside the closed domain
        for (dimension, &value) in u.iter().enumerate() {
            let (lower, upper) = basis.domain(dimension);
            if !value.is_finite() || value < lower || value > upper {
                return reject(NurbsError::ParameterOutsideDomain {
                    dimension,
                    value: value.to_f64().unwrap_or(f64::NAN),
                    lower: lower.to_f64().unwrap_or(f64::NAN),
                    upper: upper.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), NurbsError> {
        if let Some(param) = duplicate_param {
            return Err(NurbsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

fn reject(error: NurbsError) -> Result<(), NurbsError> {
    trace!("rejected: {error}");
    Err(error)
}
