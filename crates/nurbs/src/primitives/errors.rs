//! Error types for NURBS construction, validation and refinement.
//!
//! ## Purpose
//!
//! This module defines every error condition the crate can report: shape
//! inconsistencies detected while assembling a basis or function group,
//! inadmissible knot-insertion requests, and out-of-domain evaluation
//! parameters.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending dimension, index and value.
//! * **Classified**: [`NurbsError::kind`] groups variants into configuration,
//!   validation and evaluation failures.
//! * **No-std**: Numeric payloads are stored as `f64` so the enum stays
//!   independent of the scalar type and needs no allocation.
//!
//! ## Invariants
//!
//! * Every variant names enough context to locate the failing input.
//! * Refinement never returns an error after it has started writing output.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Coarse classification of a [`NurbsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Inconsistent shape metadata while constructing a basis, function or group.
    Configuration,

    /// A knot-insertion request that must not be applied.
    Validation,

    /// An evaluation parameter that the basis cannot be evaluated at.
    Evaluation,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for NURBS operations.
#[derive(Debug, Clone, PartialEq)]
pub enum NurbsError {
    /// A basis needs at least one parameter dimension.
    EmptyBasis,

    /// The number of knot vectors and the number of degrees differ.
    DimensionCountMismatch {
        /// Number of knot vectors supplied.
        knot_vectors: usize,
        /// Number of degrees supplied.
        degrees: usize,
    },

    /// A knot vector is too short for its degree (at least `degree + 2` knots).
    KnotVectorTooShort {
        /// Parameter dimension of the knot vector.
        dimension: usize,
        /// Number of knots supplied.
        len: usize,
        /// Degree of the dimension.
        degree: usize,
    },

    /// A knot vector decreases at `index`.
    UnsortedKnotVector {
        /// Parameter dimension of the knot vector.
        dimension: usize,
        /// Index of the first knot smaller than its predecessor.
        index: usize,
    },

    /// The parametric domain `[U[p], U[n+1]]` of a dimension has zero length.
    EmptyDomain {
        /// Parameter dimension of the knot vector.
        dimension: usize,
    },

    /// A knot value repeats more than `degree + 1` times.
    KnotMultiplicityExceeded {
        /// Parameter dimension of the knot vector.
        dimension: usize,
        /// Index of the first knot past the allowed run.
        index: usize,
        /// Degree of the dimension.
        degree: usize,
    },

    /// A knot is NaN or infinite.
    NonFiniteKnot {
        /// Parameter dimension of the knot vector.
        dimension: usize,
        /// Index of the offending knot.
        index: usize,
    },

    /// The weight array does not cover the control grid.
    WeightCountMismatch {
        /// Product of the per-dimension control counts.
        expected: usize,
        /// Number of weights supplied.
        got: usize,
    },

    /// A weight is zero or non-finite.
    InvalidWeight {
        /// Flat control-point index of the weight.
        index: usize,
        /// The weight value.
        value: f64,
    },

    /// A function needs at least one component per control point.
    ZeroFunctionDimension,

    /// A function's coordinate array does not match the control grid.
    CoordinateCountMismatch {
        /// Position of the function in its group.
        function: usize,
        /// `total control count × function dimension`.
        expected: usize,
        /// Number of coordinates supplied.
        got: usize,
    },

    /// A control coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// Position of the function in its group.
        function: usize,
        /// Index into the function's coordinate array.
        index: usize,
    },

    /// Two groups cannot be compared because their layouts differ.
    IncompatibleGroups(&'static str),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// The insertion request does not have one entry per parameter dimension.
    InsertionDimensionMismatch {
        /// Parameter dimensions of the basis.
        expected: usize,
        /// Entries in the insertion request.
        got: usize,
    },

    /// An inserted knot is NaN or infinite.
    NonFiniteInsertion {
        /// Parameter dimension of the entry.
        dimension: usize,
        /// Index inside the entry.
        index: usize,
    },

    /// The knots to insert into one dimension are not in ascending order.
    UnsortedInsertion {
        /// Parameter dimension of the entry.
        dimension: usize,
        /// Index of the first value smaller than its predecessor.
        index: usize,
    },

    /// An inserted knot is not strictly inside the dimension's parametric domain.
    InsertionOutsideDomain {
        /// Parameter dimension of the entry.
        dimension: usize,
        /// Index inside the entry.
        index: usize,
        /// The inserted value.
        value: f64,
        /// Lower bound of the admissible interval.
        lower: f64,
        /// Upper bound of the admissible interval.
        upper: f64,
    },

    /// Inserting a knot would raise its multiplicity past the continuity bound.
    MultiplicityExceeded {
        /// Parameter dimension of the knot.
        dimension: usize,
        /// The knot value.
        value: f64,
        /// Multiplicity after insertion.
        multiplicity: usize,
        /// Largest multiplicity the active policy allows.
        max: usize,
    },

    /// The evaluation parameter does not have one value per parameter dimension.
    ParameterDimensionMismatch {
        /// Parameter dimensions of the basis.
        expected: usize,
        /// Values supplied.
        got: usize,
    },

    /// An evaluation parameter lies outside the dimension's parametric domain.
    ParameterOutsideDomain {
        /// Parameter dimension.
        dimension: usize,
        /// The parameter value.
        value: f64,
        /// Domain start `U[p]`.
        lower: f64,
        /// Domain end `U[n+1]`.
        upper: f64,
    },
}

impl NurbsError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsertionDimensionMismatch { .. }
            | Self::NonFiniteInsertion { .. }
            | Self::UnsortedInsertion { .. }
            | Self::InsertionOutsideDomain { .. }
            | Self::MultiplicityExceeded { .. } => ErrorKind::Validation,
            Self::ParameterDimensionMismatch { .. } | Self::ParameterOutsideDomain { .. } => {
                ErrorKind::Evaluation
            }
            _ => ErrorKind::Configuration,
        }
    }

    /// Returns `true` for errors raised while assembling a basis or group.
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Returns `true` for rejected insertion requests.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for NurbsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyBasis => write!(f, "Basis has no parameter dimensions"),
            Self::DimensionCountMismatch {
                knot_vectors,
                degrees,
            } => write!(
                f,
                "Dimension mismatch: {knot_vectors} knot vectors but {degrees} degrees"
            ),
            Self::KnotVectorTooShort {
                dimension,
                len,
                degree,
            } => write!(
                f,
                "Knot vector {dimension} has {len} knots, degree {degree} needs at least {}",
                degree + 2
            ),
            Self::UnsortedKnotVector { dimension, index } => {
                write!(f, "Knot vector {dimension} decreases at index {index}")
            }
            Self::EmptyDomain { dimension } => {
                write!(f, "Knot vector {dimension} has an empty parametric domain")
            }
            Self::KnotMultiplicityExceeded {
                dimension,
                index,
                degree,
            } => write!(
                f,
                "Knot vector {dimension} repeats a value more than {} times at index {index}",
                degree + 1
            ),
            Self::NonFiniteKnot { dimension, index } => {
                write!(f, "Knot vector {dimension} has a non-finite knot at index {index}")
            }
            Self::WeightCountMismatch { expected, got } => {
                write!(f, "Weight count mismatch: expected {expected}, got {got}")
            }
            Self::InvalidWeight { index, value } => {
                write!(f, "Invalid weight at control point {index}: {value} (must be finite and non-zero)")
            }
            Self::ZeroFunctionDimension => write!(f, "Function dimension must be at least 1"),
            Self::CoordinateCountMismatch {
                function,
                expected,
                got,
            } => write!(
                f,
                "Function {function} has {got} coordinates, expected {expected}"
            ),
            Self::NonFiniteCoordinate { function, index } => {
                write!(f, "Function {function} has a non-finite coordinate at index {index}")
            }
            Self::IncompatibleGroups(reason) => write!(f, "Incompatible groups: {reason}"),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
            Self::InsertionDimensionMismatch { expected, got } => write!(
                f,
                "Insertion request has {got} entries, basis has {expected} parameter dimensions"
            ),
            Self::NonFiniteInsertion { dimension, index } => write!(
                f,
                "Non-finite knot to insert in dimension {dimension} at index {index}"
            ),
            Self::UnsortedInsertion { dimension, index } => write!(
                f,
                "Knots to insert in dimension {dimension} are not ascending at index {index}"
            ),
            Self::InsertionOutsideDomain {
                dimension,
                index,
                value,
                lower,
                upper,
            } => write!(
                f,
                "Knot {value} (dimension {dimension}, index {index}) is outside the open interval ({lower}, {upper})"
            ),
            Self::MultiplicityExceeded {
                dimension,
                value,
                multiplicity,
                max,
            } => write!(
                f,
                "Knot {value} in dimension {dimension} would reach multiplicity {multiplicity} (at most {max} allowed)"
            ),
            Self::ParameterDimensionMismatch { expected, got } => write!(
                f,
                "Parameter has {got} values, basis has {expected} parameter dimensions"
            ),
            Self::ParameterOutsideDomain {
                dimension,
                value,
                lower,
                upper,
            } => write!(
                f,
                "Parameter {value} in dimension {dimension} is outside the domain [{lower}, {upper}]"
            ),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for NurbsError {}
