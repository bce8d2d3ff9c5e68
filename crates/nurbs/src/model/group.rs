//! Function groups: one basis, many functions.
//!
//! ## Purpose
//!
//! A [`FunctionGroup`] owns a [`Basis`] and an ordered list of [`Function`]s
//! that together define one geometric map, e.g. the x, y and z channels of a
//! surface sharing one rational parametrization.
//!
//! ## Design notes
//!
//! * **Ownership**: Functions never point at a basis. Callers reach a function
//!   through a [`FunctionRef`], a borrowed handle holding the group and the
//!   function's index, so a refined group can never alias its source.
//! * **Immutability**: There are no mutating methods. Refinement returns a new
//!   group.
//!
//! ## Invariants
//!
//! * Every function's coordinate count equals
//!   `basis.total_control_count() * function.dimension()`.
//! * Every coordinate is finite.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::model::basis::Basis;
use crate::model::function::Function;
use crate::primitives::errors::NurbsError;

// ============================================================================
// Function Group
// ============================================================================

/// A basis together with the functions defined over it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionGroup<T> {
    basis: Basis<T>,
    functions: Vec<Function<T>>,
}

impl<T: Float> FunctionGroup<T> {
    /// Assemble a group, checking every function against the basis.
    pub fn new(basis: Basis<T>, functions: Vec<Function<T>>) -> Result<Self, NurbsError> {
        let total = basis.total_control_count();
        for (index, function) in functions.iter().enumerate() {
            let expected = total * function.dimension();
            let got = function.coordinates().len();
            if got != expected {
                return Err(NurbsError::CoordinateCountMismatch {
                    function: index,
                    expected,
                    got,
                });
            }
            if let Some(i) = function.coordinates().iter().position(|c| !c.is_finite()) {
                return Err(NurbsError::NonFiniteCoordinate {
                    function: index,
                    index: i,
                });
            }
        }
        Ok(Self { basis, functions })
    }

    /// The shared basis.
    #[inline]
    pub fn basis(&self) -> &Basis<T> {
        &self.basis
    }

    /// All functions in order.
    #[inline]
    pub fn functions(&self) -> &[Function<T>] {
        &self.functions
    }

    /// Number of functions.
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if the group holds no functions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Handle to function `index`.
    pub fn function(&self, index: usize) -> Option<FunctionRef<'_, T>> {
        (index < self.functions.len()).then_some(FunctionRef { group: self, index })
    }

    /// Handles to every function, in order.
    pub fn iter(&self) -> impl Iterator<Item = FunctionRef<'_, T>> + '_ {
        (0..self.functions.len()).map(move |index| FunctionRef { group: self, index })
    }

    /// Sum of function dimensions, i.e. components per evaluated point.
    pub fn output_dimension(&self) -> usize {
        self.functions.iter().map(Function::dimension).sum()
    }

    /// Homogeneous channels per control point: the weight plus every component.
    #[inline]
    pub fn channel_count(&self) -> usize {
        1 + self.output_dimension()
    }
}

// ============================================================================
// Function Handle
// ============================================================================

/// Read-only handle to one function of a group.
#[derive(Debug, Clone, Copy)]
pub struct FunctionRef<'a, T> {
    group: &'a FunctionGroup<T>,
    index: usize,
}

impl<'a, T: Float> FunctionRef<'a, T> {
    /// Position of the function in its group.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The owning group.
    #[inline]
    pub fn group(&self) -> &'a FunctionGroup<T> {
        self.group
    }

    /// The basis the function is defined over.
    #[inline]
    pub fn basis(&self) -> &'a Basis<T> {
        &self.group.basis
    }

    /// The function's data.
    #[inline]
    pub fn function(&self) -> &'a Function<T> {
        &self.group.functions[self.index]
    }

    /// Components per control point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.function().dimension()
    }

    /// Components of the control point at a grid multi-index.
    pub fn control_point(&self, index: &[usize]) -> Option<&'a [T]> {
        let flat = self.basis().shape().flatten(index)?;
        self.function().control_point(flat)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for FunctionGroup<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let basis = &self.basis;
        writeln!(f, "Summary:")?;
        writeln!(f, "  Parameter dimensions: {}", basis.parameter_dimensions())?;
        writeln!(f, "  Degrees:              {:?}", basis.degrees())?;
        writeln!(f, "  Control counts:       {:?}", basis.control_counts())?;
        writeln!(f, "  Rational:             {}", !basis.is_polynomial())?;
        writeln!(f)?;

        writeln!(f, "Knot Vectors:")?;
        for (d, knots) in basis.knot_vectors().iter().enumerate() {
            write!(f, "  [{d}]")?;
            for k in knots {
                write!(f, " {k:.4}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Functions:")?;
        if self.functions.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (i, function) in self.functions.iter().enumerate() {
            writeln!(
                f,
                "  [{i}] dimension {}, {} coordinates",
                function.dimension(),
                function.coordinates().len()
            )?;
        }
        Ok(())
    }
}
