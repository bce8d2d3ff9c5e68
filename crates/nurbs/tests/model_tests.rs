//! Tests for the basis, function and group value types.
//!
//! These tests verify construction and read-only access:
//! - Shape checks performed by the constructors
//! - Convenience constructors (`non_rational`, `clamped_uniform`, `scalar`)
//! - Function handles and multi-index lookup
//!
//! ## Test Organization
//!
//! 1. **Basis** - Valid construction, accessors, rejected inputs
//! 2. **Function** - Dimensions and control points
//! 3. **Function Group** - Coordinate checks, handles, display

use approx::assert_relative_eq;

use nurbs::prelude::*;

// ============================================================================
// Basis Tests
// ============================================================================

/// Test construction of a rational surface basis.
///
/// Verifies control counts, domains and grid shape.
#[test]
fn test_basis_accessors() {
    let basis = Basis::new(
        vec![vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0], vec![0.0, 0.0, 2.0, 2.0]],
        vec![2, 1],
        vec![1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0],
    )
    .unwrap();

    assert_eq!(basis.parameter_dimensions(), 2);
    assert_eq!(basis.degrees(), &[2, 1]);
    assert_eq!(basis.control_counts(), &[4, 2]);
    assert_eq!(basis.total_control_count(), 8);
    assert_eq!(basis.domain(0), (0.0, 1.0));
    assert_eq!(basis.domain(1), (0.0, 2.0));
    assert_eq!(basis.knot_vector(1), &[0.0, 0.0, 2.0, 2.0]);
    assert_eq!(basis.shape().stride(1), 4);
    assert!(!basis.is_polynomial());
}

/// Test the non-rational constructor.
///
/// Verifies that every weight is one.
#[test]
fn test_basis_non_rational() {
    let basis = Basis::non_rational(vec![vec![0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0]], vec![2]).unwrap();

    assert_eq!(basis.weights(), &[1.0; 4]);
    assert!(basis.is_polynomial());
}

/// Test clamped uniform knot generation.
///
/// Verifies end multiplicities and interior spacing.
#[test]
fn test_basis_clamped_uniform() {
    let basis = Basis::<f64>::clamped_uniform(&[5, 2], &[2, 1]).unwrap();

    let u = basis.knot_vector(0);
    assert_eq!(u.len(), 8);
    assert_eq!(&u[..3], &[0.0; 3]);
    assert_eq!(&u[5..], &[1.0; 3]);
    assert_relative_eq!(u[3], 1.0 / 3.0, epsilon = 1e-15);
    assert_relative_eq!(u[4], 2.0 / 3.0, epsilon = 1e-15);

    assert_eq!(basis.knot_vector(1), &[0.0, 0.0, 1.0, 1.0]);
    assert_eq!(basis.total_control_count(), 10);
}

/// Test that a clamped uniform basis needs more control points than its degree.
///
/// Verifies that the degenerate request is rejected, not silently accepted.
#[test]
fn test_basis_clamped_uniform_too_few_points() {
    let err = Basis::<f64>::clamped_uniform(&[2], &[2]).unwrap_err();
    assert_eq!(err, NurbsError::EmptyDomain { dimension: 0 });
}

/// Test rejection of structurally invalid knot vectors.
///
/// Verifies each configuration error and its context.
#[test]
fn test_basis_rejects_bad_knots() {
    assert_eq!(
        Basis::<f64>::new(vec![], vec![], vec![]).unwrap_err(),
        NurbsError::EmptyBasis
    );

    assert_eq!(
        Basis::new(vec![vec![0.0, 0.0, 1.0, 1.0]], vec![1, 1], vec![1.0, 1.0]).unwrap_err(),
        NurbsError::DimensionCountMismatch {
            knot_vectors: 1,
            degrees: 2
        }
    );

    assert_eq!(
        Basis::new(vec![vec![0.0, 0.0, 1.0]], vec![2], vec![]).unwrap_err(),
        NurbsError::KnotVectorTooShort {
            dimension: 0,
            len: 3,
            degree: 2
        }
    );

    assert_eq!(
        Basis::new(vec![vec![0.0, f64::NAN, 1.0, 1.0]], vec![1], vec![1.0, 1.0]).unwrap_err(),
        NurbsError::NonFiniteKnot {
            dimension: 0,
            index: 1
        }
    );

    assert_eq!(
        Basis::new(vec![vec![0.0, 0.0, 1.0, 1.0], vec![0.0, 1.0, 0.5, 1.0]], vec![1, 1], vec![1.0; 4])
            .unwrap_err(),
        NurbsError::UnsortedKnotVector {
            dimension: 1,
            index: 2
        }
    );

    assert_eq!(
        Basis::new(vec![vec![0.0, 0.0, 0.0, 0.0]], vec![1], vec![1.0, 1.0]).unwrap_err(),
        NurbsError::EmptyDomain { dimension: 0 }
    );
}

/// Test rejection of knot values repeated past `degree + 1`.
///
/// Verifies that a zero-length end span is caught at construction.
#[test]
fn test_basis_rejects_excess_knot_multiplicity() {
    let err = Basis::<f64>::non_rational(vec![vec![0.0, 0.0, 1.0, 1.0, 1.0]], vec![1]).unwrap_err();
    assert_eq!(
        err,
        NurbsError::KnotMultiplicityExceeded {
            dimension: 0,
            index: 4,
            degree: 1
        }
    );
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "Knot vector 0 repeats a value more than 2 times at index 4"
    );

    assert_eq!(
        Basis::<f64>::non_rational(
            vec![
                vec![0.0, 0.0, 1.0, 1.0],
                vec![0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]
            ],
            vec![1, 2]
        )
        .unwrap_err(),
        NurbsError::KnotMultiplicityExceeded {
            dimension: 1,
            index: 6,
            degree: 2
        }
    );

    // A full-multiplicity interior knot is still valid
    assert!(Basis::<f64>::non_rational(vec![vec![0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]], vec![2]).is_ok());
}

/// Test rejection of bad weights.
///
/// Verifies count, zero and non-finite checks.
#[test]
fn test_basis_rejects_bad_weights() {
    let knots = || vec![vec![0.0, 0.0, 1.0, 1.0]];

    assert_eq!(
        Basis::new(knots(), vec![1], vec![1.0]).unwrap_err(),
        NurbsError::WeightCountMismatch {
            expected: 2,
            got: 1
        }
    );

    let err = Basis::new(knots(), vec![1], vec![1.0, 0.0]).unwrap_err();
    assert_eq!(err, NurbsError::InvalidWeight { index: 1, value: 0.0 });
    assert!(err.is_configuration());

    assert!(matches!(
        Basis::new(knots(), vec![1], vec![f64::INFINITY, 1.0]).unwrap_err(),
        NurbsError::InvalidWeight { index: 0, .. }
    ));
}

// ============================================================================
// Function Tests
// ============================================================================

/// Test vector-valued function access.
///
/// Verifies point-major control point slices.
#[test]
fn test_function_control_points() {
    let f = Function::new(3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

    assert_eq!(f.dimension(), 3);
    assert_eq!(f.control_count(), 2);
    assert_eq!(f.control_point(1), Some(&[3.0, 4.0, 5.0][..]));
    assert_eq!(f.control_point(2), None);
}

/// Test scalar functions and the zero-dimension check.
#[test]
fn test_function_scalar_and_zero_dimension() {
    let f = Function::scalar(vec![7.0, 8.0]);
    assert_eq!(f.dimension(), 1);
    assert_eq!(f.control_point(0), Some(&[7.0][..]));

    assert_eq!(
        Function::<f64>::new(0, vec![]).unwrap_err(),
        NurbsError::ZeroFunctionDimension
    );
}

// ============================================================================
// Function Group Tests
// ============================================================================

fn patch() -> FunctionGroup<f64> {
    let basis = Basis::<f64>::clamped_uniform(&[3, 2], &[1, 1]).unwrap();
    let xyz: Vec<f64> = (0..6).flat_map(|i| [i as f64, 10.0 * i as f64, -(i as f64)]).collect();
    let s = Function::scalar(vec![0.5; 6]);
    FunctionGroup::new(basis, vec![Function::new(3, xyz).unwrap(), s]).unwrap()
}

/// Test group accessors and function handles.
///
/// Verifies multi-index lookup through a handle.
#[test]
fn test_group_handles() {
    let group = patch();

    assert_eq!(group.len(), 2);
    assert_eq!(group.output_dimension(), 4);
    assert_eq!(group.channel_count(), 5);
    assert!(group.function(2).is_none());

    let xyz = group.function(0).unwrap();
    assert_eq!(xyz.index(), 0);
    assert_eq!(xyz.dimension(), 3);
    // (i0, i1) = (1, 1) is flat index 1 + 1 * 3 = 4
    assert_eq!(xyz.control_point(&[1, 1]), Some(&[4.0, 40.0, -4.0][..]));
    assert_eq!(xyz.control_point(&[3, 0]), None);
    assert_eq!(xyz.control_point(&[0]), None);

    let dims: Vec<usize> = group.iter().map(|f| f.dimension()).collect();
    assert_eq!(dims, vec![3, 1]);
}

/// Test coordinate count and finiteness checks.
///
/// Verifies that the failing function is identified by position.
#[test]
fn test_group_rejects_bad_coordinates() {
    let basis = || Basis::<f64>::clamped_uniform(&[3], &[2]).unwrap();

    assert_eq!(
        FunctionGroup::new(
            basis(),
            vec![Function::scalar(vec![0.0; 3]), Function::new(2, vec![0.0; 5]).unwrap()]
        )
        .unwrap_err(),
        NurbsError::CoordinateCountMismatch {
            function: 1,
            expected: 6,
            got: 5
        }
    );

    assert_eq!(
        FunctionGroup::new(basis(), vec![Function::scalar(vec![0.0, f64::NAN, 0.0])]).unwrap_err(),
        NurbsError::NonFiniteCoordinate {
            function: 0,
            index: 1
        }
    );
}

/// Test that a group may hold only a basis.
#[test]
fn test_group_without_functions() {
    let group = FunctionGroup::new(Basis::<f64>::clamped_uniform(&[2], &[1]).unwrap(), vec![]).unwrap();

    assert!(group.is_empty());
    assert_eq!(group.channel_count(), 1);
    assert_eq!(group.evaluate(&[0.5]).unwrap(), Vec::<f64>::new());
}

/// Test the summary display.
#[test]
fn test_group_display() {
    let text = format!("{}", patch());

    assert!(text.contains("Parameter dimensions: 2"));
    assert!(text.contains("Control counts:       [3, 2]"));
    assert!(text.contains("[0] dimension 3, 18 coordinates"));
    assert!(text.contains("Rational:             false"));
}
