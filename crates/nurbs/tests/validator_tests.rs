//! Tests for insertion-request validation.
//!
//! These tests verify that a refinement request is rejected before any work:
//! - Entry count must match the parameter dimensions
//! - Values must be finite, ascending and strictly inside the domain
//! - Multiplicities must respect the continuity policy
//!
//! ## Test Organization
//!
//! 1. **Request Shape** - Entry count
//! 2. **Values** - Finiteness, ordering, domain
//! 3. **Continuity** - Multiplicity bounds per policy
//! 4. **Error Reporting** - Classification, display, untouched source

use nurbs::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn surface() -> FunctionGroup<f64> {
    let basis = Basis::<f64>::clamped_uniform(&[4, 3], &[2, 1]).unwrap();
    let z = Function::scalar((0..12).map(|i| i as f64).collect());
    FunctionGroup::new(basis, vec![z]).unwrap()
}

fn curve(knots: Vec<f64>, degree: usize) -> FunctionGroup<f64> {
    let basis = Basis::non_rational(vec![knots], vec![degree]).unwrap();
    let n = basis.total_control_count();
    FunctionGroup::new(basis, vec![Function::scalar((0..n).map(|i| i as f64).collect())]).unwrap()
}

fn relaxed() -> KnotRefiner<f64> {
    KnotRefiner::new().continuity(Relaxed).build().unwrap()
}

// ============================================================================
// Request Shape Tests
// ============================================================================

/// Test that the request needs one entry per parameter dimension.
#[test]
fn test_entry_count_mismatch() {
    let group = surface();

    assert_eq!(
        group.refine(&[vec![0.5]]).unwrap_err(),
        NurbsError::InsertionDimensionMismatch {
            expected: 2,
            got: 1
        }
    );
    assert_eq!(
        group.refine(&[vec![0.5], vec![], vec![]]).unwrap_err(),
        NurbsError::InsertionDimensionMismatch {
            expected: 2,
            got: 3
        }
    );
}

// ============================================================================
// Value Tests
// ============================================================================

/// Test rejection of domain boundaries and outside values.
///
/// Verifies that the error carries the open interval.
#[test]
fn test_values_outside_domain() {
    let group = surface();

    for bad in [0.0, 1.0, -0.5, 1.5] {
        let err = group.refine(&[vec![], vec![bad]]).unwrap_err();
        assert_eq!(
            err,
            NurbsError::InsertionOutsideDomain {
                dimension: 1,
                index: 0,
                value: bad,
                lower: 0.0,
                upper: 1.0
            }
        );
    }

    assert!(matches!(
        group.refine(&[vec![0.2, 0.4, 1.0], vec![]]).unwrap_err(),
        NurbsError::InsertionOutsideDomain {
            dimension: 0,
            index: 2,
            ..
        }
    ));
}

/// Test the admissible interval of an unclamped knot vector.
///
/// Verifies that knots inside `(U[0], U[m])` but outside `(U[p], U[n+1])` are
/// rejected.
#[test]
fn test_unclamped_domain_bounds() {
    let group = curve((0..=6).map(f64::from).collect(), 2);

    assert_eq!(
        group.refine(&[vec![1.0]]).unwrap_err(),
        NurbsError::InsertionOutsideDomain {
            dimension: 0,
            index: 0,
            value: 1.0,
            lower: 2.0,
            upper: 4.0
        }
    );
    assert!(group.refine(&[vec![2.5]]).is_ok());
}

/// Test rejection of NaN and infinite values.
#[test]
fn test_non_finite_values() {
    let group = surface();

    assert_eq!(
        group.refine(&[vec![0.5, f64::NAN], vec![]]).unwrap_err(),
        NurbsError::NonFiniteInsertion {
            dimension: 0,
            index: 1
        }
    );
    assert_eq!(
        group.refine(&[vec![], vec![f64::INFINITY]]).unwrap_err(),
        NurbsError::NonFiniteInsertion {
            dimension: 1,
            index: 0
        }
    );
}

/// Test rejection of descending values.
///
/// Verifies the index of the first out-of-order value.
#[test]
fn test_unsorted_values() {
    let group = surface();

    assert_eq!(
        group.refine(&[vec![0.6, 0.3], vec![]]).unwrap_err(),
        NurbsError::UnsortedInsertion {
            dimension: 0,
            index: 1
        }
    );
    assert_eq!(
        group.refine(&[vec![0.1, 0.2, 0.2, 0.15], vec![]]).unwrap_err(),
        NurbsError::UnsortedInsertion {
            dimension: 0,
            index: 3
        }
    );
}

// ============================================================================
// Continuity Tests
// ============================================================================

/// Test the multiplicity bound of a linear curve.
///
/// Verifies that repeating an interior knot is rejected by default and
/// accepted by the relaxed policy.
#[test]
fn test_linear_existing_knot() {
    let group = curve(vec![0.0, 0.0, 0.5, 1.0, 1.0], 1);

    assert_eq!(
        group.refine(&[vec![0.5]]).unwrap_err(),
        NurbsError::MultiplicityExceeded {
            dimension: 0,
            value: 0.5,
            multiplicity: 2,
            max: 1
        }
    );
    assert!(relaxed().check(&group, &[vec![0.5]]).is_ok());

    assert_eq!(
        relaxed().check(&group, &[vec![0.5, 0.5]]).unwrap_err(),
        NurbsError::MultiplicityExceeded {
            dimension: 0,
            value: 0.5,
            multiplicity: 3,
            max: 2
        }
    );
}

/// Test the multiplicity bound of a quadratic curve.
///
/// Verifies that repeated inserted values count with existing knots.
#[test]
fn test_quadratic_repeated_insertion() {
    let group = curve(vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0], 2);
    let strict = KnotRefiner::new().build().unwrap();

    assert!(strict.check(&group, &[vec![0.5]]).is_ok());
    assert!(strict.check(&group, &[vec![0.25, 0.25]]).is_ok());
    assert!(matches!(
        strict.check(&group, &[vec![0.5, 0.5]]).unwrap_err(),
        NurbsError::MultiplicityExceeded {
            multiplicity: 3,
            max: 2,
            ..
        }
    ));

    assert!(relaxed().check(&group, &[vec![0.5, 0.5]]).is_ok());
    assert!(relaxed().check(&group, &[vec![0.5, 0.5, 0.5]]).is_err());
}

/// Test that degree 0 never accepts an existing knot.
#[test]
fn test_degree_zero_existing_knot() {
    let group = curve(vec![0.0, 1.0, 2.0], 0);

    assert!(group.refine(&[vec![1.0]]).is_err());
    assert_eq!(
        relaxed().check(&group, &[vec![1.0]]).unwrap_err(),
        NurbsError::MultiplicityExceeded {
            dimension: 0,
            value: 1.0,
            multiplicity: 2,
            max: 1
        }
    );
    assert!(group.refine(&[vec![0.5, 1.5]]).is_ok());
}

/// Test the policy bounds directly.
#[test]
fn test_policy_max_multiplicity() {
    assert_eq!(ContinuityPolicy::default(), Continuous);
    assert_eq!(Continuous.max_multiplicity(0), 1);
    assert_eq!(Continuous.max_multiplicity(3), 3);
    assert_eq!(Relaxed.max_multiplicity(0), 1);
    assert_eq!(Relaxed.max_multiplicity(3), 4);
}

// ============================================================================
// Error Reporting Tests
// ============================================================================

/// Test classification and display of rejections.
#[test]
fn test_rejection_reporting() {
    let err = surface().refine(&[vec![0.6, 0.3], vec![]]).unwrap_err();

    assert!(err.is_validation());
    assert!(!err.is_configuration());
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.to_string(),
        "Knots to insert in dimension 0 are not ascending at index 1"
    );

    let err = surface().refine(&[vec![], vec![2.0]]).unwrap_err();
    assert!(err.to_string().contains("outside the open interval (0, 1)"));
}

/// Test that a rejected request leaves the source group untouched.
#[test]
fn test_rejection_leaves_source() {
    let group = surface();
    let before = group.clone();

    assert!(group.refine(&[vec![0.5], vec![1.0]]).is_err());
    assert_eq!(group, before);
}
