#![cfg(feature = "dev")]
//! Tests for input and parameter validation.

use waveshrink::internals::engine::validator::Validator;
use waveshrink::internals::primitives::dyadic::check_transform_len;
use waveshrink::internals::primitives::errors::ShrinkageError;

// ============================================================================
// Sequence Validation Tests
// ============================================================================

/// Test that valid sequences pass.
#[test]
fn test_valid_sequences() {
    for n in [4usize, 8, 16, 1024] {
        assert!(Validator::validate_sequence(&vec![0.5f64; n]).is_ok());
    }
}

/// Test empty input.
#[test]
fn test_empty_sequence() {
    assert_eq!(
        Validator::validate_sequence::<f64>(&[]),
        Err(ShrinkageError::EmptyInput)
    );
}

/// Test non-dyadic lengths.
#[test]
fn test_non_dyadic_lengths() {
    for n in [3usize, 5, 6, 7, 9, 1000] {
        let err = Validator::validate_sequence(&vec![1.0f64; n]).unwrap_err();
        assert_eq!(err, ShrinkageError::NotPowerOfTwo { len: n });
        assert!(err.is_invalid_input());
    }
}

/// Test dyadic lengths below the minimum.
#[test]
fn test_too_short() {
    for n in [1usize, 2] {
        let err = Validator::validate_sequence(&vec![1.0f64; n]).unwrap_err();
        assert_eq!(err, ShrinkageError::TooFewPoints { got: n, min: 4 });
        assert!(err.is_invalid_input());
    }
}

/// Test that non-finite samples are rejected.
#[test]
fn test_non_finite() {
    let cases = [
        vec![1.0f64, f64::NAN, 3.0, 4.0],
        vec![1.0f64, 2.0, f64::INFINITY, 4.0],
        vec![f64::NEG_INFINITY, 2.0, 3.0, 4.0],
    ];
    for data in cases {
        let err = Validator::validate_sequence(&data).unwrap_err();
        assert!(matches!(err, ShrinkageError::InvalidNumericValue(_)));
        assert!(err.is_invalid_input());
    }
}

/// Test transform length checks.
#[test]
fn test_transform_len() {
    assert!(Validator::validate_transform_len(8, 8).is_ok());
    assert_eq!(
        Validator::validate_transform_len(4, 8),
        Err(ShrinkageError::TooFewPoints { got: 4, min: 8 })
    );
    assert_eq!(
        Validator::validate_transform_len(24, 2),
        Err(ShrinkageError::NotPowerOfTwo { len: 24 })
    );
    assert_eq!(
        Validator::validate_transform_len(0, 2),
        Err(ShrinkageError::EmptyInput)
    );

    for (n, min) in [(8, 8), (4, 8), (24, 2), (0, 2), (2, 2)] {
        assert_eq!(
            Validator::validate_transform_len(n, min),
            check_transform_len(n, min)
        );
    }
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test tolerance validation.
#[test]
fn test_tolerance() {
    assert!(Validator::validate_tolerance(1e-9f64).is_ok());
    assert_eq!(
        Validator::validate_tolerance(0.0f64),
        Err(ShrinkageError::InvalidTolerance(0.0))
    );
    assert_eq!(
        Validator::validate_tolerance(-1.0f64),
        Err(ShrinkageError::InvalidTolerance(-1.0))
    );
    assert!(matches!(
        Validator::validate_tolerance(f64::NAN),
        Err(ShrinkageError::InvalidTolerance(_))
    ));
}

/// Test duplicate parameter detection.
#[test]
fn test_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("policy")),
        Err(ShrinkageError::DuplicateParameter {
            parameter: "policy"
        })
    );
}

/// Test that configuration errors are not input errors.
#[test]
fn test_error_categories() {
    assert!(!ShrinkageError::InvalidTolerance(0.0).is_invalid_input());
    assert!(!ShrinkageError::InvalidFilter("x".into()).is_invalid_input());
    assert!(
        !ShrinkageError::TransformContractViolation {
            index: 0,
            error: 1.0
        }
        .is_invalid_input()
    );
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(
        ShrinkageError::NotPowerOfTwo { len: 6 }.to_string(),
        "Invalid length: 6 (must be a power of 2)"
    );
    assert_eq!(
        ShrinkageError::TooFewPoints { got: 2, min: 4 }.to_string(),
        "Too few points: got 2, need at least 4"
    );
}
