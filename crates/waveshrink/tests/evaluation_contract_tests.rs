#![cfg(feature = "dev")]
//! Tests for transform round-trip verification.

use approx::assert_abs_diff_eq;

use waveshrink::internals::algorithms::families::WaveletFamily;
use waveshrink::internals::algorithms::transform::{Haar, Wavelet, WaveletTransform};
use waveshrink::internals::evaluation::contract::{check_tolerance, verify_round_trip};
use waveshrink::internals::primitives::errors::ShrinkageError;

/// Transform that rotates the buffer left on both passes.
struct RotateTwice;

impl WaveletTransform<f64> for RotateTwice {
    fn forward(&self, data: &mut [f64]) -> Result<(), ShrinkageError> {
        data.rotate_left(1);
        Ok(())
    }

    fn inverse(&self, data: &mut [f64]) -> Result<(), ShrinkageError> {
        data.rotate_left(1);
        Ok(())
    }
}

/// Test that correct transforms pass with a tiny reconstruction error.
#[test]
fn test_valid_transforms_pass() {
    let x: Vec<f64> = (0..32).map(|i| (i as f64).sqrt() - 2.0).collect();

    let err = verify_round_trip(&Haar, &x, 1e-9).unwrap();
    assert_abs_diff_eq!(err, 0.0, epsilon = 1e-12);

    for family in WaveletFamily::ALL {
        assert!(verify_round_trip(&Wavelet::new(family), &x, 1e-9).is_ok());
    }
}

/// Test that a broken transform is reported at the first bad index.
#[test]
fn test_broken_transform_detected() {
    // Rotating twice maps [1, 1, 5, 7] to [5, 7, 1, 1].
    let x = vec![1.0f64, 1.0, 5.0, 7.0];
    let err = verify_round_trip(&RotateTwice, &x, 1e-9).unwrap_err();

    assert_eq!(
        err,
        ShrinkageError::TransformContractViolation {
            index: 0,
            error: 4.0
        }
    );
}

/// Test that the input is never modified.
#[test]
fn test_input_untouched() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0];
    let _ = verify_round_trip(&RotateTwice, &x, 1e-9);
    assert_eq!(x, vec![1.0, 2.0, 3.0, 4.0]);
}

/// Test that invalid tolerances and lengths are reported.
#[test]
fn test_errors_propagate() {
    let x = vec![1.0f64, 2.0, 3.0, 4.0];
    assert_eq!(
        verify_round_trip(&Haar, &x, 0.0),
        Err(ShrinkageError::InvalidTolerance(0.0))
    );

    let x = vec![1.0f64; 6];
    assert_eq!(
        verify_round_trip(&Haar, &x, 1e-9),
        Err(ShrinkageError::NotPowerOfTwo { len: 6 })
    );
}

/// Test tolerance checks on their own, ahead of any transform call.
#[test]
fn test_check_tolerance() {
    assert!(check_tolerance(1e-12f64).is_ok());
    assert_eq!(
        check_tolerance(-0.5f64),
        Err(ShrinkageError::InvalidTolerance(-0.5))
    );
    assert!(matches!(
        check_tolerance(f64::INFINITY),
        Err(ShrinkageError::InvalidTolerance(_))
    ));
}
