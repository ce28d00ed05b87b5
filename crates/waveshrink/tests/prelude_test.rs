#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for common
//! denoising workflows.

use waveshrink::prelude::*;

/// Test a complete builder workflow with prelude imports only.
#[test]
fn test_prelude_builder() {
    let mut y: Vec<f64> = (0..16).map(|i| (i as f64 * 0.5).sin()).collect();

    let result = WaveShrink::new()
        .policy(Soft)
        .scaling_method(MAD)
        .family(WaveletFamily::Daubechies4)
        .build()
        .unwrap()
        .denoise(&mut y);

    assert!(result.is_ok(), "Denoising should work with prelude imports");
}

/// Test the free functions and transforms.
#[test]
fn test_prelude_free_functions() {
    let mut y = vec![1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0];
    assert!(denoise(&mut y, &Haar, Hard).is_ok());
    assert!(denoise_hard(&mut y, &Wavelet::new(WaveletFamily::Haar)).is_ok());
}

/// Test that the enum variants are exported.
#[test]
fn test_prelude_variants() {
    let _ = WaveShrink::<f64>::new().scaling_method(MAR);
    let _ = [Zero, Reflect, Extend];
    let _ = [Hard, Soft];
}

/// Test that errors are exported.
#[test]
fn test_prelude_error() {
    let mut y = vec![1.0, 2.0, 3.0];
    let err: ShrinkageError = denoise_hard(&mut y, &Haar).unwrap_err();
    assert_eq!(err, ShrinkageError::NotPowerOfTwo { len: 3 });
}
