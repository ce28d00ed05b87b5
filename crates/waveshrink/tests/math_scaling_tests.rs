#![cfg(feature = "dev")]
//! Tests for robust scale and noise estimation.
//!
//! These tests verify the scale estimators used for:
//! - Noise-level estimation from finest detail coefficients
//! - Median selection on even and odd lengths
//!
//! ## Test Organization
//!
//! 1. **MAD Computation** - Known values on small inputs
//! 2. **MAR Computation** - Uncentred variant
//! 3. **Noise Estimator** - Gaussian consistency constant and input handling

use approx::assert_relative_eq;

use waveshrink::internals::math::scaling::{
    MAD_TO_SIGMA, NoiseEstimator, ScalingMethod, median_inplace,
};

// ============================================================================
// MAD Computation Tests
// ============================================================================

/// Test MAD computation with even-length input.
#[test]
fn test_mad_even_length() {
    // Median = 3, deviations [2, 1, 0, 1], MAD = 1.0
    let mut vals = vec![1.0f64, 2.0, 3.0, 4.0];
    let mad = ScalingMethod::MAD.compute(&mut vals);

    assert_relative_eq!(mad, 1.0, epsilon = 1e-12);
}

/// Test MAD computation with odd-length input.
#[test]
fn test_mad_odd_length() {
    let mut vals = vec![3.0f64, 1.0, 2.0];
    let mad = ScalingMethod::MAD.compute(&mut vals);

    assert_relative_eq!(mad, 1.0, epsilon = 1e-12);
}

/// Test that MAD is zero for a constant slice.
#[test]
fn test_mad_identical_values() {
    let mut vals = vec![5.0f64; 10];
    assert_eq!(ScalingMethod::MAD.compute(&mut vals), 0.0);
}

/// Test that a single outlier barely moves the MAD.
#[test]
fn test_mad_outlier_resistance() {
    // Median = 3, deviations [2, 1, 0, 1, 97], MAD = 1
    let mut vals = vec![1.0f64, 2.0, 3.0, 4.0, 100.0];
    let mad = ScalingMethod::MAD.compute(&mut vals);

    assert_relative_eq!(mad, 1.0, epsilon = 1e-12);
}

/// Test MAD on an empty slice.
#[test]
fn test_mad_empty() {
    let mut vals: Vec<f64> = vec![];
    assert_eq!(ScalingMethod::MAD.compute(&mut vals), 0.0);
}

// ============================================================================
// MAR Computation Tests
// ============================================================================

/// Test MAR on mixed-sign input.
#[test]
fn test_mar_mixed_signs() {
    // |x| = [3, 1, 2, 4], median = 3
    let mut vals = vec![-3.0f64, 1.0, -2.0, 4.0];
    let mar = ScalingMethod::MAR.compute(&mut vals);

    assert_relative_eq!(mar, 3.0, epsilon = 1e-12);
}

/// Test that MAR differs from MAD for off-centre data.
#[test]
fn test_mar_is_uncentred() {
    let data = [10.0f64, 11.0, 12.0];

    let mad = ScalingMethod::MAD.compute(&mut data.to_vec());
    let mar = ScalingMethod::MAR.compute(&mut data.to_vec());

    assert_relative_eq!(mad, 1.0, epsilon = 1e-12);
    assert_relative_eq!(mar, 11.0, epsilon = 1e-12);
}

// ============================================================================
// Median Tests
// ============================================================================

/// Test that the even-length median is the upper middle value.
#[test]
fn test_median_even_takes_upper_middle() {
    let mut vals = vec![7.0f64, 1.0, 5.0, 3.0];
    assert_eq!(median_inplace(&mut vals), 5.0);

    let mut vals = vec![0.4f64, -2.0];
    assert_eq!(median_inplace(&mut vals), 0.4);
}

/// Test that the MAD of an even-length band uses single order statistics.
#[test]
fn test_mad_even_band_order_statistics() {
    // Median = 0.3, deviations [0.0, 1.7, 0.4, 0.1], MAD = 0.4
    let mut vals = vec![0.3f64, 2.0, -0.1, 0.2];
    let mad = ScalingMethod::MAD.compute(&mut vals);

    assert_relative_eq!(mad, 0.4, epsilon = 1e-12);
}

/// Test median of a single value and of an empty slice.
#[test]
fn test_median_degenerate() {
    assert_eq!(median_inplace(&mut [42.0f64]), 42.0);
    assert_eq!(median_inplace::<f64>(&mut []), 0.0);
}

// ============================================================================
// Noise Estimator Tests
// ============================================================================

/// Test that sigma is the MAD divided by 0.6745.
#[test]
fn test_estimate_applies_consistency_constant() {
    let coefficients = [1.0f64, 2.0, 3.0, 4.0];
    let sigma = NoiseEstimator::default().estimate(&coefficients);

    assert_relative_eq!(sigma, 1.0 / MAD_TO_SIGMA, epsilon = 1e-12);
    assert_relative_eq!(MAD_TO_SIGMA, 0.6745);
}

/// Test that `estimate` does not reorder its input.
#[test]
fn test_estimate_leaves_input_untouched() {
    let coefficients = vec![4.0f64, -1.0, 3.0, 0.5, 2.0, -7.0];
    let before = coefficients.clone();

    let _ = NoiseEstimator::new(ScalingMethod::MAD).estimate(&coefficients);

    assert_eq!(coefficients, before);
}

/// Test that a constant band yields a zero noise estimate.
#[test]
fn test_estimate_constant_is_zero() {
    let sigma = NoiseEstimator::default().estimate(&[0.25f64; 8]);
    assert_eq!(sigma, 0.0);
}

/// Test estimation with the MAR method and with f32.
#[test]
fn test_estimate_mar_f32() {
    let sigma = NoiseEstimator::new(ScalingMethod::MAR).estimate(&[-1.0f32, 1.0, -1.0, 1.0]);
    assert_relative_eq!(sigma, 1.0 / 0.6745f32, epsilon = 1e-6);
}

/// Test that an empty slice yields zero.
#[test]
fn test_estimate_empty() {
    assert_eq!(NoiseEstimator::default().estimate::<f64>(&[]), 0.0);
}
