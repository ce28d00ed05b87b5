#![cfg(feature = "dev")]
//! Tests for the universal threshold.

use approx::assert_relative_eq;

use waveshrink::internals::math::threshold::universal_threshold;

/// Test the formula `sigma * sqrt(2 ln n)`.
#[test]
fn test_universal_threshold_formula() {
    let lambda = universal_threshold(1.0f64, 1024);
    assert_relative_eq!(lambda, (2.0 * 1024f64.ln()).sqrt(), epsilon = 1e-12);

    let lambda = universal_threshold(0.5f64, 8);
    assert_relative_eq!(lambda, 0.5 * (2.0 * 8f64.ln()).sqrt(), epsilon = 1e-12);
}

/// Test that the threshold scales linearly with sigma.
#[test]
fn test_universal_threshold_linear_in_sigma() {
    let a = universal_threshold(1.0f64, 256);
    let b = universal_threshold(3.0f64, 256);
    assert_relative_eq!(b, 3.0 * a, epsilon = 1e-12);
}

/// Test degenerate inputs.
#[test]
fn test_universal_threshold_degenerate() {
    assert_eq!(universal_threshold(0.0f64, 64), 0.0);
    assert_eq!(universal_threshold(-1.0f64, 64), 0.0);
    assert_eq!(universal_threshold(1.0f64, 1), 0.0);
    assert_eq!(universal_threshold(1.0f64, 0), 0.0);
}

/// Test f32 support.
#[test]
fn test_universal_threshold_f32() {
    let lambda = universal_threshold(2.0f32, 16);
    assert_relative_eq!(lambda, 2.0 * (2.0 * 16f32.ln()).sqrt(), epsilon = 1e-5);
}
