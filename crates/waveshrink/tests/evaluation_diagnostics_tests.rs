#![cfg(feature = "dev")]
//! Tests for denoising diagnostics.

use approx::assert_relative_eq;

use waveshrink::internals::evaluation::diagnostics::Diagnostics;

/// Test diagnostics when nothing changed.
#[test]
fn test_identical_input_output() {
    let x = [1.0f64, 2.0, 3.0, 4.0];
    let diag = Diagnostics::compute(&x, &x, 0);

    assert_eq!(diag.rmse, 0.0);
    assert_eq!(diag.max_abs_change, 0.0);
    assert_eq!(diag.removed_energy, 0.0);
    assert_relative_eq!(diag.energy_ratio, 1.0, epsilon = 1e-12);
    assert_eq!(diag.zeroed_fraction, 0.0);
}

/// Test diagnostics against hand-computed values.
#[test]
fn test_known_values() {
    let x = [2.0f64, 0.0, 0.0, 0.0];
    let y = [1.0f64, 0.0, 0.0, 0.0];
    let diag = Diagnostics::compute(&x, &y, 1);

    assert_relative_eq!(diag.removed_energy, 1.0, epsilon = 1e-12);
    assert_relative_eq!(diag.rmse, 0.5, epsilon = 1e-12);
    assert_relative_eq!(diag.max_abs_change, 1.0, epsilon = 1e-12);
    assert_relative_eq!(diag.energy_ratio, 0.25, epsilon = 1e-12);
    assert_relative_eq!(diag.zeroed_fraction, 0.5, epsilon = 1e-12);
}

/// Test an all-zero input.
#[test]
fn test_zero_input() {
    let x = [0.0f64; 8];
    let diag = Diagnostics::compute(&x, &x, 0);

    assert_eq!(diag.energy_ratio, 1.0);
    assert_eq!(diag.rmse, 0.0);
}

/// Test the display output.
#[test]
fn test_display() {
    let x = [2.0f64, 0.0, 0.0, 0.0];
    let y = [1.0f64, 0.0, 0.0, 0.0];
    let text = Diagnostics::compute(&x, &y, 1).to_string();

    assert!(text.contains("Denoising Diagnostics:"));
    assert!(text.contains("RMSE:           0.500000"));
    assert!(text.contains("Zeroed:         50.00%"));
}
