//! fastWaveshrink Batch Denoising Examples
//!
//! This example demonstrates features specific to `fastWaveshrink`:
//! - Parallel execution across many series using `rayon`
//! - Sequential fallback
//! - `ndarray` integration (single series and matrix rows)
//! - Per-series error isolation

use fastWaveshrink::prelude::*;
use ndarray::{Array1, Array2};
use std::time::Instant;

fn main() -> Result<(), ShrinkageError> {
    println!("{}", "=".repeat(80));
    println!("fastWaveshrink Batch Denoising Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_execution()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_error_isolation()?;

    Ok(())
}

/// Deterministic pseudo-noise in [-amplitude, amplitude].
fn jitter(i: usize, seed: usize, amplitude: f64) -> f64 {
    let h = (i.wrapping_mul(2_654_435_761) ^ seed.wrapping_mul(40_503)) % 1_000;
    amplitude * (h as f64 / 500.0 - 1.0)
}

fn noisy_series(n: usize, seed: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (i as f64 * 0.01).sin() + jitter(i, seed, 0.3))
        .collect()
}

/// Example 1: Parallel Execution
/// Denoises a batch of series on all CPU cores (the default)
fn example_1_parallel_execution() -> Result<(), ShrinkageError> {
    println!("Example 1: Parallel Execution");
    println!("{}", "-".repeat(80));

    let mut series: Vec<Vec<f64>> = (0..256).map(|k| noisy_series(4_096, k)).collect();

    let start = Instant::now();
    let model = WaveShrink::<f64>::new()
        .family(WaveletFamily::Daubechies8) // 8-tap filter bank
        .policy(Soft) // Soft thresholding
        .parallel(true) // Enable parallel execution (default)
        .build()?;

    let reports = model.denoise_all(&mut series);
    let duration = start.elapsed();

    let ok = reports.iter().filter(|r| r.is_ok()).count();
    println!("Denoised {} series in {:?}", ok, duration);
    if let Some(Ok(first)) = reports.first() {
        println!("First series:\n{}", first);
    }

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Demonstrates explicitly disabling parallelism
fn example_2_sequential_fallback() -> Result<(), ShrinkageError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let mut series: Vec<Vec<f64>> = (0..256).map(|k| noisy_series(4_096, k)).collect();

    let start = Instant::now();
    let model = WaveShrink::<f64>::new()
        .family(WaveletFamily::Daubechies8)
        .policy(Soft)
        .parallel(false) // Disable parallel execution
        .build()?;

    let reports = model.denoise_all(&mut series);
    let duration = start.elapsed();

    println!("Denoised {} series in {:?}", reports.len(), duration);
    println!("Execution mode: Sequential");

    println!();
    Ok(())
}

/// Example 3: ndarray Integration
/// Denoises an `Array1` in place and every row of an `Array2`
fn example_3_ndarray_integration() -> Result<(), ShrinkageError> {
    println!("Example 3: ndarray Integration");
    println!("{}", "-".repeat(80));

    let model = WaveShrink::<f64>::new()
        .wavelet(Haar)
        .return_diagnostics() // Include RMSE, energy and zeroed fraction
        .build()?;

    let mut y = Array1::from_vec(noisy_series(1_024, 1));
    let report = model.denoise(&mut y)?;
    println!("Array1:\n{}", report);

    let mut matrix = Array2::from_shape_fn((16, 512), |(r, c)| {
        (c as f64 * 0.02 + r as f64).cos() + jitter(c, r, 0.2)
    });
    let reports = model.denoise_rows(&mut matrix)?;
    println!("Array2: denoised {} rows of {}", reports.len(), matrix.ncols());

    println!();
    Ok(())
}

/// Example 4: Error Isolation
/// A series with an invalid length fails alone
fn example_4_error_isolation() -> Result<(), ShrinkageError> {
    println!("Example 4: Error Isolation");
    println!("{}", "-".repeat(80));

    let mut series = vec![
        noisy_series(256, 0),
        noisy_series(300, 1), // Not a power of two
        noisy_series(2, 2),   // Too short
        noisy_series(64, 3),
    ];

    let model = WaveShrink::<f64>::new().build()?;
    for (i, result) in model.denoise_all(&mut series).into_iter().enumerate() {
        match result {
            Ok(report) => println!(
                "series {}: sigma = {:.4}, zeroed {} / {}",
                i,
                report.sigma,
                report.coefficients_zeroed,
                report.shrinkable()
            ),
            Err(e) => println!("series {}: {}", i, e),
        }
    }

    println!();
    Ok(())
}
