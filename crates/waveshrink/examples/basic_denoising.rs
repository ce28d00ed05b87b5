//! Wavelet Shrinkage Denoising Examples
//!
//! This example demonstrates common denoising scenarios:
//! - Basic hard thresholding with the free functions
//! - Soft thresholding through the builder
//! - Comparing wavelet families on a piecewise-constant signal
//! - Padding series whose length is not a power of two
//! - A custom transform plugged in through `WaveletTransform`

#[cfg(feature = "std")]
use waveshrink::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), ShrinkageError> {
    println!("{}", "=".repeat(80));
    println!("Wavelet Shrinkage - Denoising Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_free_functions()?;
    example_2_soft_builder()?;
    example_3_families()?;
    example_4_padding()?;
    example_5_custom_transform()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

/// Deterministic pseudo-noise in [-amplitude, amplitude].
#[cfg(feature = "std")]
fn jitter(i: usize, amplitude: f64) -> f64 {
    let h = i.wrapping_mul(2_654_435_761) % 1_000;
    amplitude * (h as f64 / 500.0 - 1.0)
}

#[cfg(feature = "std")]
fn blocks(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let level = if t < 0.25 {
                0.0
            } else if t < 0.5 {
                3.0
            } else if t < 0.75 {
                -1.0
            } else {
                2.0
            };
            level + jitter(i, 0.4)
        })
        .collect()
}

#[cfg(feature = "std")]
/// Example 1: Free Functions
/// One call, default hard thresholding
fn example_1_free_functions() -> Result<(), ShrinkageError> {
    println!("Example 1: Free Functions");
    println!("{}", "-".repeat(80));

    let mut y = blocks(256);
    let report = denoise_hard(&mut y, &Haar)?;
    println!("{}", report);

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Soft Thresholding with Diagnostics
fn example_2_soft_builder() -> Result<(), ShrinkageError> {
    println!("Example 2: Soft Thresholding with Diagnostics");
    println!("{}", "-".repeat(80));

    let mut y: Vec<f64> = (0..1_024)
        .map(|i| (i as f64 * 0.02).sin() + jitter(i, 0.3))
        .collect();

    let model = WaveShrink::<f64>::new()
        .family(WaveletFamily::Symlet8)
        .policy(Soft)
        .return_diagnostics()
        .build()?;

    let report = model.denoise(&mut y)?;
    println!("{}", report);

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Wavelet Families
/// Haar suits jumps, longer filters suit smooth segments
fn example_3_families() -> Result<(), ShrinkageError> {
    println!("Example 3: Wavelet Families");
    println!("{}", "-".repeat(80));

    let noisy = blocks(512);
    for family in WaveletFamily::ALL {
        let mut y = noisy.clone();
        let report = WaveShrink::<f64>::new()
            .family(family)
            .return_diagnostics()
            .build()?
            .denoise(&mut y)?;

        let rmse = report.diagnostics.map(|d| d.rmse).unwrap_or(f64::NAN);
        println!(
            "{:<14} sigma = {:.4}  zeroed = {:>3}  rmse vs noisy = {:.4}",
            family.name(),
            report.sigma,
            report.coefficients_zeroed,
            rmse
        );
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Padding
/// Non-dyadic series are padded, denoised and cut back
fn example_4_padding() -> Result<(), ShrinkageError> {
    println!("Example 4: Padding");
    println!("{}", "-".repeat(80));

    let y: Vec<f64> = (0..1_000)
        .map(|i| (i as f64 * 0.01).cos() + jitter(i, 0.2))
        .collect();

    let model = WaveShrink::<f64>::new().build()?;
    for (name, padding) in [("zero", Zero), ("reflect", Reflect), ("extend", Extend)] {
        let (smoothed, report) = model.denoise_padded(&y, padding)?;
        println!(
            "{:<8} len = {}  padded = {}  sigma = {:.4}",
            name,
            smoothed.len(),
            report.len,
            report.sigma
        );
    }

    println!();
    Ok(())
}

/// Transform that leaves every coefficient where it is.
#[cfg(feature = "std")]
struct Identity;

#[cfg(feature = "std")]
impl WaveletTransform<f64> for Identity {
    fn forward(&self, _data: &mut [f64]) -> Result<(), ShrinkageError> {
        Ok(())
    }

    fn inverse(&self, _data: &mut [f64]) -> Result<(), ShrinkageError> {
        Ok(())
    }
}

#[cfg(feature = "std")]
/// Example 5: Custom Transform
/// With an identity transform, shrinkage acts on the samples themselves
fn example_5_custom_transform() -> Result<(), ShrinkageError> {
    println!("Example 5: Custom Transform");
    println!("{}", "-".repeat(80));

    let mut y = vec![10.0, 20.0, 0.1, -0.2, 0.15, 9.0, -0.05, 0.1];
    let report = denoise(&mut y, &Identity, Hard)?;
    println!("threshold = {:.4}", report.threshold);
    println!("output    = {:?}", y);

    println!();
    Ok(())
}
