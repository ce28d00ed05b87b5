//! Robust noise-scale estimation using MAD or MAR.
//!
//! ## Purpose
//!
//! This module estimates the standard deviation of additive noise from the
//! finest-scale detail coefficients of a wavelet transform. Those coefficients
//! are dominated by noise for most signals, so a robust scale estimate of them
//! is a consistent estimate of the noise level.
//!
//! ## Design notes
//!
//! * **Robust**: Median-based estimators ignore the few large coefficients
//!   contributed by edges and transients in the signal.
//! * **In-place**: Scale computation reorders a scratch buffer with quickselect.
//! * **Single scratch**: [`NoiseEstimator::estimate`] copies its input once into
//!   a buffer of the same (half-sequence) length.
//!
//! ## Key concepts
//!
//! * **Median**: The upper median, the order statistic at index `n / 2`.
//! * **MAD**: `median(|x - median(x)|)`.
//! * **MAR**: `median(|x|)`, the uncentred variant.
//! * **Gaussian consistency**: For Gaussian noise, `MAD / 0.6745` estimates `sigma`.
//!
//! ## Invariants
//!
//! * Estimates are always non-negative.
//! * A constant slice has a MAD of exactly zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::primitives::dyadic::constant;

/// Ratio between the MAD and the standard deviation of a Gaussian.
///
/// `0.6745` is the 75th percentile of the standard normal distribution.
pub const MAD_TO_SIGMA: f64 = 0.6745;

/// Method for measuring the scale of detail coefficients.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingMethod {
    /// Median Absolute Deviation: `median(|x - median(x)|)`.
    #[default]
    MAD,

    /// Median Absolute Residual: `median(|x|)`.
    MAR,
}

impl ScalingMethod {
    /// Compute the scale of the given values using the selected method.
    ///
    /// The slice is reordered and overwritten.
    pub fn compute<T: Float>(&self, vals: &mut [T]) -> T {
        match self {
            Self::MAD => Self::compute_mad(vals),
            Self::MAR => Self::compute_mar(vals),
        }
    }

    // Compute the Median Absolute Deviation (MAD).
    #[inline]
    fn compute_mad<T: Float>(vals: &mut [T]) -> T {
        if vals.is_empty() {
            return T::zero();
        }

        let median = median_inplace(vals);
        for val in vals.iter_mut() {
            *val = (*val - median).abs();
        }
        median_inplace(vals)
    }

    // Compute the Median Absolute Residual (uncentered).
    #[inline]
    fn compute_mar<T: Float>(vals: &mut [T]) -> T {
        if vals.is_empty() {
            return T::zero();
        }

        for val in vals.iter_mut() {
            *val = val.abs();
        }
        median_inplace(vals)
    }
}

/// Median of a slice computed in place with quickselect.
///
/// This is the order statistic at index `n / 2`, so for even lengths it is the
/// upper of the two middle values. Returns zero for an empty slice.
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }

    let mid = vals.len() / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    vals[mid]
}

// ============================================================================
// Noise Estimator
// ============================================================================

/// Estimates the noise standard deviation from detail coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoiseEstimator {
    /// Robust scale method applied to the coefficients.
    pub method: ScalingMethod,
}

impl NoiseEstimator {
    /// Create an estimator using the given scale method.
    pub fn new(method: ScalingMethod) -> Self {
        Self { method }
    }

    /// Estimate `sigma` from a slice of detail coefficients.
    ///
    /// The input is left untouched; the computation runs on a private copy.
    pub fn estimate<T: Float>(&self, coefficients: &[T]) -> T {
        if coefficients.is_empty() {
            return T::zero();
        }
        let mut scratch: Vec<T> = coefficients.to_vec();
        self.estimate_inplace(&mut scratch)
    }

    /// Estimate `sigma`, reusing `scratch` as the working buffer.
    pub fn estimate_inplace<T: Float>(&self, scratch: &mut [T]) -> T {
        let scale = self.method.compute(scratch);
        scale / constant(MAD_TO_SIGMA)
    }
}
