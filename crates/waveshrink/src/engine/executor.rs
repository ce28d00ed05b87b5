//! Execution engine for wavelet shrinkage.
//!
//! ## Purpose
//!
//! This module runs one denoising pass over a caller-owned sequence. It
//! coordinates the transform, the noise estimator, the threshold rule and the
//! shrinkage policy, and assembles the resulting [`DenoiseReport`].
//!
//! ## Design notes
//!
//! * **Validate first**: Length, finiteness and the transform's minimum length
//!   are checked before the buffer is written, so an error leaves it untouched.
//! * **Single buffer**: The sequence is transformed, shrunk and reconstructed
//!   in place. Extra copies are only made for diagnostics and verification.
//! * **Stateless**: The executor holds configuration only; every call computes
//!   its own `σ` and `λ`.
//!
//! ## Key concepts
//!
//! * **Pipeline**: validate → forward → estimate `σ` on `data[n/2..]` →
//!   `λ = σ·sqrt(2 ln n)` → shrink `data[2..]` → inverse.
//! * **Finest detail band**: The upper half of the transformed buffer.
//!
//! ## Invariants
//!
//! * `σ >= 0` and `λ >= 0` for every successful call.
//! * `data[0]` and `data[1]` pass through shrinkage unchanged.
//!
//! ## Non-goals
//!
//! * This module does not pad non-dyadic input (see `math::boundary`).
//! * This module does not handle parallel execution (see `fastWaveshrink`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::shrinkage::{Shrinkage, shrink_coefficients};
use crate::algorithms::transform::WaveletTransform;
use crate::engine::output::DenoiseReport;
use crate::engine::validator::Validator;
use crate::evaluation::contract::verify_round_trip;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::scaling::{NoiseEstimator, ScalingMethod};
use crate::math::threshold::universal_threshold;
use crate::primitives::errors::ShrinkageError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one shrinkage pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkageConfig<T> {
    /// Shrinkage policy applied to coefficients `[2, n)`.
    pub policy: Shrinkage,

    /// Robust scale method used for the noise estimate.
    pub scaling_method: ScalingMethod,

    /// Compute diagnostics (keeps a copy of the input).
    pub return_diagnostics: bool,

    /// Round-trip tolerance for verifying the transform before mutation.
    pub verify_tolerance: Option<T>,
}

impl<T: Float> Default for ShrinkageConfig<T> {
    fn default() -> Self {
        Self {
            policy: Shrinkage::default(),
            scaling_method: ScalingMethod::default(),
            return_diagnostics: false,
            verify_tolerance: None,
        }
    }
}

impl<T: Float> ShrinkageConfig<T> {
    /// Configuration with the given policy and every other option at its default.
    pub fn with_policy(policy: Shrinkage) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the shrinkage pipeline.
pub struct ShrinkageExecutor;

impl ShrinkageExecutor {
    /// Denoise `data` in place.
    ///
    /// # Errors
    ///
    /// Returns an error, with `data` unchanged, when the length is not a power
    /// of two, is below 4 or below the transform's minimum, when a sample is not
    /// finite, or when the optional round-trip verification fails.
    ///
    /// Errors from the transform itself are propagated. A transform that fails
    /// in `inverse` after a successful `forward` breaks the
    /// [`WaveletTransform`] contract; `data` then holds shrunk coefficients.
    /// Enable `verify_tolerance` to catch such transforms before any write.
    pub fn run<T, W>(
        data: &mut [T],
        transform: &W,
        config: &ShrinkageConfig<T>,
    ) -> Result<DenoiseReport<T>, ShrinkageError>
    where
        T: Float,
        W: WaveletTransform<T> + ?Sized,
    {
        Validator::validate_sequence(data)?;
        let n = data.len();
        Validator::validate_transform_len(n, transform.min_len())?;

        if let Some(tol) = config.verify_tolerance {
            verify_round_trip(transform, data, tol)?;
        }

        let original: Option<Vec<T>> = if config.return_diagnostics {
            Some(data.to_vec())
        } else {
            None
        };

        transform.forward(data)?;

        let sigma = NoiseEstimator::new(config.scaling_method).estimate(&data[n / 2..]);
        let threshold = universal_threshold(sigma, n);
        let coefficients_zeroed = shrink_coefficients(data, threshold, config.policy);

        transform.inverse(data)?;

        tracing::debug!(
            len = n,
            sigma = sigma.to_f64().unwrap_or(f64::NAN),
            threshold = threshold.to_f64().unwrap_or(f64::NAN),
            policy = config.policy.name(),
            coefficients_zeroed,
            "denoised sequence"
        );

        let diagnostics = original
            .as_deref()
            .map(|x| Diagnostics::compute(x, data, coefficients_zeroed));

        Ok(DenoiseReport {
            len: n,
            sigma,
            threshold,
            policy: config.policy,
            coefficients_zeroed,
            diagnostics,
        })
    }
}
