//! High-level API for wavelet shrinkage.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the free
//! functions [`denoise`] and [`denoise_hard`], and a fluent builder producing a
//! reusable [`WaveletShrinkage`] processor.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: `.wavelet()` swaps the transform type, so any
//!   [`WaveletTransform`] can drive the pipeline.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WaveShrinkBuilder`] via `WaveShrink::new()`.
//! 2. Chain configuration methods (`.policy()`, `.wavelet()`, etc.).
//! 3. Call `.build()` to get a [`WaveletShrinkage`] processor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ShrinkageExecutor;
use crate::engine::validator::Validator;
use crate::math::boundary::pad_to_power_of_two;

// Publicly re-exported types
pub use crate::algorithms::families::WaveletFamily;
pub use crate::algorithms::shrinkage::Shrinkage;
pub use crate::algorithms::transform::{Haar, Wavelet, WaveletTransform};
pub use crate::engine::executor::ShrinkageConfig;
pub use crate::engine::output::DenoiseReport;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::boundary::PaddingPolicy;
pub use crate::math::scaling::ScalingMethod;
pub use crate::primitives::errors::ShrinkageError;

// ============================================================================
// Free Functions
// ============================================================================

/// Denoise `data` in place with the given transform and shrinkage policy.
///
/// The noise level is estimated from the finest detail coefficients and the
/// universal threshold is applied to every coefficient except the first two.
///
/// # Errors
///
/// Returns an error, leaving `data` unchanged, when its length is not a power
/// of two or is below 4, or when it contains non-finite values.
pub fn denoise<T, W>(
    data: &mut [T],
    transform: &W,
    policy: Shrinkage,
) -> Result<DenoiseReport<T>, ShrinkageError>
where
    T: Float,
    W: WaveletTransform<T> + ?Sized,
{
    ShrinkageExecutor::run(data, transform, &ShrinkageConfig::with_policy(policy))
}

/// Denoise `data` in place with hard thresholding.
pub fn denoise_hard<T, W>(data: &mut [T], transform: &W) -> Result<DenoiseReport<T>, ShrinkageError>
where
    T: Float,
    W: WaveletTransform<T> + ?Sized,
{
    denoise(data, transform, Shrinkage::Hard)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring wavelet shrinkage.
#[derive(Debug, Clone)]
pub struct WaveShrinkBuilder<T, W = Wavelet<T>> {
    /// Transform driving the pipeline (default: Daubechies 4-tap).
    pub transform: W,

    /// Shrinkage policy (default: Hard).
    pub policy: Option<Shrinkage>,

    /// Scaling method for the noise estimate (default: MAD).
    pub scaling_method: Option<ScalingMethod>,

    /// Enable diagnostics in the report.
    pub return_diagnostics: Option<bool>,

    /// Round-trip tolerance for per-call transform verification.
    pub verify_tolerance: Option<T>,

    /// Whether a transform was explicitly configured.
    #[doc(hidden)]
    pub transform_set: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for WaveShrinkBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WaveShrinkBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            transform: Wavelet::default(),
            policy: None,
            scaling_method: None,
            return_diagnostics: None,
            verify_tolerance: None,
            transform_set: false,
            duplicate_param: None,
        }
    }

    /// Use a built-in wavelet family.
    pub fn family(self, family: WaveletFamily) -> Self {
        self.wavelet(Wavelet::new(family))
    }
}

impl<T: Float, W> WaveShrinkBuilder<T, W> {
    /// Set the transform, replacing the builder's transform type.
    pub fn wavelet<W2: WaveletTransform<T>>(self, transform: W2) -> WaveShrinkBuilder<T, W2> {
        let duplicate_param = if self.transform_set {
            Some("wavelet")
        } else {
            self.duplicate_param
        };
        WaveShrinkBuilder {
            transform,
            policy: self.policy,
            scaling_method: self.scaling_method,
            return_diagnostics: self.return_diagnostics,
            verify_tolerance: self.verify_tolerance,
            transform_set: true,
            duplicate_param,
        }
    }

    /// Set the shrinkage policy.
    pub fn policy(mut self, policy: Shrinkage) -> Self {
        if self.policy.is_some() {
            self.duplicate_param = Some("policy");
        }
        self.policy = Some(policy);
        self
    }

    /// Set the scaling method for the noise estimate.
    pub fn scaling_method(mut self, sm: ScalingMethod) -> Self {
        if self.scaling_method.is_some() {
            self.duplicate_param = Some("scaling_method");
        }
        self.scaling_method = Some(sm);
        self
    }

    /// Include diagnostic metrics in the report.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Verify the transform's round trip on every call before mutating data.
    pub fn verify_transform(mut self, tolerance: T) -> Self {
        if self.verify_tolerance.is_some() {
            self.duplicate_param = Some("verify_transform");
        }
        self.verify_tolerance = Some(tolerance);
        self
    }
}

impl<T: Float, W: WaveletTransform<T>> WaveShrinkBuilder<T, W> {
    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<WaveletShrinkage<T, W>, ShrinkageError> {
        // Check for deferred errors from parameter setters
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(tol) = self.verify_tolerance {
            Validator::validate_tolerance(tol)?;
        }

        let config = ShrinkageConfig {
            policy: self.policy.unwrap_or_default(),
            scaling_method: self.scaling_method.unwrap_or_default(),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
            verify_tolerance: self.verify_tolerance,
        };

        Ok(WaveletShrinkage {
            config,
            transform: self.transform,
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured wavelet shrinkage processor.
///
/// Holds no per-call state, so one processor can denoise any number of
/// sequences, including from several threads at once when `W` is `Sync`.
#[derive(Debug, Clone)]
pub struct WaveletShrinkage<T, W> {
    config: ShrinkageConfig<T>,
    transform: W,
}

impl<T: Float, W: WaveletTransform<T>> WaveletShrinkage<T, W> {
    /// Denoise `data` in place.
    pub fn denoise(&self, data: &mut [T]) -> Result<DenoiseReport<T>, ShrinkageError> {
        ShrinkageExecutor::run(data, &self.transform, &self.config)
    }

    /// Pad `x` to a power of two, denoise it, and cut it back to its length.
    ///
    /// The report describes the padded sequence.
    pub fn denoise_padded(
        &self,
        x: &[T],
        padding: PaddingPolicy,
    ) -> Result<(Vec<T>, DenoiseReport<T>), ShrinkageError> {
        if x.is_empty() {
            return Err(ShrinkageError::EmptyInput);
        }
        Validator::validate_finite(x)?;

        let mut padded = pad_to_power_of_two(x, padding);
        let report = self.denoise(&mut padded.data)?;
        Ok((padded.restore(), report))
    }

    /// Active configuration.
    pub fn config(&self) -> &ShrinkageConfig<T> {
        &self.config
    }

    /// Transform driving the pipeline.
    pub fn transform(&self) -> &W {
        &self.transform
    }
}
