//! Batch adapter for parallel wavelet shrinkage.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for wavelet shrinkage.
//! It denoises one series, a collection of series, or every row of a matrix,
//! with optional parallel processing across series.
//!
//! ## Design notes
//!
//! * **Delegation**: Each series is denoised by the `waveshrink` processor.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastWaveshrink extension).
//! * **Validation**: Configuration is validated by the base builder.
//! * **Generics**: Generic over `Float` types and transforms.
//!
//! ## Key concepts
//!
//! * **Series isolation**: Every series gets its own `Result`.
//! * **Row layout**: A matrix must be in standard (row-major) layout so each
//!   row is contiguous.
//!
//! ## Invariants
//!
//! * Results are returned in input order.
//! * Parallel and sequential execution produce identical output.
//!
//! ## Non-goals
//!
//! * This adapter does not pad non-dyadic series.
//! * This adapter does not split one series across threads.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{denoise_all_parallel, denoise_rows_parallel};

// External dependencies
use ndarray::{ArrayBase, DataMut, Ix2};
use num_traits::Float;
use std::fmt::Debug;
use std::result::Result;

// Export dependencies from waveshrink crate
use waveshrink::internals::algorithms::families::WaveletFamily;
use waveshrink::internals::algorithms::shrinkage::Shrinkage;
use waveshrink::internals::algorithms::transform::{Wavelet, WaveletTransform};
use waveshrink::internals::api::{WaveShrinkBuilder, WaveletShrinkage};
use waveshrink::internals::engine::output::DenoiseReport;
use waveshrink::internals::math::scaling::ScalingMethod;
use waveshrink::internals::primitives::errors::ShrinkageError;

// Internal dependencies
use crate::engine::executor::{BatchResult, denoise_all_sequential, denoise_rows_sequential};
use crate::input::ShrinkInput;

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for the batch shrinkage processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelShrinkageBuilder<T, W = Wavelet<T>> {
    /// Base builder from the waveshrink crate
    pub base: WaveShrinkBuilder<T, W>,

    /// Parallel execution across series (default: true).
    pub parallel: Option<bool>,
}

impl<T: Float> Default for ParallelShrinkageBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelShrinkageBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the waveshrink builder
    /// * parallel: true (fastWaveshrink extension)
    pub fn new() -> Self {
        Self {
            base: WaveShrinkBuilder::new(),
            parallel: None,
        }
    }

    /// Use a built-in wavelet family.
    pub fn family(mut self, family: WaveletFamily) -> Self {
        self.base = self.base.family(family);
        self
    }
}

impl<T: Float, W> ParallelShrinkageBuilder<T, W> {
    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the transform, replacing the builder's transform type.
    pub fn wavelet<W2: WaveletTransform<T>>(self, transform: W2) -> ParallelShrinkageBuilder<T, W2> {
        ParallelShrinkageBuilder {
            base: self.base.wavelet(transform),
            parallel: self.parallel,
        }
    }

    /// Set the shrinkage policy.
    pub fn policy(mut self, policy: Shrinkage) -> Self {
        self.base = self.base.policy(policy);
        self
    }

    /// Set the scaling method for the noise estimate.
    pub fn scaling_method(mut self, sm: ScalingMethod) -> Self {
        self.base = self.base.scaling_method(sm);
        self
    }

    /// Include diagnostic metrics in every report.
    pub fn return_diagnostics(mut self) -> Self {
        self.base = self.base.return_diagnostics();
        self
    }

    /// Verify the transform's round trip on every series before mutating it.
    pub fn verify_transform(mut self, tolerance: T) -> Self {
        self.base = self.base.verify_transform(tolerance);
        self
    }
}

impl<T: Float, W: WaveletTransform<T>> ParallelShrinkageBuilder<T, W> {
    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelShrinkage<T, W>, ShrinkageError> {
        // Validation is centralized in the waveshrink builder
        let processor = self.base.build()?;

        Ok(ParallelShrinkage {
            processor,
            parallel: self.parallel.unwrap_or(true),
        })
    }
}

// ============================================================================
// Extended Processor
// ============================================================================

/// Batch shrinkage processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelShrinkage<T, W> {
    processor: WaveletShrinkage<T, W>,
    parallel: bool,
}

impl<T, W> ParallelShrinkage<T, W>
where
    T: Float + Debug + Send + Sync,
    W: WaveletTransform<T> + Sync,
{
    /// Denoise one series in place.
    pub fn denoise<I>(&self, data: &mut I) -> Result<DenoiseReport<T>, ShrinkageError>
    where
        I: ShrinkInput<T> + ?Sized,
    {
        let slice = data.as_shrink_slice_mut()?;
        self.processor.denoise(slice)
    }

    /// Denoise every series in place, one result per series.
    pub fn denoise_all(&self, series: &mut [Vec<T>]) -> BatchResult<T> {
        #[cfg(feature = "cpu")]
        {
            if self.parallel {
                return denoise_all_parallel(series, &self.processor);
            }
        }
        denoise_all_sequential(series, &self.processor)
    }

    /// Denoise every row of a matrix in place, one result per row.
    ///
    /// # Errors
    ///
    /// Returns [`ShrinkageError::InvalidInput`] when the matrix is not in
    /// standard (row-major, contiguous) layout.
    pub fn denoise_rows<S>(&self, matrix: &mut ArrayBase<S, Ix2>) -> Result<BatchResult<T>, ShrinkageError>
    where
        S: DataMut<Elem = T>,
    {
        let row_len = matrix.ncols();
        let data = matrix.as_slice_mut().ok_or_else(|| {
            ShrinkageError::InvalidInput("matrix must be in standard row-major layout".to_string())
        })?;

        #[cfg(feature = "cpu")]
        {
            if self.parallel {
                return Ok(denoise_rows_parallel(data, row_len, &self.processor));
            }
        }
        Ok(denoise_rows_sequential(data, row_len, &self.processor))
    }

    /// Whether series are processed in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Underlying single-series processor.
    pub fn processor(&self) -> &WaveletShrinkage<T, W> {
        &self.processor
    }
}
