//! Parallel execution engine for wavelet shrinkage.
//!
//! ## Purpose
//!
//! This module denoises many independent series at once. Each series is
//! handed to the `waveshrink` processor unchanged; parallelism comes only from
//! running disjoint series on different CPU cores.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Isolation**: A failing series does not affect the others; every series
//!   gets its own `Result`.
//! * **Ordering**: Results are returned in input order.
//!
//! ## Invariants
//!
//! * No two tasks ever hold the same series.
//! * Parallel and sequential passes produce identical results.
//!
//! ## Non-goals
//!
//! * This module does not split a single series across threads.
//! * This module does not validate input data (handled by `waveshrink`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from waveshrink crate
use waveshrink::internals::algorithms::transform::WaveletTransform;
use waveshrink::internals::api::WaveletShrinkage;
use waveshrink::internals::engine::output::DenoiseReport;
use waveshrink::internals::primitives::errors::ShrinkageError;

/// Per-series outcome of a batch pass.
pub type BatchResult<T> = Vec<Result<DenoiseReport<T>, ShrinkageError>>;

// ============================================================================
// Parallel Passes
// ============================================================================

/// Denoise every series in parallel.
#[cfg(feature = "cpu")]
pub fn denoise_all_parallel<T, W>(
    series: &mut [Vec<T>],
    processor: &WaveletShrinkage<T, W>,
) -> BatchResult<T>
where
    T: Float + Send + Sync,
    W: WaveletTransform<T> + Sync,
{
    tracing::debug!(series = series.len(), "parallel batch denoise");
    series
        .par_iter_mut()
        .map(|s| processor.denoise(s))
        .collect()
}

/// Denoise consecutive `row_len`-sample rows of `data` in parallel.
#[cfg(feature = "cpu")]
pub fn denoise_rows_parallel<T, W>(
    data: &mut [T],
    row_len: usize,
    processor: &WaveletShrinkage<T, W>,
) -> BatchResult<T>
where
    T: Float + Send + Sync,
    W: WaveletTransform<T> + Sync,
{
    if row_len == 0 {
        return Vec::new();
    }
    tracing::debug!(rows = data.len() / row_len, row_len, "parallel row denoise");
    data.par_chunks_mut(row_len)
        .map(|row| processor.denoise(row))
        .collect()
}

// ============================================================================
// Sequential Passes
// ============================================================================

/// Denoise every series on the calling thread.
pub fn denoise_all_sequential<T, W>(
    series: &mut [Vec<T>],
    processor: &WaveletShrinkage<T, W>,
) -> BatchResult<T>
where
    T: Float,
    W: WaveletTransform<T>,
{
    series.iter_mut().map(|s| processor.denoise(s)).collect()
}

/// Denoise consecutive `row_len`-sample rows of `data` on the calling thread.
pub fn denoise_rows_sequential<T, W>(
    data: &mut [T],
    row_len: usize,
    processor: &WaveletShrinkage<T, W>,
) -> BatchResult<T>
where
    T: Float,
    W: WaveletTransform<T>,
{
    if row_len == 0 {
        return Vec::new();
    }
    data.chunks_mut(row_len)
        .map(|row| processor.denoise(row))
        .collect()
}
