//! High-level API for wavelet shrinkage with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for
//! fastWaveshrink. It extends the `waveshrink` API with a batch processor that
//! denoises many series across all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `waveshrink` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution across series.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` crate feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelShrinkageBuilder`] via `WaveShrink::new()`.
//! 2. Chain configuration methods (`.policy()`, `.wavelet()`, `.parallel()`, etc.).
//! 3. Call `.build()` and denoise with `.denoise()`, `.denoise_all()` or `.denoise_rows()`.

// Publicly re-exported types
pub use crate::adapters::batch::{ParallelShrinkage, ParallelShrinkageBuilder};
pub use crate::engine::executor::BatchResult;
pub use crate::input::ShrinkInput;
pub use waveshrink::internals::api::{
    DenoiseReport, Diagnostics, Haar, PaddingPolicy, ScalingMethod, Shrinkage, ShrinkageError,
    Wavelet, WaveletFamily, WaveletTransform, denoise, denoise_hard,
};
