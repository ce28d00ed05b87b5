//! # fastWaveshrink — Parallel Wavelet Shrinkage for Rust
//!
//! High-level wrapper around [`waveshrink`] that denoises many independent
//! series in parallel and accepts `ndarray` inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastWaveshrink::prelude::*;
//!
//! let mut series: Vec<Vec<f64>> = (0..8)
//!     .map(|k| (0..256).map(|i| ((i + k) as f64 * 0.05).sin()).collect())
//!     .collect();
//!
//! let model = WaveShrink::new()
//!     .policy(Soft)       // Soft thresholding
//!     .parallel(true)     // Spread series across CPU cores
//!     .build()?;
//!
//! for report in model.denoise_all(&mut series) {
//!     let report = report?;
//!     assert_eq!(report.len, 256);
//! }
//! # Result::<(), ShrinkageError>::Ok(())
//! ```
//!
//! ### ndarray Inputs
//!
//! ```rust
//! use fastWaveshrink::prelude::*;
//! use ndarray::Array2;
//!
//! let mut matrix = Array2::from_shape_fn((4, 64), |(r, c)| ((r * 64 + c) as f64 * 0.1).cos());
//!
//! let model = WaveShrink::new().wavelet(Haar).build()?;
//! let reports = model.denoise_rows(&mut matrix)?;
//!
//! assert_eq!(reports.len(), 4);
//! # Result::<(), ShrinkageError>::Ok(())
//! ```
//!
//! ## Features
//!
//! - `cpu` (default): parallel execution with `rayon`. Without it every
//!   batch runs sequentially.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel and sequential batch passes.
mod engine;

// Layer 6: Adapters - batch adapter.
mod adapters;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Standard fastWaveshrink prelude.
pub mod prelude {
    pub use crate::api::{
        DenoiseReport, Haar,
        PaddingPolicy::{Extend, Reflect, Zero},
        ParallelShrinkage, ParallelShrinkageBuilder as WaveShrink,
        ScalingMethod::{MAD, MAR},
        ShrinkInput,
        Shrinkage::{Hard, Soft},
        ShrinkageError, Wavelet, WaveletFamily, WaveletTransform, denoise, denoise_hard,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
