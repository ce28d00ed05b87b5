//! # waveshrink — Wavelet Shrinkage Denoising for Rust
//!
//! Denoise a discrete time series by thresholding its wavelet coefficients.
//!
//! ## What is wavelet shrinkage?
//!
//! An orthogonal wavelet transform concentrates a smooth signal into a few large
//! coefficients while spreading white noise evenly over all of them. Estimating
//! the noise level from the finest-scale coefficients, discarding (hard) or
//! shrinking (soft) every coefficient below the universal threshold
//! `σ · sqrt(2 ln n)`, and inverting the transform removes most of the noise
//! while keeping edges and transients.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use waveshrink::prelude::*;
//!
//! let mut y: Vec<f64> = (0..64)
//!     .map(|i| (i as f64 * 0.2).sin() + if i % 2 == 0 { 0.05 } else { -0.05 })
//!     .collect();
//!
//! // Build the processor
//! let model = WaveShrink::new()
//!     .policy(Soft)                  // Soft thresholding
//!     .family(WaveletFamily::Daubechies8)
//!     .build()?;
//!
//! // Denoise in place
//! let report = model.denoise(&mut y)?;
//!
//! println!("{}", report);
//! # Result::<(), ShrinkageError>::Ok(())
//! ```
//!
//! ### Free Functions
//!
//! ```rust
//! use waveshrink::prelude::*;
//!
//! let mut y = vec![1.0, 1.2, 0.9, 1.1, 5.0, 5.1, 4.9, 5.2];
//! let report = denoise(&mut y, &Haar, Hard)?;
//! assert!(report.sigma >= 0.0);
//! # Result::<(), ShrinkageError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Denoising returns a `Result<DenoiseReport<T>, ShrinkageError>`. Invalid
//! lengths (not a power of two, or fewer than 4 samples) and non-finite
//! samples are rejected before the buffer is modified:
//!
//! ```rust
//! use waveshrink::prelude::*;
//!
//! let mut y = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let err = denoise_hard(&mut y, &Haar).unwrap_err();
//! assert_eq!(err, ShrinkageError::NotPowerOfTwo { len: 6 });
//! assert_eq!(y, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! ```
//!
//! Series of other lengths can be padded first:
//!
//! ```rust
//! use waveshrink::prelude::*;
//!
//! let y = vec![0.5, 0.7, 0.6, 0.8, 0.4, 0.9];
//! let model = WaveShrink::new().wavelet(Haar).build()?;
//! let (smoothed, _report) = model.denoise_padded(&y, Reflect)?;
//! assert_eq!(smoothed.len(), y.len());
//! # Result::<(), ShrinkageError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! waveshrink = { version = "0.3", default-features = false }
//! ```
//!
//! ## References
//!
//! - Donoho, D. L. & Johnstone, I. M. (1994). "Ideal spatial adaptation by wavelet shrinkage"
//! - Donoho, D. L. (1995). "De-noising by soft-thresholding"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - transforms and shrinkage policies.
mod algorithms;

// Layer 4: Evaluation - verification and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for wavelet shrinkage.
mod api;

pub use api::{denoise, denoise_hard};

// Standard waveshrink prelude.
pub mod prelude {
    pub use crate::api::{
        DenoiseReport, Diagnostics, Haar,
        PaddingPolicy::Extend,
        PaddingPolicy::Reflect,
        PaddingPolicy::Zero,
        ScalingMethod::MAD,
        ScalingMethod::MAR,
        Shrinkage,
        Shrinkage::Hard,
        Shrinkage::Soft,
        ShrinkageConfig, ShrinkageError, WaveShrinkBuilder as WaveShrink, Wavelet, WaveletFamily,
        WaveletShrinkage, WaveletTransform, denoise, denoise_hard,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
