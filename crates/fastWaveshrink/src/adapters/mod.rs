//! Layer 6: Adapters
//!
//! This layer provides the user-facing batch adapter that wraps the
//! `waveshrink` processor with parallel, multi-series and ndarray support.

// Parallel batch adapter for wavelet shrinkage.
pub mod batch;
