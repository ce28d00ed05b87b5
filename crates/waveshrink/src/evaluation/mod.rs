//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer checks and measures the results of the shrinkage pipeline:
//! - Round-trip verification of a transform's reversibility contract
//! - Diagnostic metrics describing what denoising removed
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Transform reversibility verification.
pub mod contract;

/// Diagnostic metrics for denoising results.
pub mod diagnostics;
