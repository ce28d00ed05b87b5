//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the denoising process by coordinating between
//! math (noise scale, threshold) and algorithms (transforms, shrinkage).
//! It validates inputs and runs the single-pass pipeline.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for wavelet shrinkage.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for denoising operations.
pub mod output;
