//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the shrinkage engine:
//! - Robust noise-scale estimation (MAD/MAR)
//! - Universal threshold selection
//! - Padding of non-dyadic series
//!
//! These are reusable building blocks with no transform-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Robust scale estimation (MAD/MAR).
pub mod scaling;

/// Universal threshold.
pub mod threshold;

/// Power-of-two padding utilities.
pub mod boundary;
