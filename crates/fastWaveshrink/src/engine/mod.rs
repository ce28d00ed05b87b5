//! Layer 5: Engine
//!
//! This layer provides the parallel execution engine for wavelet shrinkage.
//! It distributes independent series across CPU cores.

// Parallel and sequential batch passes
pub mod executor;
