//! Layer 3: Algorithms
//!
//! This layer implements the core logic of wavelet shrinkage: the reversible
//! transforms that move a sequence into and out of the coefficient domain, and
//! the shrinkage policies applied in between. It is orchestrated by the engine
//! layer.

// Transform contract and concrete transforms.
pub mod transform;

// Built-in wavelet filter coefficients.
pub mod families;

// Hard and soft coefficient shrinkage.
pub mod shrinkage;
