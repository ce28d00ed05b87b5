//! Universal threshold selection.
//!
//! The universal (VisuShrink) threshold `λ = σ · sqrt(2 · ln n)` is the
//! expected maximum magnitude of `n` independent Gaussian noise samples with
//! standard deviation `σ`. Coefficients below it are treated as noise.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dyadic::constant;

/// Compute the universal threshold `sigma * sqrt(2 * ln(n))`.
///
/// Returns zero when `n <= 1` or when `sigma` is not positive.
pub fn universal_threshold<T: Float>(sigma: T, n: usize) -> T {
    if n <= 1 || sigma <= T::zero() {
        return T::zero();
    }
    let n = T::from(n).unwrap_or_else(T::infinity);
    sigma * (constant::<T>(2.0) * n.ln()).sqrt()
}
