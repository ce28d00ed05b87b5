//! Dyadic length utilities for pyramidal transforms.
//!
//! ## Purpose
//!
//! This module provides the small integer and numeric helpers shared by the
//! transforms and the shrinkage engine: power-of-two checks, the sequence of
//! level lengths visited by the pyramid algorithm, and the conversion of
//! `f64` constants into the working float type.
//!
//! ## Key concepts
//!
//! * **Level length**: The length `m` of the leading block processed at one
//!   decomposition level. The finest level has `m = n`, each next one halves it.
//! * **Coarsest level**: The last level whose length is still at least the
//!   transform floor.
//! * **Transform floor**: The filter length rounded up to a power of two (and at
//!   least 2); the shortest sequence a filter bank can decompose.
//!
//! ## Invariants
//!
//! * Level lengths are powers of two when `n` is a power of two.
//! * `coarsest_level(n, taps) <= n` for every `n >= min_transform_len(taps)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ShrinkageError;

/// Smallest sequence length accepted by the shrinkage engine.
///
/// The first two coefficients are exempt from shrinkage, so the finest detail
/// band (`n / 2` samples) must still hold at least two coefficients.
pub const MIN_SEQUENCE_LEN: usize = 4;

/// Check whether `n` is a (non-zero) power of two.
#[inline]
pub fn is_dyadic(n: usize) -> bool {
    n.is_power_of_two()
}

/// Shortest dyadic length a filter of `taps` coefficients can decompose.
#[inline]
pub fn min_transform_len(taps: usize) -> usize {
    taps.max(2).next_power_of_two()
}

/// Check that `n` is a non-zero power of two no shorter than `min`.
pub fn check_transform_len(n: usize, min: usize) -> Result<(), ShrinkageError> {
    if n == 0 {
        return Err(ShrinkageError::EmptyInput);
    }
    if !is_dyadic(n) {
        return Err(ShrinkageError::NotPowerOfTwo { len: n });
    }
    if n < min {
        return Err(ShrinkageError::TooFewPoints { got: n, min });
    }
    Ok(())
}

/// Smallest level length processed by the pyramid for a filter of `taps` coefficients.
///
/// Returns `n` itself when no halving is possible.
#[inline]
pub fn coarsest_level(n: usize, taps: usize) -> usize {
    let floor = min_transform_len(taps);
    let mut m = n;
    while m / 2 >= floor {
        m /= 2;
    }
    m
}

/// Number of decomposition levels the pyramid performs on a length-`n` sequence.
#[inline]
pub fn level_count(n: usize, taps: usize) -> usize {
    let floor = min_transform_len(taps);
    if n < floor {
        return 0;
    }
    (n / coarsest_level(n, taps)).trailing_zeros() as usize + 1
}

/// Smallest power of two that is at least `max(n, MIN_SEQUENCE_LEN)`.
#[inline]
pub fn padded_len(n: usize) -> usize {
    n.max(MIN_SEQUENCE_LEN).next_power_of_two()
}

/// Convert an `f64` constant into the working float type.
///
/// Every `Float` type the crate is used with represents these constants, so the
/// NaN fallback is never observed in practice.
#[inline]
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
