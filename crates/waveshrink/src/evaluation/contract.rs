//! Round-trip verification of the transform contract.
//!
//! ## Purpose
//!
//! The shrinkage engine trusts that `inverse(forward(x)) == x`. A user-supplied
//! transform that breaks this silently corrupts every denoised series, so this
//! module offers an explicit check that can be run once up front or on every
//! call.
//!
//! ## Invariants
//!
//! * The input slice is never modified; the check runs on a private copy.
//! * The reported index is the first sample whose error exceeds the tolerance.
//!
//! ## Non-goals
//!
//! * This module does not check orthogonality or energy preservation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::transform::WaveletTransform;
use crate::primitives::errors::ShrinkageError;

/// Check that a round-trip tolerance is positive and finite.
pub fn check_tolerance<T: Float>(tolerance: T) -> Result<(), ShrinkageError> {
    if !tolerance.is_finite() || tolerance <= T::zero() {
        return Err(ShrinkageError::InvalidTolerance(
            tolerance.to_f64().unwrap_or(f64::NAN),
        ));
    }
    Ok(())
}

/// Run `forward` then `inverse` on a copy of `x` and compare with `x`.
///
/// Returns the largest absolute reconstruction error on success, or
/// [`ShrinkageError::TransformContractViolation`] for the first sample whose
/// error exceeds `tolerance`.
pub fn verify_round_trip<T, W>(transform: &W, x: &[T], tolerance: T) -> Result<T, ShrinkageError>
where
    T: Float,
    W: WaveletTransform<T> + ?Sized,
{
    check_tolerance(tolerance)?;

    let mut work: Vec<T> = x.to_vec();
    transform.forward(&mut work)?;
    transform.inverse(&mut work)?;

    let mut max_error = T::zero();
    for (i, (&orig, &back)) in x.iter().zip(work.iter()).enumerate() {
        let error = (orig - back).abs();
        // NaN compares false everywhere, so test for it explicitly.
        if error > tolerance || error.is_nan() {
            let error = error.to_f64().unwrap_or(f64::NAN);
            tracing::warn!(index = i, error, "transform failed round-trip check");
            return Err(ShrinkageError::TransformContractViolation { index: i, error });
        }
        max_error = max_error.max(error);
    }

    Ok(max_error)
}
