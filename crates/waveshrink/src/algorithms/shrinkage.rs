//! Coefficient shrinkage policies.
//!
//! ## Purpose
//!
//! This module applies hard or soft thresholding to transform coefficients.
//! Small coefficients are assumed to carry mostly noise; thresholding removes
//! (or shrinks) them before reconstruction.
//!
//! ## Design notes
//!
//! * **Dispatch once**: The policy is matched once per call, outside the loop.
//! * **In-place**: Coefficients are overwritten in the caller's buffer.
//! * **Exempt low band**: The two coarsest coefficients are never modified.
//!
//! ## Key concepts
//!
//! * **Hard**: `|c| < λ ⇒ 0`, otherwise unchanged. Survivors are unbiased but the
//!   map jumps at `±λ`.
//! * **Soft**: `sign(c) · max(|c| - λ, 0)`. Continuous, but every survivor is
//!   shrunk toward zero by `λ`.
//!
//! ## Invariants
//!
//! * Hard keeps a coefficient with `|c| = λ`; soft maps it to exactly zero.
//! * A zero threshold leaves every coefficient unchanged.
//! * `data[0]` and `data[1]` are never written.

// External dependencies
use num_traits::Float;

/// Number of leading (coarsest) coefficients exempt from shrinkage.
pub const EXEMPT_COEFFICIENTS: usize = 2;

/// Coefficient shrinkage policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shrinkage {
    /// Zero coefficients whose magnitude is below the threshold.
    #[default]
    Hard,

    /// Shrink every magnitude toward zero by the threshold.
    Soft,
}

impl Shrinkage {
    /// Apply the policy to a single coefficient.
    #[inline]
    pub fn apply<T: Float>(&self, c: T, threshold: T) -> T {
        match self {
            Self::Hard => hard(c, threshold),
            Self::Soft => soft(c, threshold),
        }
    }

    /// Policy name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
        }
    }
}

#[inline]
fn hard<T: Float>(c: T, threshold: T) -> T {
    if c.abs() < threshold { T::zero() } else { c }
}

#[inline]
fn soft<T: Float>(c: T, threshold: T) -> T {
    c.signum() * (c.abs() - threshold).max(T::zero())
}

/// Shrink `data[EXEMPT_COEFFICIENTS..]` in place.
///
/// Returns the number of coefficients that were non-zero before and exactly
/// zero after shrinkage.
pub fn shrink_coefficients<T: Float>(data: &mut [T], threshold: T, policy: Shrinkage) -> usize {
    if data.len() <= EXEMPT_COEFFICIENTS {
        return 0;
    }

    let band = &mut data[EXEMPT_COEFFICIENTS..];
    let apply: fn(T, T) -> T = match policy {
        Shrinkage::Hard => hard,
        Shrinkage::Soft => soft,
    };

    let mut zeroed = 0;
    for c in band.iter_mut() {
        let was_nonzero = *c != T::zero();
        *c = apply(*c, threshold);
        if was_nonzero && *c == T::zero() {
            zeroed += 1;
        }
    }
    zeroed
}
