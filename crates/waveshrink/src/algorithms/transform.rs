//! Reversible multiresolution transforms.
//!
//! ## Purpose
//!
//! This module defines the [`WaveletTransform`] contract consumed by the
//! shrinkage engine and provides concrete implementations: a closed-form
//! [`Haar`] transform and a generic periodic orthogonal filter bank
//! ([`Wavelet`]) for the Daubechies, Symlet and Coiflet families.
//!
//! ## Design notes
//!
//! * **In-place**: Both directions overwrite the caller's buffer.
//! * **Stateless**: Scratch space is allocated per call, so one transform can
//!   be shared by many threads.
//! * **Fail before mutation**: Lengths are validated before the first write.
//! * **Periodic boundary**: Filters wrap around the end of each level, which
//!   keeps the transform orthogonal and exactly invertible.
//!
//! ## Key concepts
//!
//! * **Pyramid algorithm**: Each level splits the leading `m` samples into
//!   `m/2` approximation coefficients (stored first) and `m/2` detail
//!   coefficients (stored second), then recurses on the approximation block.
//! * **Finest detail band**: After `forward`, `data[n/2..]` holds the
//!   first-level detail coefficients.
//! * **Coarsest block**: `data[..2]` holds the final approximation and
//!   coarsest coefficients.
//!
//! ## Invariants
//!
//! * `inverse(forward(x)) == x` up to floating-point rounding.
//! * The decomposition preserves energy (orthonormal filters).
//!
//! ## Non-goals
//!
//! * This module does not pick a wavelet for the caller.
//! * This module does not implement biorthogonal or stationary transforms.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::families::{WaveletFamily, check_filter};
use crate::primitives::dyadic::{check_transform_len, coarsest_level, constant, min_transform_len};
use crate::primitives::errors::ShrinkageError;

// ============================================================================
// Transform Contract
// ============================================================================

/// An in-place, exactly invertible multiresolution transform.
///
/// After [`forward`](WaveletTransform::forward) the buffer must use the
/// pyramidal layout: the finest-scale detail coefficients occupy the upper half
/// `data[n/2..]`.
///
/// # Implementing
///
/// Both methods must reject a buffer before writing to it. Every dyadic length
/// of at least [`min_len`](WaveletTransform::min_len) must be accepted by both
/// directions: once `forward` has succeeded on a buffer, `inverse` must not
/// fail on the same buffer, or the caller is left holding coefficients.
pub trait WaveletTransform<T: Float> {
    /// Decompose `data` in place.
    fn forward(&self, data: &mut [T]) -> Result<(), ShrinkageError>;

    /// Reconstruct `data` in place; the exact inverse of `forward`.
    fn inverse(&self, data: &mut [T]) -> Result<(), ShrinkageError>;

    /// Shortest sequence length the transform accepts; always a power of two.
    fn min_len(&self) -> usize {
        2
    }
}

impl<T: Float, W: WaveletTransform<T> + ?Sized> WaveletTransform<T> for &W {
    fn forward(&self, data: &mut [T]) -> Result<(), ShrinkageError> {
        (**self).forward(data)
    }

    fn inverse(&self, data: &mut [T]) -> Result<(), ShrinkageError> {
        (**self).inverse(data)
    }

    fn min_len(&self) -> usize {
        (**self).min_len()
    }
}

// ============================================================================
// Haar
// ============================================================================

/// Closed-form Haar transform.
///
/// Each level maps a pair `(x0, x1)` to `((x0 + x1) / √2, (x0 - x1) / √2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Haar;

impl Haar {
    fn analysis_step<T: Float>(buf: &mut [T], scratch: &mut [T]) {
        let half = buf.len() / 2;
        let c = constant::<T>(core::f64::consts::FRAC_1_SQRT_2);
        for k in 0..half {
            let (x0, x1) = (buf[2 * k], buf[2 * k + 1]);
            scratch[k] = c * (x0 + x1);
            scratch[half + k] = c * (x0 - x1);
        }
        buf.copy_from_slice(&scratch[..buf.len()]);
    }

    fn synthesis_step<T: Float>(buf: &mut [T], scratch: &mut [T]) {
        let half = buf.len() / 2;
        let c = constant::<T>(core::f64::consts::FRAC_1_SQRT_2);
        for k in 0..half {
            let (a, d) = (buf[k], buf[half + k]);
            scratch[2 * k] = c * (a + d);
            scratch[2 * k + 1] = c * (a - d);
        }
        buf.copy_from_slice(&scratch[..buf.len()]);
    }
}

impl<T: Float> WaveletTransform<T> for Haar {
    fn forward(&self, data: &mut [T]) -> Result<(), ShrinkageError> {
        check_transform_len(data.len(), 2)?;
        let mut scratch = vec![T::zero(); data.len()];
        let mut m = data.len();
        while m >= 2 {
            Self::analysis_step(&mut data[..m], &mut scratch);
            m /= 2;
        }
        Ok(())
    }

    fn inverse(&self, data: &mut [T]) -> Result<(), ShrinkageError> {
        check_transform_len(data.len(), 2)?;
        let mut scratch = vec![T::zero(); data.len()];
        let mut m = 2;
        while m <= data.len() {
            Self::synthesis_step(&mut data[..m], &mut scratch);
            m *= 2;
        }
        Ok(())
    }
}

// ============================================================================
// Filter Bank
// ============================================================================

/// Orthogonal wavelet defined by its low-pass (scaling) filter.
///
/// The high-pass filter is derived with the alternating flip
/// `g[j] = (-1)^j · h[L-1-j]`, and synthesis uses the transposed analysis
/// operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavelet<T> {
    /// Low-pass decomposition filter `h`.
    lo: Vec<T>,

    /// High-pass decomposition filter `g`.
    hi: Vec<T>,

    /// Family the filter came from, if it is a built-in one.
    family: Option<WaveletFamily>,
}

impl<T: Float> Wavelet<T> {
    /// Create a filter bank for a built-in wavelet family.
    pub fn new(family: WaveletFamily) -> Self {
        let lo: Vec<T> = family.coefficients().iter().map(|&c| constant(c)).collect();
        let hi = Self::quadrature_mirror(&lo);
        Self {
            lo,
            hi,
            family: Some(family),
        }
    }

    /// Create a filter bank from custom low-pass coefficients.
    ///
    /// The filter must have an even number (at least 2) of finite taps with
    /// unit energy and a sum of `√2`.
    pub fn from_filter(coefficients: &[f64]) -> Result<Self, ShrinkageError> {
        check_filter(coefficients)?;
        let lo: Vec<T> = coefficients.iter().map(|&c| constant(c)).collect();
        let hi = Self::quadrature_mirror(&lo);
        Ok(Self {
            lo,
            hi,
            family: None,
        })
    }

    /// Number of filter taps.
    pub fn taps(&self) -> usize {
        self.lo.len()
    }

    /// Built-in family of this wavelet, if any.
    pub fn family(&self) -> Option<WaveletFamily> {
        self.family
    }

    /// Low-pass decomposition filter.
    pub fn low_pass(&self) -> &[T] {
        &self.lo
    }

    /// High-pass decomposition filter.
    pub fn high_pass(&self) -> &[T] {
        &self.hi
    }

    // Alternating flip: g[j] = (-1)^j * h[L-1-j].
    fn quadrature_mirror(lo: &[T]) -> Vec<T> {
        let l = lo.len();
        (0..l)
            .map(|j| {
                let v = lo[l - 1 - j];
                if j % 2 == 0 { v } else { -v }
            })
            .collect()
    }

    // One level of periodic analysis on the leading `m` samples.
    //
    //   a[k] = sum_j h[j] * x[(2k + j) mod m]
    //   d[k] = sum_j g[j] * x[(2k + j) mod m]
    fn analysis_step(&self, buf: &mut [T], scratch: &mut [T]) {
        let m = buf.len();
        let half = m / 2;
        for k in 0..half {
            let mut a = T::zero();
            let mut d = T::zero();
            for (j, (&h, &g)) in self.lo.iter().zip(self.hi.iter()).enumerate() {
                let x = buf[(2 * k + j) % m];
                a = a + h * x;
                d = d + g * x;
            }
            scratch[k] = a;
            scratch[half + k] = d;
        }
        buf.copy_from_slice(&scratch[..m]);
    }

    // Transpose of `analysis_step`: scatter each (a[k], d[k]) pair back.
    fn synthesis_step(&self, buf: &mut [T], scratch: &mut [T]) {
        let m = buf.len();
        let half = m / 2;
        scratch[..m].fill(T::zero());
        for k in 0..half {
            let (a, d) = (buf[k], buf[half + k]);
            for (j, (&h, &g)) in self.lo.iter().zip(self.hi.iter()).enumerate() {
                let idx = (2 * k + j) % m;
                scratch[idx] = scratch[idx] + h * a + g * d;
            }
        }
        buf.copy_from_slice(&scratch[..m]);
    }
}

impl<T: Float> Default for Wavelet<T> {
    fn default() -> Self {
        Self::new(WaveletFamily::default())
    }
}

impl<T: Float> WaveletTransform<T> for Wavelet<T> {
    fn forward(&self, data: &mut [T]) -> Result<(), ShrinkageError> {
        let n = data.len();
        check_transform_len(n, self.min_len())?;
        let floor = self.min_len();
        let mut scratch = vec![T::zero(); n];
        let mut m = n;
        while m >= floor {
            self.analysis_step(&mut data[..m], &mut scratch);
            tracing::trace!(level_len = m, taps = self.taps(), "analysis level");
            m /= 2;
        }
        Ok(())
    }

    fn inverse(&self, data: &mut [T]) -> Result<(), ShrinkageError> {
        let n = data.len();
        check_transform_len(n, self.min_len())?;
        let mut scratch = vec![T::zero(); n];
        let mut m = coarsest_level(n, self.taps());
        while m <= n {
            self.synthesis_step(&mut data[..m], &mut scratch);
            tracing::trace!(level_len = m, taps = self.taps(), "synthesis level");
            m *= 2;
        }
        Ok(())
    }

    fn min_len(&self) -> usize {
        min_transform_len(self.taps())
    }
}

