//! Padding strategies for non-dyadic series.
//!
//! ## Purpose
//!
//! The shrinkage engine only accepts power-of-two lengths. This module lets a
//! caller extend an arbitrary series to the next power of two before denoising,
//! and cut the result back to the original length afterwards.
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: Uses `PaddingPolicy` enum to select the padding method.
//! * **Allocation**: Creates a new vector for the padded data.
//! * **Right-sided**: Padding is appended after the last sample, so the
//!   original samples keep their indices.
//!
//! ## Key concepts
//!
//! * **Zero**: Append zeros.
//! * **Reflect**: Mirror the series about its last sample (without repeating it).
//! * **Extend**: Repeat the last sample.
//!
//! ## Invariants
//!
//! * The padded length is a power of two and at least 4.
//! * The first `original_len` samples equal the input.
//!
//! ## Non-goals
//!
//! * This module does not perform in-place modification of input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dyadic::padded_len;

// ============================================================================
// Padding Policy
// ============================================================================

/// Policy for extending a series to a power-of-two length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Append zeros.
    #[default]
    Zero,

    /// Mirror values across the last sample.
    Reflect,

    /// Replicate the last sample.
    Extend,
}

/// A series padded to a power-of-two length.
#[derive(Debug, Clone, PartialEq)]
pub struct Padded<T> {
    /// Padded samples; length is a power of two.
    pub data: Vec<T>,

    /// Number of samples in the caller's series.
    pub original_len: usize,
}

impl<T> Padded<T> {
    /// Drop the padding and return the original-length series.
    pub fn restore(mut self) -> Vec<T> {
        self.data.truncate(self.original_len);
        self.data
    }

    /// Number of samples added by padding.
    pub fn padding(&self) -> usize {
        self.data.len() - self.original_len
    }
}

// ============================================================================
// Padding Function
// ============================================================================

/// Pad `x` to the next power of two (at least 4) using `policy`.
///
/// An empty input pads to four zeros regardless of policy.
pub fn pad_to_power_of_two<T: Float>(x: &[T], policy: PaddingPolicy) -> Padded<T> {
    let n = x.len();
    let target = padded_len(n);
    let mut data = Vec::with_capacity(target);
    data.extend_from_slice(x);

    if n == 0 {
        data.resize(target, T::zero());
        return Padded {
            data,
            original_len: 0,
        };
    }

    match policy {
        PaddingPolicy::Zero => data.resize(target, T::zero()),
        PaddingPolicy::Extend => data.resize(target, x[n - 1]),
        PaddingPolicy::Reflect => {
            // Walk back from the last sample, bouncing at both ends so that
            // padding longer than the series keeps reflecting.
            let period = 2 * (n - 1);
            let mut k = 1;
            while data.len() < target {
                let idx = if period == 0 {
                    0
                } else {
                    let pos = (n - 1 + k) % period;
                    if pos < n { pos } else { period - pos }
                };
                data.push(x[idx]);
                k += 1;
            }
        }
    }

    Padded {
        data,
        original_len: n,
    }
}
