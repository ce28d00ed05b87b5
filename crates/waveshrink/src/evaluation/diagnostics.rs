//! Diagnostic metrics for denoising results.
//!
//! ## Purpose
//!
//! This module summarizes what a denoising pass did to a series: how far the
//! output moved from the input, how much energy was removed, and how sparse
//! the shrunk coefficient vector became.
//!
//! ## Design notes
//!
//! * **Opt-in**: Computing diagnostics needs a copy of the input, so the engine
//!   only keeps one when diagnostics are requested.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Removed component**: `x - x̂`, the part of the input treated as noise.
//!   Its RMS is an empirical counterpart of the estimated `σ`.
//! * **Energy ratio**: `‖x̂‖² / ‖x‖²`. Orthogonal transforms preserve energy, so
//!   this measures how much of the coefficient energy survived shrinkage.
//!
//! ## Invariants
//!
//! * `rmse`, `removed_energy` and `zeroed_fraction` are non-negative.
//! * `zeroed_fraction` lies in `[0, 1]`.
//!
//! ## Non-goals
//!
//! * This module does not estimate the true (noise-free) error.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::shrinkage::EXEMPT_COEFFICIENTS;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for one denoising pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Root mean squared difference between input and output.
    pub rmse: T,

    /// Largest absolute change applied to a single sample.
    pub max_abs_change: T,

    /// Energy `Σ (x - x̂)²` of the removed component.
    pub removed_energy: T,

    /// Ratio of output energy to input energy (1 for an all-zero input).
    pub energy_ratio: T,

    /// Fraction of shrinkable coefficients set to zero.
    pub zeroed_fraction: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from the input, the output, and the zeroed count.
    pub fn compute(input: &[T], output: &[T], coefficients_zeroed: usize) -> Self {
        let n = input.len().min(output.len());
        if n == 0 {
            return Self {
                rmse: T::zero(),
                max_abs_change: T::zero(),
                removed_energy: T::zero(),
                energy_ratio: T::one(),
                zeroed_fraction: T::zero(),
            };
        }

        let mut removed_energy = T::zero();
        let mut max_abs_change = T::zero();
        let mut energy_in = T::zero();
        let mut energy_out = T::zero();
        for (&x, &y) in input.iter().zip(output.iter()) {
            let r = x - y;
            removed_energy = removed_energy + r * r;
            max_abs_change = max_abs_change.max(r.abs());
            energy_in = energy_in + x * x;
            energy_out = energy_out + y * y;
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let rmse = (removed_energy / n_t).sqrt();

        let energy_ratio = if energy_in > T::zero() {
            energy_out / energy_in
        } else {
            T::one()
        };

        let shrinkable = n.saturating_sub(EXEMPT_COEFFICIENTS);
        let zeroed_fraction = if shrinkable > 0 {
            T::from(coefficients_zeroed.min(shrinkable)).unwrap_or(T::zero())
                / T::from(shrinkable).unwrap_or(T::one())
        } else {
            T::zero()
        };

        Self {
            rmse,
            max_abs_change,
            removed_energy,
            energy_ratio,
            zeroed_fraction,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Denoising Diagnostics:")?;
        writeln!(f, "  RMSE:           {:.6}", self.rmse)?;
        writeln!(f, "  Max change:     {:.6}", self.max_abs_change)?;
        writeln!(f, "  Removed energy: {:.6}", self.removed_energy)?;
        writeln!(f, "  Energy ratio:   {:.6}", self.energy_ratio)?;
        let percent = self.zeroed_fraction * T::from(100.0).unwrap_or(T::zero());
        writeln!(f, "  Zeroed:         {:.2}%", percent)?;
        Ok(())
    }
}
