//! Output types for wavelet shrinkage.
//!
//! ## Purpose
//!
//! This module defines [`DenoiseReport`], the summary returned by every
//! successful denoising call. The denoised samples themselves live in the
//! caller's buffer; the report carries the quantities computed on the way.
//!
//! ## Design notes
//!
//! * **Small**: The report holds scalars only, plus optional diagnostics.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::shrinkage::{EXEMPT_COEFFICIENTS, Shrinkage};
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Report Structure
// ============================================================================

/// Summary of one denoising pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DenoiseReport<T> {
    /// Length of the denoised sequence.
    pub len: usize,

    /// Estimated noise standard deviation.
    pub sigma: T,

    /// Universal threshold applied to the coefficients.
    pub threshold: T,

    /// Shrinkage policy that was applied.
    pub policy: Shrinkage,

    /// Coefficients in `[2, n)` that were non-zero and ended at exactly zero.
    pub coefficients_zeroed: usize,

    /// Diagnostic metrics, if requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> DenoiseReport<T> {
    /// Number of coefficients eligible for shrinkage.
    pub fn shrinkable(&self) -> usize {
        self.len.saturating_sub(EXEMPT_COEFFICIENTS)
    }

    /// Check whether the estimated noise level was zero.
    ///
    /// A zero threshold means the pass left every coefficient unchanged.
    pub fn is_noise_free(&self) -> bool {
        self.sigma == T::zero()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for DenoiseReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len)?;
        writeln!(f, "  Policy:      {}", self.policy.name())?;
        writeln!(f, "  Sigma:       {:.6}", self.sigma)?;
        writeln!(f, "  Threshold:   {:.6}", self.threshold)?;
        writeln!(
            f,
            "  Zeroed:      {} / {}",
            self.coefficients_zeroed,
            self.shrinkable()
        )?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }

        Ok(())
    }
}
