//! Input validation for wavelet shrinkage configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before a sequence is
//! touched: dyadic length checks, minimum lengths, finite samples, custom
//! filter constraints, and builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Dyadic length**: The pyramid algorithm halves the sequence repeatedly.
//! * **Minimum length**: 4 for shrinkage (two exempt coefficients plus a
//!   two-coefficient finest band), the filter length for a transform.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not pad or otherwise repair invalid inputs.
//! * This module does not perform the transform or shrinkage itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::families::check_filter;
use crate::evaluation::contract::check_tolerance;
use crate::primitives::dyadic::{MIN_SEQUENCE_LEN, check_transform_len, is_dyadic};
use crate::primitives::errors::ShrinkageError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for wavelet shrinkage configuration and input data.
///
/// Provides static methods that return `Result<(), ShrinkageError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a sequence for denoising.
    pub fn validate_sequence<T: Float>(data: &[T]) -> Result<(), ShrinkageError> {
        let n = data.len();

        // Check 1: Non-empty
        if n == 0 {
            return Err(ShrinkageError::EmptyInput);
        }

        // Check 2: Dyadic length
        if !is_dyadic(n) {
            return Err(ShrinkageError::NotPowerOfTwo { len: n });
        }

        // Check 3: Room for the exempt band and a finest detail band
        if n < MIN_SEQUENCE_LEN {
            return Err(ShrinkageError::TooFewPoints {
                got: n,
                min: MIN_SEQUENCE_LEN,
            });
        }

        // Check 4: All values finite
        Self::validate_finite(data)
    }

    /// Validate that every sample is finite.
    pub fn validate_finite<T: Float>(data: &[T]) -> Result<(), ShrinkageError> {
        for (i, &v) in data.iter().enumerate() {
            if !v.is_finite() {
                return Err(ShrinkageError::InvalidNumericValue(format!(
                    "data[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a sequence length for a transform needing at least `min` samples.
    pub fn validate_transform_len(n: usize, min: usize) -> Result<(), ShrinkageError> {
        check_transform_len(n, min)
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate custom low-pass filter coefficients.
    pub fn validate_filter(coefficients: &[f64]) -> Result<(), ShrinkageError> {
        check_filter(coefficients)
    }

    /// Validate the round-trip tolerance used for transform verification.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), ShrinkageError> {
        check_tolerance(tol)
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ShrinkageError> {
        if let Some(param) = duplicate_param {
            return Err(ShrinkageError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
