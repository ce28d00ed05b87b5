//! Error types for wavelet shrinkage operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while denoising a
//! sequence: input validation, transform length requirements, custom filter
//! constraints, and transform contract violations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (length, index, deviation).
//! * **Deferred**: Builder misconfiguration is recorded and surfaced in `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty sequences, non-dyadic lengths, too-short sequences, non-finite samples.
//! 2. **Transform requirements**: Sequences shorter than the wavelet filter.
//! 3. **Contract checks**: A transform whose inverse does not undo its forward pass.
//!
//! ## Invariants
//!
//! * Every input-validation error is raised before the sequence is mutated.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for wavelet shrinkage operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ShrinkageError {
    /// The sequence is empty.
    EmptyInput,

    /// Sequence length must be a power of two.
    NotPowerOfTwo {
        /// Length of the rejected sequence.
        len: usize,
    },

    /// Sequence is shorter than the minimum supported length.
    TooFewPoints {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// A custom wavelet filter is not an orthonormal low-pass filter.
    InvalidFilter(String),

    /// Round-trip tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// `inverse(forward(x))` did not reproduce `x` within tolerance.
    TransformContractViolation {
        /// First sample index whose reconstruction exceeded the tolerance.
        index: usize,
        /// Absolute reconstruction error at that index.
        error: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl ShrinkageError {
    /// Whether the error rejects the caller's sequence itself (length or values).
    ///
    /// These are the errors raised before any mutation of the buffer.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::NotPowerOfTwo { .. }
                | Self::TooFewPoints { .. }
                | Self::InvalidNumericValue(_)
                | Self::InvalidInput(_)
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ShrinkageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::NotPowerOfTwo { len } => {
                write!(f, "Invalid length: {len} (must be a power of 2)")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidFilter(msg) => write!(f, "Invalid wavelet filter: {}", msg),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::TransformContractViolation { index, error } => {
                write!(
                    f,
                    "Transform is not invertible: sample {index} reconstructed with error {error:e}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ShrinkageError {}
