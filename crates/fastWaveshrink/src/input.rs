//! Input abstractions for wavelet shrinkage.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for denoising inputs, allowing
//! the `denoise` method to process multiple data formats (slices, vectors,
//! ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Denoising runs directly on the container's buffer.
//! * **Interoperability**: Bridges standard Rust collections with `ndarray`.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected before processing.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not copy non-contiguous views into temporary buffers.

// External dependencies
use ndarray::{ArrayBase, DataMut, Ix1};
use num_traits::Float;

// Export dependencies from waveshrink crate
use waveshrink::internals::primitives::errors::ShrinkageError;

/// Trait for types that can be denoised in place.
pub trait ShrinkInput<T: Float> {
    /// Mutable contiguous view of the samples.
    fn as_shrink_slice_mut(&mut self) -> Result<&mut [T], ShrinkageError>;
}

impl<T: Float> ShrinkInput<T> for [T] {
    fn as_shrink_slice_mut(&mut self) -> Result<&mut [T], ShrinkageError> {
        Ok(self)
    }
}

impl<T: Float> ShrinkInput<T> for Vec<T> {
    fn as_shrink_slice_mut(&mut self) -> Result<&mut [T], ShrinkageError> {
        Ok(self.as_mut_slice())
    }
}

impl<T: Float, S> ShrinkInput<T> for ArrayBase<S, Ix1>
where
    S: DataMut<Elem = T>,
{
    fn as_shrink_slice_mut(&mut self) -> Result<&mut [T], ShrinkageError> {
        self.as_slice_mut().ok_or_else(|| {
            ShrinkageError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
