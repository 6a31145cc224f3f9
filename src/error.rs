//! Error types for the checked kernel entry points.
//!
//! The hot kernels keep `assert!`-style contract checks; the `try_*`
//! functions return these errors instead so callers can handle bad input
//! without a panic.

use std::fmt;

/// Errors that can occur when validating kernel inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// The two input slices have different lengths.
    LengthMismatch {
        /// Length of the left-hand slice.
        left: usize,
        /// Length of the right-hand slice.
        right: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch { left, right } => write!(
                f,
                "Input length mismatch: left slice has {} elements, right slice has {}",
                left, right
            ),
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type alias for the checked kernel entry points.
pub type Result<T> = std::result::Result<T, KernelError>;

/// Creates a length-mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> KernelError {
    KernelError::LengthMismatch { left, right }
}
