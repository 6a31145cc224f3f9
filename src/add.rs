//! Element-wise integer addition kernels.
//!
//! The scalar paths are generic over primitive integers; the dispatched
//! [`add`] and [`add_into`] entry points route `i32` slices through the
//! widest SIMD kernel the build enabled.

use num::PrimInt;

use crate::error::{length_mismatch, Result};

#[cfg(any(avx2, neon))]
use crate::simd::traits::SimdAdd;

/// Scalar reference: element-wise sum of two equal-length slices.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[inline(always)]
pub fn scalar_add<T: PrimInt>(a: &[T], b: &[T]) -> Vec<T> {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect()
}

/// Element-wise sum written into a caller-provided buffer.
///
/// The timing loop reuses one output buffer across a million repetitions,
/// so this path must not allocate.
///
/// # Panics
///
/// Panics if the slice lengths differ.
#[inline(always)]
pub fn scalar_add_into<T: PrimInt>(a: &[T], b: &[T], out: &mut [T]) {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");
    assert_eq!(a.len(), out.len(), "Output must match the input length");

    for ((&x, &y), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = x + y;
    }
}

/// Element-wise sum through the widest kernel the build enabled.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[inline(always)]
pub fn add(a: &[i32], b: &[i32]) -> Vec<i32> {
    #[cfg(any(avx2, neon))]
    return a.simd_add(b);
    #[cfg(not(any(avx2, neon)))]
    return scalar_add(a, b);
}

/// In-place variant of [`add`]; never allocates.
///
/// # Panics
///
/// Panics if the slice lengths differ or `out` has the wrong length.
#[inline(always)]
pub fn add_into(a: &[i32], b: &[i32], out: &mut [i32]) {
    #[cfg(avx2)]
    return crate::simd::avx2::add::simd_add_into(a, b, out);
    #[cfg(neon)]
    return crate::simd::neon::add::simd_add_into(a, b, out);
    #[cfg(not(any(avx2, neon)))]
    scalar_add_into(a, b, out);
}

/// Checked variant of [`add`] returning the crate error on bad input.
pub fn try_add(a: &[i32], b: &[i32]) -> Result<Vec<i32>> {
    if a.len() != b.len() {
        return Err(length_mismatch(a.len(), b.len()));
    }

    Ok(add(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_add_handles_empty_slices() {
        let empty: [i32; 0] = [];
        assert!(scalar_add(&empty, &empty).is_empty());
    }

    #[test]
    fn test_scalar_add_into_matches_allocating_path() {
        let a = [1i32, -2, 3, -4, 5];
        let b = [10i32, 20, -30, 40, -50];

        let mut out = [0i32; 5];
        scalar_add_into(&a, &b, &mut out);

        assert_eq!(out.to_vec(), scalar_add(&a, &b));
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_scalar_add_panics_on_length_mismatch() {
        let _ = scalar_add(&[1i32, 2], &[1i32, 2, 3]);
    }
}
