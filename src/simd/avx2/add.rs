//! AVX2 element-wise addition over i32 slices.

use std::alloc::{alloc, handle_alloc_error, Layout};

use crate::simd::avx2::i32x8::{self, I32x8};
use crate::simd::traits::{SimdAdd, SimdStore};

/// Allocates a 32-byte aligned `Vec<i32>` with uninitialized contents.
///
/// # Safety
///
/// The caller must initialize every element before reading the vector.
#[inline(always)]
fn alloc_uninit_i32_vec(len: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let layout = Layout::from_size_align(len * std::mem::size_of::<i32>(), i32x8::AVX_ALIGNMENT)
        .expect("Invalid layout");

    let ptr = unsafe { alloc(layout) as *mut i32 };

    if ptr.is_null() {
        handle_alloc_error(layout);
    }

    // SAFETY: The pointer is non-null and the layout is valid for `len`
    // elements. Capacity equals length, so the vector never reallocates
    // until grown.
    unsafe { Vec::from_raw_parts(ptr, len, len) }
}

/// Element-wise sum into a freshly allocated, 32-byte aligned vector.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[inline(always)]
pub fn simd_add(a: &[i32], b: &[i32]) -> Vec<i32> {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");

    let mut c = alloc_uninit_i32_vec(a.len());

    simd_add_into(a, b, &mut c);

    c
}

/// Element-wise sum into a caller-provided buffer.
///
/// Full 8-lane blocks use plain loads and stores; the final short block,
/// if any, goes through the masked partial path.
///
/// # Panics
///
/// Panics if the slice lengths differ or `out` has the wrong length.
#[inline(always)]
pub fn simd_add_into(a: &[i32], b: &[i32], out: &mut [i32]) {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");
    assert_eq!(a.len(), out.len(), "Output must match the input length");

    for (idx, c_chunk) in out.chunks_mut(i32x8::LANE_COUNT).enumerate() {
        let i = idx * i32x8::LANE_COUNT;

        let a_chunk = I32x8::from(&a[i..]);
        let b_chunk = I32x8::from(&b[i..]);
        let sum = a_chunk + b_chunk;

        unsafe {
            sum.store_at(c_chunk.as_mut_ptr());
        }
    }
}

impl<'b> SimdAdd<&'b [i32]> for &[i32] {
    type Output = Vec<i32>;

    #[inline(always)]
    fn simd_add(self, rhs: &'b [i32]) -> Self::Output {
        simd_add(self, rhs)
    }

    #[inline(always)]
    fn scalar_add(self, rhs: &'b [i32]) -> Self::Output {
        crate::add::scalar_add(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::add::scalar_add;

    #[test]
    fn test_simd_add_matches_scalar_with_partial_tail() {
        for len in [0usize, 1, 7, 8, 9, 16, 250, 256, 1_000] {
            let a: Vec<i32> = (0..len as i32).map(|i| i * 3 - 100).collect();
            let b: Vec<i32> = (0..len as i32).map(|i| -i * 7 + 5).collect();

            assert_eq!(
                simd_add(&a, &b),
                scalar_add(&a, &b),
                "mismatch for length {len}"
            );
        }
    }
}
