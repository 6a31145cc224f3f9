//! AVX2 8-lane i32 SIMD vector.
//!
//! `I32x8` wraps the 256-bit `__m256i` register to operate on eight packed
//! 32-bit integers at once. Loads and stores pick aligned, unaligned, or
//! masked instructions based on the pointer and the number of valid lanes,
//! so callers can walk a slice in full blocks and finish with one partial
//! block without branching themselves.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Mul};

use crate::simd::traits::{Alignment, SimdLoad, SimdStore};

/// Optimal memory alignment for AVX2 loads and stores, in bytes.
pub(crate) const AVX_ALIGNMENT: usize = 32;

/// Number of i32 elements in a 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// AVX2 SIMD vector containing 8 packed i32 values.
#[derive(Copy, Clone, Debug)]
pub struct I32x8 {
    /// Number of valid elements in the vector (1-8).
    pub size: usize,
    /// AVX2 256-bit register holding the packed values.
    pub elements: __m256i,
}

impl I32x8 {
    /// Copies the valid lanes out into a freshly allocated vector.
    pub fn to_vec(self) -> Vec<i32> {
        let mut out = vec![0i32; self.size];

        unsafe {
            if self.size == LANE_COUNT {
                self.store_unaligned_at(out.as_mut_ptr());
            } else {
                self.store_at_partial(out.as_mut_ptr());
            }
        }

        out
    }
}

impl Alignment<i32> for I32x8 {
    /// Checks whether a pointer meets the 32-byte AVX2 alignment.
    #[inline(always)]
    fn is_aligned(ptr: *const i32) -> bool {
        let ptr = ptr as usize;

        ptr % core::mem::align_of::<__m256i>() == 0
    }
}

impl From<&[i32]> for I32x8 {
    /// Creates a vector from a slice, using a full load for 8 or more
    /// elements and a masked partial load below that.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the slice is empty.
    fn from(slice: &[i32]) -> Self {
        debug_assert!(!slice.is_empty(), "data pointer can't be NULL");

        let size = slice.len();

        match slice.len().cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => unsafe { Self::load_partial(slice.as_ptr(), size) },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                Self::load(slice.as_ptr(), LANE_COUNT)
            },
        }
    }
}

impl SimdLoad<i32> for I32x8 {
    type Output = Self;

    #[inline(always)]
    unsafe fn load(ptr: *const i32, size: usize) -> Self::Output {
        debug_assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match I32x8::is_aligned(ptr) {
            true => Self::load_aligned(ptr),
            false => Self::load_unaligned(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self::Output {
        Self {
            elements: _mm256_load_si256(ptr as *const __m256i),
            size: LANE_COUNT,
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self::Output {
        Self {
            elements: _mm256_loadu_si256(ptr as *const __m256i),
            size: LANE_COUNT,
        }
    }

    /// Masked load of `size` lanes; the remaining lanes are zeroed.
    #[inline(always)]
    unsafe fn load_partial(ptr: *const i32, size: usize) -> Self::Output {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mask = match size {
            1 => _mm256_setr_epi32(-1, 0, 0, 0, 0, 0, 0, 0),
            2 => _mm256_setr_epi32(-1, -1, 0, 0, 0, 0, 0, 0),
            3 => _mm256_setr_epi32(-1, -1, -1, 0, 0, 0, 0, 0),
            4 => _mm256_setr_epi32(-1, -1, -1, -1, 0, 0, 0, 0),
            5 => _mm256_setr_epi32(-1, -1, -1, -1, -1, 0, 0, 0),
            6 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, 0, 0),
            7 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, -1, 0),
            _ => unreachable!("Size must be < LANE_COUNT"),
        };

        Self {
            elements: _mm256_maskload_epi32(ptr, mask),
            size,
        }
    }
}

impl SimdStore<i32> for I32x8 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut i32) {
        debug_assert!(self.size <= LANE_COUNT, "Size must be <= {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match self.size.cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => self.store_at_partial(ptr),
            std::cmp::Ordering::Equal => match I32x8::is_aligned(ptr) {
                true => self.store_aligned_at(ptr),
                false => self.store_unaligned_at(ptr),
            },
            std::cmp::Ordering::Greater => unreachable!("Size cannot exceed LANE_COUNT"),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut i32) {
        _mm256_store_si256(ptr as *mut __m256i, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut i32) {
        _mm256_storeu_si256(ptr as *mut __m256i, self.elements)
    }

    /// Masked store writing only the valid lanes.
    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut i32) {
        debug_assert!(self.size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mask: __m256i = match self.size {
            1 => _mm256_setr_epi32(-1, 0, 0, 0, 0, 0, 0, 0),
            2 => _mm256_setr_epi32(-1, -1, 0, 0, 0, 0, 0, 0),
            3 => _mm256_setr_epi32(-1, -1, -1, 0, 0, 0, 0, 0),
            4 => _mm256_setr_epi32(-1, -1, -1, -1, 0, 0, 0, 0),
            5 => _mm256_setr_epi32(-1, -1, -1, -1, -1, 0, 0, 0),
            6 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, 0, 0),
            7 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, -1, 0),
            _ => unreachable!("Size must be < LANE_COUNT"),
        };

        _mm256_maskstore_epi32(ptr, mask, self.elements);
    }
}

impl Add for I32x8 {
    type Output = Self;

    /// Lane-wise wrapping addition.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.size, rhs.size, "Operands must have the same size");

        Self {
            size: self.size,
            elements: unsafe { _mm256_add_epi32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for I32x8 {
    type Output = Self;

    /// Lane-wise multiplication keeping the low 32 bits of each product,
    /// matching scalar wrapping multiply.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.size, rhs.size, "Operands must have the same size");

        Self {
            size: self.size,
            elements: unsafe { _mm256_mullo_epi32(self.elements, rhs.elements) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_roundtrip_through_slice() {
        let data = [1i32, -2, 3, -4, 5, -6, 7, -8];
        let vec = I32x8::from(data.as_slice());

        assert_eq!(vec.size, LANE_COUNT);
        assert_eq!(vec.to_vec(), data);
    }

    #[test]
    fn test_partial_roundtrip_every_tail_length() {
        for size in 1..LANE_COUNT {
            let data: Vec<i32> = (0..size as i32).map(|i| i - 3).collect();
            let vec = I32x8::from(data.as_slice());

            assert_eq!(vec.size, size);
            assert_eq!(vec.to_vec(), data, "mismatch for size {size}");
        }
    }

    #[test]
    fn test_add_matches_scalar_lanes() {
        let a = [1i32, 2, 3, 4, 5, 6, 7, 8];
        let b = [10i32, -20, 30, -40, 50, -60, 70, -80];

        let sum = I32x8::from(a.as_slice()) + I32x8::from(b.as_slice());

        let expected: Vec<i32> = a.iter().zip(b.iter()).map(|(x, y)| x + y).collect();
        assert_eq!(sum.to_vec(), expected);
    }

    #[test]
    fn test_mul_matches_scalar_lanes() {
        let a = [1i32, -2, 3, -4, 5, -6, 7, -8];
        let b = [9i32, 8, -7, 6, -5, 4, -3, 2];

        let product = I32x8::from(a.as_slice()) * I32x8::from(b.as_slice());

        let expected: Vec<i32> = a.iter().zip(b.iter()).map(|(x, y)| x * y).collect();
        assert_eq!(product.to_vec(), expected);
    }
}
