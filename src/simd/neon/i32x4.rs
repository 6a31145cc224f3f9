//! NEON 4-lane i32 SIMD vector.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Mul};

use crate::simd::traits::{SimdLoad, SimdStore};

/// Optimal memory alignment for NEON loads and stores, in bytes.
pub(crate) const NEON_ALIGNMENT: usize = 16;

/// Number of i32 elements in a 128-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

/// NEON SIMD vector containing 4 packed i32 values.
#[derive(Copy, Clone, Debug)]
pub struct I32x4 {
    /// Number of valid elements in the vector (1-4).
    pub size: usize,
    /// NEON 128-bit register holding the packed values.
    pub elements: int32x4_t,
}

impl I32x4 {
    /// Creates a vector with every lane set to `value`.
    #[inline(always)]
    pub fn splat(value: i32) -> Self {
        Self {
            elements: unsafe { vdupq_n_s32(value) },
            size: LANE_COUNT,
        }
    }

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

impl From<&[i32]> for I32x4 {
    /// Creates a vector from a slice, using a full load for 4 or more
    /// elements and a lane-wise partial load below that.
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

impl SimdLoad<i32> for I32x4 {
    type Output = Self;

    #[inline(always)]
    unsafe fn load(ptr: *const i32, size: usize) -> Self::Output {
        debug_assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: vld1q_s32(ptr),
            size,
        }
    }

    // NEON has a single load form; alignment only affects performance.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const i32) -> Self::Output {
        Self::load(ptr, LANE_COUNT)
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const i32) -> Self::Output {
        Self::load(ptr, LANE_COUNT)
    }

    /// Lane-wise load of `size` elements; the remaining lanes are zeroed.
    #[inline(always)]
    unsafe fn load_partial(ptr: *const i32, size: usize) -> Self::Output {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let elements = match size {
            1 => {
                let v = vdupq_n_s32(0);
                vsetq_lane_s32(*ptr, v, 0)
            }
            2 => {
                let mut v = vdupq_n_s32(0);
                v = vsetq_lane_s32(*ptr, v, 0);
                vsetq_lane_s32(*ptr.add(1), v, 1)
            }
            3 => {
                let mut v = vdupq_n_s32(0);
                v = vsetq_lane_s32(*ptr, v, 0);
                v = vsetq_lane_s32(*ptr.add(1), v, 1);
                vsetq_lane_s32(*ptr.add(2), v, 2)
            }
            _ => unreachable!("Size must be < {}", LANE_COUNT),
        };

        Self { elements, size }
    }
}

impl SimdStore<i32> for I32x4 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut i32) {
        debug_assert!(self.size <= LANE_COUNT, "Size must be <= {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match self.size.cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => self.store_at_partial(ptr),
            std::cmp::Ordering::Equal => self.store_unaligned_at(ptr),
            std::cmp::Ordering::Greater => unreachable!("Size cannot exceed LANE_COUNT"),
        }
    }

    // NEON has a single store form; alignment only affects performance.
    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut i32) {
        vst1q_s32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut i32) {
        vst1q_s32(ptr, self.elements)
    }

    /// Lane-wise store writing only the valid lanes.
    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut i32) {
        debug_assert!(self.size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match self.size {
            1 => {
                *ptr = vgetq_lane_s32(self.elements, 0);
            }
            2 => {
                *ptr = vgetq_lane_s32(self.elements, 0);
                *ptr.add(1) = vgetq_lane_s32(self.elements, 1);
            }
            3 => {
                *ptr = vgetq_lane_s32(self.elements, 0);
                *ptr.add(1) = vgetq_lane_s32(self.elements, 1);
                *ptr.add(2) = vgetq_lane_s32(self.elements, 2);
            }
            _ => unreachable!("Size must be < LANE_COUNT"),
        }
    }
}

impl Add for I32x4 {
    type Output = Self;

    /// Lane-wise wrapping addition.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.size, rhs.size, "Operands must have the same size");

        Self {
            size: self.size,
            elements: unsafe { vaddq_s32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for I32x4 {
    type Output = Self;

    /// Lane-wise multiplication keeping the low 32 bits of each product,
    /// matching scalar wrapping multiply.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.size, rhs.size, "Operands must have the same size");

        Self {
            size: self.size,
            elements: unsafe { vmulq_s32(self.elements, rhs.elements) },
        }
    }
}
