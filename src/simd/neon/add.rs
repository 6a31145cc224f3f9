//! NEON element-wise addition over i32 slices.

use std::alloc::{alloc, handle_alloc_error, Layout};
use std::mem;

use crate::simd::neon::i32x4::{self, I32x4};
use crate::simd::traits::{SimdAdd, SimdLoad, SimdStore};

fn alloc_uninit_i32_vec(len: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let layout = Layout::from_size_align(len * mem::size_of::<i32>(), i32x4::NEON_ALIGNMENT)
        .expect("Invalid layout");

    let ptr = unsafe { alloc(layout) as *mut i32 };

    if ptr.is_null() {
        handle_alloc_error(layout);
    }

    unsafe { Vec::from_raw_parts(ptr, len, len) }
}

/// Element-wise sum into a freshly allocated, 16-byte aligned vector.
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
/// Full 4-lane blocks use whole-vector loads and stores; the remaining
/// tail, if any, goes through the lane-wise partial path.
///
/// # Panics
///
/// Panics if the slice lengths differ or `out` has the wrong length.
#[inline(always)]
pub fn simd_add_into(a: &[i32], b: &[i32], out: &mut [i32]) {
    assert_eq!(a.len(), b.len(), "Vectors must be the same length");
    assert_eq!(a.len(), out.len(), "Output must match the input length");

    let size = a.len();
    let step = i32x4::LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    for i in (0..nb_lanes).step_by(step) {
        simd_add_block(&a[i], &b[i], &mut out[i]);
    }

    if rem_lanes > 0 {
        simd_add_partial_block(&a[nb_lanes], &b[nb_lanes], &mut out[nb_lanes], rem_lanes);
    }
}

#[inline(always)]
fn simd_add_block(a: *const i32, b: *const i32, c: *mut i32) {
    // Assumes lengths are i32x4::LANE_COUNT
    let a_chunk = unsafe { I32x4::load(a, i32x4::LANE_COUNT) };
    let b_chunk = unsafe { I32x4::load(b, i32x4::LANE_COUNT) };
    unsafe { (a_chunk + b_chunk).store_at(c) };
}

#[inline(always)]
fn simd_add_partial_block(a: *const i32, b: *const i32, c: *mut i32, size: usize) {
    let a_chunk = unsafe { I32x4::load_partial(a, size) };
    let b_chunk = unsafe { I32x4::load_partial(b, size) };
    unsafe { (a_chunk + b_chunk).store_at(c) };
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
