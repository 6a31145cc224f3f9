//! AVX2 kernel for the fixed 4×4 i32 matrix multiply.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::matmul::Mat;
use crate::simd::avx2::i32x8::{self, I32x8};
use crate::simd::traits::{SimdLoad, SimdStore};
use crate::MAT_DIM;

/// One row of B duplicated into both 128-bit halves of a 256-bit vector.
#[inline(always)]
unsafe fn dup_row(ptr: *const i32) -> I32x8 {
    let row = _mm_loadu_si128(ptr as *const __m128i);

    I32x8 {
        size: i32x8::LANE_COUNT,
        elements: _mm256_set_m128i(row, row),
    }
}

/// Accumulates `a * b` into `c`, two output rows per 256-bit accumulator.
///
/// Lanes 0-3 hold row `i` of C and lanes 4-7 row `i + 1`. Each step
/// broadcasts one element of A across the matching half and multiplies a
/// duplicated row of B, so the whole product takes two accumulators of
/// four multiply-adds each. Exact integer arithmetic; agrees bit-for-bit
/// with the scalar kernel.
#[inline(always)]
pub fn matmul_i32(a: &Mat<i32>, b: &Mat<i32>, c: &mut Mat<i32>) {
    let bp = b.as_ptr() as *const i32;
    let cp = c.as_mut_ptr() as *mut i32;

    unsafe {
        let b_rows: [I32x8; MAT_DIM] = [
            dup_row(bp),
            dup_row(bp.add(MAT_DIM)),
            dup_row(bp.add(2 * MAT_DIM)),
            dup_row(bp.add(3 * MAT_DIM)),
        ];

        for i in (0..MAT_DIM).step_by(2) {
            let mut acc = I32x8::load(cp.add(i * MAT_DIM), i32x8::LANE_COUNT);

            for (k, &b_row) in b_rows.iter().enumerate() {
                let coeff = I32x8 {
                    size: i32x8::LANE_COUNT,
                    elements: _mm256_set_m128i(
                        _mm_set1_epi32(a[i + 1][k]),
                        _mm_set1_epi32(a[i][k]),
                    ),
                };

                acc = acc + coeff * b_row;
            }

            acc.store_at(cp.add(i * MAT_DIM));
        }
    }
}
