//! NEON kernel for the fixed 4×4 i32 matrix multiply.

use crate::matmul::Mat;
use crate::simd::neon::i32x4::{self, I32x4};
use crate::simd::traits::{SimdLoad, SimdStore};
use crate::MAT_DIM;

/// Accumulates `a * b` into `c`, one output row per 128-bit accumulator.
///
/// A row of B spans exactly one vector, so row `i` of C is the sum over
/// `k` of row `k` of B scaled by `a[i][k]`. Exact integer arithmetic;
/// agrees bit-for-bit with the scalar kernel.
#[inline(always)]
pub fn matmul_i32(a: &Mat<i32>, b: &Mat<i32>, c: &mut Mat<i32>) {
    let bp = b.as_ptr() as *const i32;
    let cp = c.as_mut_ptr() as *mut i32;

    unsafe {
        let b_rows: [I32x4; MAT_DIM] = [
            I32x4::load(bp, i32x4::LANE_COUNT),
            I32x4::load(bp.add(MAT_DIM), i32x4::LANE_COUNT),
            I32x4::load(bp.add(2 * MAT_DIM), i32x4::LANE_COUNT),
            I32x4::load(bp.add(3 * MAT_DIM), i32x4::LANE_COUNT),
        ];

        for i in 0..MAT_DIM {
            let mut acc = I32x4::load(cp.add(i * MAT_DIM), i32x4::LANE_COUNT);

            for (k, &b_row) in b_rows.iter().enumerate() {
                acc = acc + b_row * I32x4::splat(a[i][k]);
            }

            acc.store_at(cp.add(i * MAT_DIM));
        }
    }
}
