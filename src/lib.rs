//! Fixed-size integer micro-kernels with per-CPU SIMD dispatch.
//!
//! Three kernels: a 4×4 signed-integer matrix multiply, an element-wise
//! array add, and an in-place bubble sort, plus the wall-clock harness the
//! timing binaries use. The build script detects the widest SIMD feature
//! the host CPU supports (AVX2 or NEON) and compiles the matching kernels;
//! scalar versions are always available and the dispatched entry points
//! fall back to them on machines without a supported feature.

pub mod add;
pub mod error;
pub mod harness;
pub mod matmul;
pub mod simd;
pub mod sort;

/// Fixed dimension of the square matrices handled by the matmul kernels.
pub const MAT_DIM: usize = 4;

/// Length of the integer arrays the timing binaries exercise.
pub const ARRAY_LEN: usize = 256;

/// Repetitions of the array-add kernel in `add_bench`.
pub const ADD_REPS: usize = 1_000_000;

/// Repetitions of the bubble sort in `sort_bench`.
pub const SORT_REPS: usize = 10_000;

pub use add::{add, add_into, scalar_add, scalar_add_into, try_add};
pub use error::{KernelError, Result};
pub use matmul::{matmul, matmul_scalar, matmul_transposed, Mat};
pub use simd::traits::SimdAdd;
pub use sort::bubble_sort;
