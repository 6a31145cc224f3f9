//! AVX2 implementations of the integer kernels.
//!
//! Compiled only when the build script detects AVX2 on the host. The
//! kernels operate on 256-bit vectors of eight packed `i32` lanes and are
//! exact: integer SIMD arithmetic matches the scalar kernels bit for bit.
//!
//! # Available Types
//!
//! - [`i32x8::I32x8`]: 256-bit vector of eight packed 32-bit integers

pub mod add;

pub mod i32x8;

pub mod matmul;
