//! NEON implementations of the integer kernels.
//!
//! Compiled only when the build script detects NEON on the host. The
//! kernels operate on 128-bit vectors of four packed `i32` lanes and are
//! exact: integer SIMD arithmetic matches the scalar kernels bit for bit.
//!
//! # Available Types
//!
//! - [`i32x4::I32x4`]: 128-bit vector of four packed 32-bit integers

pub mod add;

pub mod i32x4;

pub mod matmul;
