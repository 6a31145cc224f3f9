//! CPU-architecture-specific kernels.
//!
//! The build script enables at most one of these cfg flags per build, so
//! exactly one architecture module (or none, for the scalar fallback) is
//! compiled in. The dispatched entry points in [`crate::add`] and
//! [`crate::matmul`] pick the compiled kernel automatically.

#[cfg(avx2)]
pub mod avx2;

#[cfg(neon)]
pub mod neon;

pub mod traits;

pub use traits::{Alignment, SimdAdd, SimdLoad, SimdStore};
