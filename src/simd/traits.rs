//! Traits shared by the per-architecture vector types.

/// Pointer-alignment probe for a vector type's preferred load/store width.
pub trait Alignment<T> {
    fn is_aligned(ptr: *const T) -> bool;
}

/// Loading lanes from raw memory.
pub trait SimdLoad<T>: Sized {
    type Output;

    /// Loads exactly one full vector, picking the aligned or unaligned
    /// instruction based on the pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must not be null and must point to at least `size` valid
    /// elements, where `size` equals the lane count.
    unsafe fn load(ptr: *const T, size: usize) -> Self::Output;

    /// Loads one full vector from aligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to the vector width and point to a full
    /// vector of valid elements.
    unsafe fn load_aligned(ptr: *const T) -> Self::Output;

    /// Loads one full vector from memory of any alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a full vector of valid elements.
    unsafe fn load_unaligned(ptr: *const T) -> Self::Output;

    /// Loads fewer lanes than a full vector; the rest are zeroed.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `size` valid elements and `size` must
    /// be strictly less than the lane count.
    unsafe fn load_partial(ptr: *const T, size: usize) -> Self::Output;
}

/// Storing lanes to raw memory.
pub trait SimdStore<T> {
    /// Stores the vector's valid lanes, picking partial, aligned, or
    /// unaligned stores based on the element count and pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of the vector's element count.
    unsafe fn store_at(&self, ptr: *mut T);

    /// Stores one full vector to aligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to the vector width and valid for writes of a
    /// full vector.
    unsafe fn store_aligned_at(&self, ptr: *mut T);

    /// Stores one full vector to memory of any alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of a full vector.
    unsafe fn store_unaligned_at(&self, ptr: *mut T);

    /// Stores only the valid lanes of a partial vector.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of the vector's element count, which
    /// must be strictly less than the lane count.
    unsafe fn store_at_partial(&self, ptr: *mut T);
}

/// Element-wise addition over integer slices, one method per code path.
pub trait SimdAdd<Rhs = Self> {
    type Output;

    fn simd_add(self, rhs: Rhs) -> Self::Output;
    fn scalar_add(self, rhs: Rhs) -> Self::Output;
}
