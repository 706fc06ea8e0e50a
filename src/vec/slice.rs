// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slice and raw pointer views over the live prefix.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::mem::MaybeUninit;
use core::slice;

impl<T, const N: usize> StaticVec<T, N> {
    /// Returns the live elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[..len]` is initialized by invariant.
        unsafe { slice::from_raw_parts(self.buf.as_ptr() as *const T, self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `buf[..len]` is initialized by invariant, and `&mut self`
        // guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr() as *mut T, self.len) }
    }

    /// Returns a raw pointer to the start of the storage block.
    ///
    /// Only the first `len` elements are initialized. The pointer stays
    /// valid as long as the vector is neither moved nor mutated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    /// Returns a mutable raw pointer to the start of the storage block.
    ///
    /// Only the first `len` elements are initialized. Writing past `len`
    /// without a matching length update leaves the extra elements invisible
    /// and leaked.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    /// Returns the uninitialized tail `buf[len..]` for manual initialization.
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.buf[self.len..]
    }
}
