// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Removing at arbitrary positions.

// Crate imports
use crate::error::Error;
use crate::vec::StaticVec;

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes and returns the element at `index`, shifting
    /// `self[index + 1..]` one slot left.
    ///
    /// Returns `None` if `index >= len`; the vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v = StaticVec::from([1, 2, 3]);
    /// assert_eq!(v.remove(1), Some(2));
    /// assert_eq!(v.as_slice(), &[1, 3]);
    /// assert_eq!(v.remove(2), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let base = self.buf.as_mut_ptr() as *mut T;
        // SAFETY: `index < len`, so the slot is live; after the read the
        // shift vacates the duplicate and the length update excludes it.
        let value = unsafe { base.add(index).read() };
        // SAFETY: the source range `[index + 1, len)` is in bounds and
        // `ptr::copy` handles the overlap.
        unsafe {
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
        }
        self.len -= 1;
        Some(value)
    }

    /// Like [`remove`](StaticVec::remove), but reports a bad position as
    /// [`Error::OutOfRange`].
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfRange)
    }

    /// Removes and returns the element at `index`, moving the last element
    /// into the hole instead of shifting. `O(1)`, but does not preserve
    /// order.
    ///
    /// Returns `None` if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let base = self.buf.as_mut_ptr() as *mut T;
        // SAFETY: `index < len`, so both `index` and `len - 1` are live.
        // When `index == len - 1` the copy is a self-copy of the slot the
        // length update then excludes.
        let value = unsafe { base.add(index).read() };
        self.len -= 1;
        unsafe {
            ptr::copy(base.add(self.len), base.add(index), 1);
        }
        Some(value)
    }

    /// Like [`swap_remove`](StaticVec::swap_remove), but reports a bad
    /// position as [`Error::OutOfRange`].
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfRange)
    }
}
