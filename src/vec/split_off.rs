// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splitting off the tail into a new vector.

// Crate imports
use crate::error::Error;
use crate::vec::StaticVec;

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Splits the vector at `at`, returning a new vector holding
    /// `self[at..]` and leaving `self[..at]` behind.
    ///
    /// The tail elements are moved, not cloned. Returns
    /// [`Error::OutOfRange`] if `at > len`; the vector is unchanged on
    /// error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v = StaticVec::from([1, 2, 3, 4]);
    /// let tail = v.split_off(1).unwrap();
    /// assert_eq!(v.as_slice(), &[1]);
    /// assert_eq!(tail.as_slice(), &[2, 3, 4]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        if at > self.len {
            return Err(Error::OutOfRange);
        }
        let tail_len = self.len - at;
        let mut tail = Self::new();
        // SAFETY: `[at, len)` is live in `self` and the destination is the
        // disjoint buffer of `tail`; the length updates transfer ownership.
        unsafe {
            ptr::copy_nonoverlapping(
                (self.buf.as_ptr() as *const T).add(at),
                tail.buf.as_mut_ptr() as *mut T,
                tail_len,
            );
        }
        self.len = at;
        tail.len = tail_len;
        Ok(tail)
    }
}
