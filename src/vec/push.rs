// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Appending at the back.

// Crate imports
use crate::error::Error;
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends `value` at the back.
    ///
    /// Returns [`Error::CapacityExceeded`] when the vector is full. On
    /// error `value` is dropped; check [`is_full`](StaticVec::is_full)
    /// beforehand when the element must be preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::{Error, StaticVec};
    ///
    /// let mut v: StaticVec<i32, 2> = StaticVec::new();
    /// assert_eq!(v.push(1), Ok(()));
    /// assert_eq!(v.push(2), Ok(()));
    /// assert_eq!(v.push(3), Err(Error::CapacityExceeded));
    /// assert_eq!(v.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == N {
            return Err(Error::CapacityExceeded);
        }
        self.buf[self.len].write(value);
        self.len += 1;
        Ok(())
    }
}
