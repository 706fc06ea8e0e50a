// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions from arrays and slices.

// Crate imports
use crate::error::Error;
use crate::vec::StaticVec;

// Core imports
use core::mem::{self, MaybeUninit};

impl<T, const N: usize> From<[T; N]> for StaticVec<T, N> {
    /// Converts a full array into a vector with `len == N`.
    ///
    /// The elements are moved; nothing is cloned or dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let v = StaticVec::from([1, 2, 3]);
    /// assert!(v.is_full());
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// ```
    fn from(array: [T; N]) -> Self {
        let array = MaybeUninit::new(array);
        // SAFETY: `[T; N]` and `[MaybeUninit<T>; N]` have identical layout,
        // and ownership of the elements transfers into `buf`.
        let buf = unsafe { mem::transmute_copy::<MaybeUninit<[T; N]>, [MaybeUninit<T>; N]>(&array) };
        Self { buf, len: N }
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;

    /// Clones a slice into a vector.
    ///
    /// Returns [`Error::CapacityExceeded`] if the slice is longer than `N`.
    fn try_from(slice: &[T]) -> Result<Self, Error> {
        if slice.len() > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        for item in slice {
            v.buf[v.len].write(item.clone());
            v.len += 1;
        }
        Ok(v)
    }
}
