// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StaticVec`](crate::StaticVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&StaticVec` and `&mut StaticVec` iterate as slices.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::fmt;
use core::iter::FusedIterator;

/// Owned iterator returned by `StaticVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded by the time
/// the iterator is dropped are dropped with it.
pub struct IntoIter<T, const N: usize> {
    vec: StaticVec<T, N>,
    front: usize,
    back: usize, // exclusive
}

// The iterator owns the elements in `buf[front..back]`; the vector's own
// `len` is zeroed at construction so its `Drop` never touches them.
// `nth`/`nth_back` are deliberately left to the defaults: skipped elements
// must still be read out and dropped.

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` is inside `[front, back)`, which holds elements
            // owned by the iterator; each index is read out exactly once.
            Some(unsafe { self.vec.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`.
            Some(unsafe { self.vec.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        // SAFETY: `[front, back)` holds the unyielded elements and is
        // dropped exactly once; the vector's `len` is already zero.
        unsafe {
            core::ptr::drop_in_place(core::ptr::slice_from_raw_parts_mut(
                (self.vec.buf.as_mut_ptr() as *mut T).add(self.front),
                self.back - self.front,
            ));
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &(self.back - self.front))
            .finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for StaticVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // Ownership of the live prefix moves into the iterator.
        self.len = 0;
        IntoIter {
            front: 0,
            back,
            vec: self,
        }
    }
}
