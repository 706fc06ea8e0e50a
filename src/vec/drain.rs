// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Range removal via a draining iterator.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Bound, Range, RangeBounds};
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes the elements in `range` and returns an iterator over them.
    ///
    /// The range resolves against the current length; when the iterator is
    /// dropped, any unyielded elements in the range are dropped and the tail
    /// is shifted left to close the gap. Leaking the iterator (without
    /// dropping it) leaks the range *and* the tail, but never breaks the
    /// vector's invariants.
    ///
    /// # Panics
    ///
    /// Panics if the range resolves with `start > end` or `end > len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v = StaticVec::from([1, 2, 3, 4, 5]);
    /// let drained: StaticVec<i32, 5> = v.drain(1..4).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3, 4]);
    /// assert_eq!(v.as_slice(), &[1, 5]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i + 1,
            Bound::Excluded(&i) => i,
            Bound::Unbounded => self.len,
        };
        assert!(
            start <= end && end <= self.len,
            "range {start}..{end} out of bounds for length {}",
            self.len
        );
        let original_len = self.len;
        // Leak safety: the range and the tail are outside the live prefix
        // until `Drain::drop` restores them.
        self.len = start;
        Drain {
            vec: self,
            unread: start..end,
            removed: start..end,
            original_len,
        }
    }
}

/// A draining iterator over a range of a [`StaticVec`].
///
/// Returned by [`StaticVec::drain`]. Yields the removed elements front to
/// back; on drop it finishes the removal and closes the gap.
pub struct Drain<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    /// Indices in the removed range not yet yielded.
    unread: Range<usize>,
    /// The full removed range, fixed at construction.
    removed: Range<usize>,
    original_len: usize,
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let i = self.unread.next()?;
        // SAFETY: `i` is inside the removed range, which held live elements
        // at construction; each index is read out exactly once.
        Some(unsafe { self.vec.buf[i].assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.unread.len();
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        let i = self.unread.next_back()?;
        // SAFETY: as in `next`.
        Some(unsafe { self.vec.buf[i].assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T, const N: usize> Drop for Drain<'_, T, N> {
    fn drop(&mut self) {
        let base = self.vec.buf.as_mut_ptr() as *mut T;
        // Drop whatever the caller did not consume.
        // SAFETY: `unread` indexes live, unyielded elements of the removed
        // range.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(self.unread.start),
                self.unread.len(),
            ));
        }
        // Close the gap: move the tail `[removed.end, original_len)` down to
        // `removed.start`.
        let tail_len = self.original_len - self.removed.end;
        // SAFETY: both ranges are within `buf[..original_len]` and overlap
        // is handled by `ptr::copy`.
        unsafe {
            ptr::copy(
                base.add(self.removed.end),
                base.add(self.removed.start),
                tail_len,
            );
        }
        self.vec.len = self.removed.start + tail_len;
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Drain<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drain")
            .field("remaining", &self.unread.len())
            .finish()
    }
}
