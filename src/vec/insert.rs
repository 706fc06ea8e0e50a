// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inserting at arbitrary positions.
//!
//! All inserts validate capacity and position before touching the buffer, so
//! a failed insert leaves the vector exactly as it was. Once shifting has
//! begun, a panicking clone or closure leaks the shifted tail rather than
//! risking a double drop; see the crate-level panic safety notes.

// Crate imports
use crate::error::Error;
use crate::vec::StaticVec;

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Inserts `value` at `index`, shifting `self[index..]` one slot right.
    ///
    /// Returns [`Error::CapacityExceeded`] if the vector is full, or
    /// [`Error::OutOfRange`] if `index > len`. `index == len` appends. The
    /// vector is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v: StaticVec<i32, 5> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
    /// v.insert(1, 100).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 100, 2, 3]);
    /// v.insert(4, 200).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 100, 2, 3, 200]);
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.insert_with(index, move || value)
    }

    /// Inserts the element produced by `f` at `index`, shifting the tail
    /// right. The element is constructed directly in its final slot, after
    /// the shift.
    ///
    /// Returns [`Error::CapacityExceeded`] if the vector is full, or
    /// [`Error::OutOfRange`] if `index > len`. The vector is unchanged on
    /// error. If `f` panics, the elements at `self[index..]` are leaked.
    pub fn insert_with<F>(&mut self, index: usize, f: F) -> Result<(), Error>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            return Err(Error::CapacityExceeded);
        }
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        let len = self.len;
        let base = self.buf.as_mut_ptr() as *mut T;
        // Leak safety: while the tail sits in its shifted position the
        // prefix length must exclude it, in case `f` panics.
        self.len = index;
        // SAFETY: `index <= len < N`, so both ranges are in bounds and
        // `ptr::copy` handles the overlap.
        unsafe {
            ptr::copy(base.add(index), base.add(index + 1), len - index);
        }
        let value = f();
        // SAFETY: slot `index` is vacated by the shift above.
        unsafe {
            base.add(index).write(value);
        }
        self.len = len + 1;
        Ok(())
    }

    /// Inserts `count` clones of `value` at `index`, shifting the tail right.
    ///
    /// Returns [`Error::CapacityExceeded`] if `len + count > N`, or
    /// [`Error::OutOfRange`] if `index > len`. The vector is unchanged on
    /// error. If a clone panics, the elements at `self[index..]` are leaked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v: StaticVec<i32, 8> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
    /// v.insert_n(1, 2, &100).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 100, 100, 2, 3]);
    /// ```
    pub fn insert_n(&mut self, index: usize, count: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        let new_len = self
            .len
            .checked_add(count)
            .ok_or(Error::CapacityExceeded)?;
        if new_len > N {
            return Err(Error::CapacityExceeded);
        }
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        if count == 0 {
            return Ok(());
        }
        let len = self.len;
        let base = self.buf.as_mut_ptr() as *mut T;
        // Leak safety for panicking clones.
        self.len = index;
        // SAFETY: the destination range ends at `len + count <= N`.
        unsafe {
            ptr::copy(base.add(index), base.add(index + count), len - index);
        }
        for _ in 0..count {
            let cloned = value.clone();
            // SAFETY: `self.len` walks through the gap `[index, index + count)`.
            unsafe {
                base.add(self.len).write(cloned);
            }
            self.len += 1;
        }
        self.len = new_len;
        Ok(())
    }

    /// Inserts the items of an exact-length iterator at `index`, in order,
    /// shifting the tail right.
    ///
    /// Capacity and position are checked against the reported length before
    /// any shift, so on [`Error::CapacityExceeded`] or [`Error::OutOfRange`]
    /// the vector is unchanged and no items are consumed. If the iterator
    /// yields fewer items than reported, the gap is closed and only the
    /// yielded items are inserted. If `next` panics, the elements at
    /// `self[index..]` are leaked.
    pub fn insert_from_iter<I>(&mut self, index: usize, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = iter.into_iter();
        let count = iter.len();
        let new_len = self
            .len
            .checked_add(count)
            .ok_or(Error::CapacityExceeded)?;
        if new_len > N {
            return Err(Error::CapacityExceeded);
        }
        if index > self.len {
            return Err(Error::OutOfRange);
        }
        if count == 0 {
            return Ok(());
        }
        let len = self.len;
        let base = self.buf.as_mut_ptr() as *mut T;
        self.len = index;
        // SAFETY: the destination range ends at `len + count <= N`.
        unsafe {
            ptr::copy(base.add(index), base.add(index + count), len - index);
        }
        let mut written = 0;
        while written < count {
            let Some(item) = iter.next() else { break };
            // SAFETY: the gap `[index, index + count)` is vacated by the shift.
            unsafe {
                base.add(index + written).write(item);
            }
            written += 1;
            self.len = index + written;
        }
        if written < count {
            // The iterator lied about its length; slide the tail back over
            // the unfilled part of the gap.
            // SAFETY: both ranges lie within `buf[..len + count]`.
            unsafe {
                ptr::copy(base.add(index + count), base.add(index + written), len - index);
            }
        }
        self.len = len + written;
        Ok(())
    }
}
