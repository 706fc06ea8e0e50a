// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk appends: `Extend`, `FromIterator`, and the fallible variants.

// Crate imports
use crate::error::Error;
use crate::vec::StaticVec;

impl<T, const N: usize> Extend<T> for StaticVec<T, N> {
    /// Appends items until the vector is full, then stops.
    ///
    /// This is the truncating append: at most `spare_capacity` items are
    /// consumed from the iterator, and anything beyond that is left in it.
    /// Use [`try_extend_from_iter`](StaticVec::try_extend_from_iter) for an
    /// all-or-nothing append.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let spare = N - self.len;
        for item in iter.into_iter().take(spare) {
            self.buf[self.len].write(item);
            self.len += 1;
        }
    }
}

impl<T, const N: usize> FromIterator<T> for StaticVec<T, N> {
    /// Collects at most `N` items; the rest are left in the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let v: StaticVec<i32, 3> = (0..100).collect();
    /// assert_eq!(v.as_slice(), &[0, 1, 2]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends clones of every element of `slice`.
    ///
    /// Returns [`Error::CapacityExceeded`] if the slice does not fit; the
    /// vector is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v: StaticVec<i32, 5> = StaticVec::new();
    /// v.extend_from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// assert!(v.extend_from_slice(&[4, 5, 6]).is_err());
    /// ```
    pub fn extend_from_slice(&mut self, slice: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if slice.len() > N - self.len {
            return Err(Error::CapacityExceeded);
        }
        for item in slice {
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }
        Ok(())
    }

    /// Appends the items of an exact-length iterator.
    ///
    /// The reported length is checked first, so on
    /// [`Error::CapacityExceeded`] the vector is unchanged and no items are
    /// consumed.
    pub fn try_extend_from_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        if iter.len() > N - self.len {
            return Err(Error::CapacityExceeded);
        }
        for item in iter {
            // Guards against an iterator misreporting its length.
            if self.len == N {
                break;
            }
            self.buf[self.len].write(item);
            self.len += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::error::Error;
    use crate::vec::StaticVec;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn test_extend_stops_at_capacity() {
        let mut v: StaticVec<i32, 4> = StaticVec::new();
        v.extend(0..2);
        assert_eq!(v.as_slice(), &[0, 1]);

        let mut items = (10..20).peekable();
        v.extend(items.by_ref());
        assert_eq!(v.as_slice(), &[0, 1, 10, 11]);
        // Only the items that fit were consumed.
        assert_eq!(items.peek(), Some(&12));
    }

    #[test]
    fn test_extend_on_full_vector_consumes_nothing() {
        let mut v: StaticVec<i32, 2> = StaticVec::from([1, 2]);
        let mut items = (3..6).peekable();
        v.extend(items.by_ref());
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(items.peek(), Some(&3));
    }

    #[test]
    fn test_from_iterator_truncates() {
        let v: StaticVec<i32, 4> = (0..2).collect();
        assert_eq!(v.as_slice(), &[0, 1]);

        let v: StaticVec<i32, 4> = (0..100).collect();
        assert_eq!(v.as_slice(), &[0, 1, 2, 3]);

        let empty: StaticVec<i32, 4> = core::iter::empty().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_extend_from_slice() {
        let mut v: StaticVec<i32, 5> = StaticVec::new();
        v.extend_from_slice(&[1, 2]).unwrap();
        v.extend_from_slice(&[3]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        assert_eq!(v.extend_from_slice(&[4, 5, 6]), Err(Error::CapacityExceeded));
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        v.extend_from_slice(&[]).unwrap();
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_extend_from_slice_clones() {
        let strings = ["a".to_string(), "b".to_string()];
        let mut v: StaticVec<alloc::string::String, 4> = StaticVec::new();
        v.extend_from_slice(&strings).unwrap();
        assert_eq!(v.as_slice(), &strings);
        // The source is untouched.
        assert_eq!(strings[0], "a");
    }

    #[test]
    fn test_try_extend_from_iter() {
        let mut v: StaticVec<i32, 4> = StaticVec::new();
        v.try_extend_from_iter(0..3).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 2]);

        let src: Vec<i32> = (10..14).collect();
        let mut items = src.into_iter();
        assert_eq!(
            v.try_extend_from_iter(items.by_ref()),
            Err(Error::CapacityExceeded)
        );
        assert_eq!(v.as_slice(), &[0, 1, 2]);
        // Nothing was consumed on error.
        assert_eq!(items.len(), 4);

        v.try_extend_from_iter(core::iter::once(9)).unwrap();
        assert!(v.is_full());
    }
}
