// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constructors.

// Crate imports
use crate::error::Error;
use crate::vec::StaticVec;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> StaticVec<T, N> {
    /// Creates an empty vector.
    ///
    /// This is a `const fn`; the result can live in a `const` or `static`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let v: StaticVec<i32, 8> = StaticVec::new();
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 8);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Creates a vector holding `count` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let v: StaticVec<i32, 4> = StaticVec::from_elem(3, &7).unwrap();
    /// assert_eq!(v.as_slice(), &[7, 7, 7]);
    /// ```
    pub fn from_elem(count: usize, value: &T) -> Result<Self, Error>
    where
        T: Clone,
    {
        if count > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        while v.len < count {
            let cloned = value.clone();
            v.buf[v.len].write(cloned);
            v.len += 1;
        }
        Ok(v)
    }

    /// Creates a vector holding `count` default-constructed elements.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`.
    pub fn from_default(count: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        if count > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        while v.len < count {
            v.buf[v.len].write(T::default());
            v.len += 1;
        }
        Ok(v)
    }

    /// Creates a vector from an iterator with a known exact length.
    ///
    /// The length is checked up front, so on [`Error::CapacityExceeded`] no
    /// items are consumed. For a truncating alternative use `collect`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::{Error, StaticVec};
    ///
    /// let v: StaticVec<i32, 4> = StaticVec::try_from_iter(0..3).unwrap();
    /// assert_eq!(v.as_slice(), &[0, 1, 2]);
    ///
    /// let too_big = StaticVec::<i32, 4>::try_from_iter(0..9);
    /// assert_eq!(too_big, Err(Error::CapacityExceeded));
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        if iter.len() > N {
            return Err(Error::CapacityExceeded);
        }
        let mut v = Self::new();
        for item in iter {
            // Guards against an iterator misreporting its length.
            if v.len == N {
                break;
            }
            v.buf[v.len].write(item);
            v.len += 1;
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::error::Error;
    use crate::vec::tests::{counter, Tracked};
    use crate::vec::StaticVec;
    use alloc::string::String;

    #[test]
    fn test_new_in_const_context() {
        const V: StaticVec<i32, 3> = StaticVec::new();
        assert!(V.is_empty());
    }

    #[test]
    fn test_from_elem() {
        let v: StaticVec<i32, 4> = StaticVec::from_elem(4, &5).unwrap();
        assert_eq!(v.as_slice(), &[5, 5, 5, 5]);

        let empty: StaticVec<i32, 4> = StaticVec::from_elem(0, &5).unwrap();
        assert!(empty.is_empty());

        assert_eq!(
            StaticVec::<i32, 4>::from_elem(5, &5),
            Err(Error::CapacityExceeded)
        );
    }

    #[test]
    fn test_from_elem_clones_are_dropped() {
        let live = counter();
        let proto = Tracked::new(&live, 1);
        {
            let v: StaticVec<Tracked, 8> = StaticVec::from_elem(3, &proto).unwrap();
            assert_eq!(v.len(), 3);
            assert_eq!(live.get(), 4);
        }
        assert_eq!(live.get(), 1);
        drop(proto);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_from_default() {
        let v: StaticVec<String, 3> = StaticVec::from_default(2).unwrap();
        assert_eq!(v.as_slice(), &[String::new(), String::new()]);

        assert!(StaticVec::<i32, 2>::from_default(3).is_err());
    }

    #[test]
    fn test_try_from_iter() {
        let v: StaticVec<i32, 5> = StaticVec::try_from_iter(1..6).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);

        let e = StaticVec::<i32, 4>::try_from_iter(1..6);
        assert_eq!(e, Err(Error::CapacityExceeded));
    }
}
