// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Removing from the back.

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes and returns the last element, or `None` if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v = StaticVec::from([1, 2, 3]);
    /// assert_eq!(v.pop(), Some(3));
    /// assert_eq!(v.pop(), Some(2));
    /// assert_eq!(v.pop(), Some(1));
    /// assert_eq!(v.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live and is now outside
        // the prefix, so reading it out transfers ownership exactly once.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::tests::{counter, Tracked};
    use crate::vec::StaticVec;

    #[test]
    fn test_pop_returns_in_reverse_order() {
        let mut v: StaticVec<i32, 4> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.pop(), Some(3));
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.len(), 1);
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert!(v.is_empty());
    }

    #[test]
    fn test_pop_transfers_ownership() {
        let live = counter();
        let mut v: StaticVec<Tracked, 2> = StaticVec::new();
        v.push(Tracked::new(&live, 7)).unwrap();

        let popped = v.pop().unwrap();
        assert_eq!(live.get(), 1);
        assert!(popped == 7);
        drop(popped);
        assert_eq!(live.get(), 0);

        drop(v);
        assert_eq!(live.get(), 0);
    }
}
