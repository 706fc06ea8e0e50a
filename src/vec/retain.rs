// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-place filtering.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Keeps only the elements for which `f` returns `true`, preserving
    /// order. Rejected elements are dropped in place.
    ///
    /// If `f` or a rejected element's destructor panics, the elements not
    /// yet visited are leaked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v = StaticVec::from([1, 2, 3, 4, 5, 6]);
    /// v.retain(|x| x % 2 == 0);
    /// assert_eq!(v.as_slice(), &[2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        let base = self.buf.as_mut_ptr() as *mut T;
        // Leak safety: nothing is live while elements sit compacted out of
        // order, in case `f` panics.
        self.len = 0;
        let mut write = 0;
        for read in 0..len {
            // SAFETY: `read < len`, the slot was live and is visited once.
            let keep = unsafe { f(&*base.add(read)) };
            if keep {
                if write != read {
                    // SAFETY: slot `write` was already read out or rejected.
                    unsafe {
                        ptr::copy_nonoverlapping(base.add(read), base.add(write), 1);
                    }
                }
                write += 1;
                self.len = write;
            } else {
                // SAFETY: dropping a live element exactly once.
                unsafe {
                    ptr::drop_in_place(base.add(read));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::tests::{counter, Tracked};
    use crate::vec::StaticVec;

    #[test]
    fn test_retain_keeps_matching_in_order() {
        let mut v = StaticVec::from([1, 2, 3, 4, 5, 6]);
        v.retain(|x| x % 2 == 0);
        assert_eq!(v.as_slice(), &[2, 4, 6]);

        v.retain(|_| true);
        assert_eq!(v.as_slice(), &[2, 4, 6]);

        v.retain(|_| false);
        assert!(v.is_empty());
    }

    #[test]
    fn test_retain_on_empty() {
        let mut v: StaticVec<i32, 4> = StaticVec::new();
        v.retain(|_| unreachable!());
        assert!(v.is_empty());
    }

    #[test]
    fn test_retain_drops_rejected_elements() {
        let live = counter();
        let mut v: StaticVec<Tracked, 8> = StaticVec::new();
        for i in 0..6 {
            v.push(Tracked::new(&live, i)).unwrap();
        }

        v.retain(|t| t.value >= 3);
        assert_eq!(v.len(), 3);
        assert!(v[0] == 3 && v[1] == 4 && v[2] == 5);
        assert_eq!(live.get(), 3);

        drop(v);
        assert_eq!(live.get(), 0);
    }
}
