// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StaticVec` type and its inherent API.
//!
//! `StaticVec<T, N>` is a fixed-capacity vector storing its elements inline
//! in a buffer of `N` uninitialized slots. Elements are constructed and
//! dropped in place; the logical length tracks how many leading slots are
//! live. Methods generally mirror slice/`Vec` semantics, with explicit
//! capacity checks and fallible variants where appropriate.
//!
//! No heap allocations are performed.

// Invariants maintained by every public operation:
// - `0 <= len <= N` always holds.
// - Elements in `buf[..len]` are initialized `T` values.
// - Elements in `buf[len..N]` are logically uninitialized and must never be
//   read as `T` or dropped.
// - `len` is lowered *before* any step that could panic with the prefix in a
//   partial state, so `Drop` never touches a non-live slot.

mod drain;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod retain;
mod slice;
mod split_off;

pub use drain::Drain;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    ptr,
};

/// A fixed-capacity vector with inline storage.
///
/// `StaticVec<T, N>` owns a buffer of `N` slots, each sized and aligned for
/// one `T`, and tracks a logical length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`);
/// - the buffer is stored inline (typically on the stack);
/// - only the prefix `buf[..len]` holds live, fully-constructed elements;
/// - elements are dropped exactly once, when removed or when the vector is
///   dropped;
/// - no heap allocations are performed, and the buffer never relocates for
///   the lifetime of the value.
///
/// # Layout and invariants
///
/// Internally, `StaticVec<T, N>` maintains:
///
/// - a backing buffer `[MaybeUninit<T>; N]`; and
/// - a logical length `len` with `0 <= len <= N`.
///
/// Only the prefix `buf[..len]` is considered initialized and visible through
/// safe APIs. Methods such as [`as_slice`](StaticVec::as_slice),
/// [`as_mut_slice`](StaticVec::as_mut_slice), indexing, and iteration are all
/// restricted to this prefix. Insert and remove shift elements *within* the
/// buffer, so references and raw pointers into the vector are invalidated by
/// any mutation; the borrow checker enforces this statically.
///
/// # Complexity characteristics
///
/// - The type size is roughly `N * size_of::<T>() + O(1)`.
/// - Moving a `StaticVec<T, N>` moves the entire backing buffer. This is
///   `O(N)` in the capacity, *not* in `len`, so pass it by reference in hot
///   code.
/// - `push`/`pop` are `O(1)`; `insert`/`remove` are `O(len)` in the number of
///   shifted elements; `clear` is `O(len)` for types with drop glue and free
///   otherwise (the compiler elides the loop).
///
/// # Fallible operations
///
/// Capacity-sensitive operations return [`Error::CapacityExceeded`] and leave
/// the vector unchanged when the result would not fit:
///
/// - [`push`](StaticVec::push)
/// - [`insert`](StaticVec::insert) / [`insert_with`](StaticVec::insert_with)
/// - [`insert_n`](StaticVec::insert_n) /
///   [`insert_from_iter`](StaticVec::insert_from_iter)
/// - [`extend_from_slice`](StaticVec::extend_from_slice) /
///   [`try_extend_from_iter`](StaticVec::try_extend_from_iter)
/// - [`resize`](StaticVec::resize)
/// - [`from_elem`](StaticVec::from_elem) /
///   [`from_default`](StaticVec::from_default) /
///   [`try_from_iter`](StaticVec::try_from_iter) / [`TryFrom<&[T]>`](TryFrom)
///
/// Position-sensitive operations return [`Error::OutOfRange`] instead of
/// invoking undefined behavior: checked access via
/// [`try_get`](StaticVec::try_get), removal via
/// [`try_remove`](StaticVec::try_remove), and the insert family when the
/// position is past the end.
///
/// [`Extend`] and [`FromIterator`] are the truncating exceptions: they take
/// what fits and stop consuming the iterator, matching `collect` ergonomics.
///
/// # Examples
///
/// ```rust
/// use static_vec::StaticVec;
///
/// let mut v: StaticVec<i32, 4> = StaticVec::new();
/// v.push(1).unwrap();
/// v.push(3).unwrap();
/// v.insert(1, 2).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.remove(0), Some(1));
/// assert_eq!(v.as_slice(), &[2, 3]);
/// ```
pub struct StaticVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StaticVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Checked access: returns the element at `i`, or [`Error::OutOfRange`]
    /// when `i >= len`.
    #[inline]
    pub fn try_get(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::OutOfRange)
    }

    /// Checked mutable access: returns the element at `i`, or
    /// [`Error::OutOfRange`] when `i >= len`.
    #[inline]
    pub fn try_get_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::OutOfRange)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Drops every live element in index order and sets `len = 0`.
    ///
    /// For element types without drop glue this compiles down to the length
    /// store alone.
    #[inline]
    pub fn clear(&mut self) {
        let len = self.len;
        // Lower `len` first: if a destructor panics, `Drop` must not revisit
        // the prefix.
        self.len = 0;
        // SAFETY: `buf[..len]` was the live prefix by invariant; each element
        // is dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr() as *mut T,
                len,
            ));
        }
    }

    /// Shrinks to `new_len` if `new_len < len`, dropping the tail; otherwise
    /// a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        self.len = new_len;
        // SAFETY: the dropped range `buf[new_len..new_len + tail_len]` was
        // within the live prefix before `len` was lowered.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                (self.buf.as_mut_ptr() as *mut T).add(new_len),
                tail_len,
            ));
        }
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > N`; the vector is
    /// unchanged on error.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > N {
            return Err(Error::CapacityExceeded);
        }
        while self.len < new_len {
            let cloned = value.clone();
            self.buf[self.len].write(cloned);
            self.len += 1;
        }
        Ok(())
    }
}

impl<T, const N: usize> Drop for StaticVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Default for StaticVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        let mut v = Self::new();
        for item in self.as_slice() {
            v.buf[v.len].write(item.clone());
            v.len += 1;
        }
        v
    }

    fn clone_from(&mut self, source: &Self) {
        // Drop the current contents first, then clone in order.
        self.clear();
        for item in source.as_slice() {
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}
impl<T: Ord, const N: usize> Ord for StaticVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for StaticVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StaticVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for StaticVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StaticVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
