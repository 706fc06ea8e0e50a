// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `static-vec`
//!
//! A `no_std`, fixed-capacity vector that stores its elements **inline**,
//! with no heap allocation, no reallocation, and no pointer indirection.
//!
//! The core type, [`StaticVec<T, N>`], owns a buffer of `N` uninitialized
//! slots and tracks a logical length `len ∈ 0..=N`. Only the prefix
//! `buf[..len]` ever holds live `T` values; the container constructs and
//! drops elements in place as operations demand.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know the maximum length at compile time.
//! - You want predictable memory layout and allocation-free behavior.
//! - Elements need real ownership semantics (`Drop`, non-`Copy` types are
//!   fully supported).
//!
//! It may not be the best fit if:
//!
//! - You need capacities that grow at runtime; use `Vec`.
//! - `N * size_of::<T>()` is large and you pass vectors by value a lot
//!   (moving a `StaticVec` moves the whole buffer, not just the live prefix).
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`StaticVec::<T, N>::CAPACITY == N`).
//! - Length is a logical prefix: only indices `< len` are initialized.
//! - The backing buffer never moves for the lifetime of the value, so no
//!   operation ever relocates storage, though insert/remove still shift
//!   elements *within* the buffer.
//! - Operations that could exceed the capacity are fallible and return
//!   [`Error::CapacityExceeded`] without modifying the vector (e.g.
//!   [`StaticVec::push`], [`StaticVec::insert`], [`StaticVec::insert_n`],
//!   [`StaticVec::extend_from_slice`], [`StaticVec::try_from_iter`]).
//!   Position errors return [`Error::OutOfRange`].
//! - Only **indexing** panics (`v[i]`, `v[a..b]`, and invalid
//!   [`StaticVec::drain`] ranges), exactly like built-in slices and `Vec`.
//! - Collecting into `StaticVec<T, N>` (via `FromIterator` / `collect`) and
//!   [`Extend`] take at most the first `N` elements and leave the rest of the
//!   iterator unconsumed.
//!
//! ## Panic safety
//!
//! If an element's `Clone` implementation (or a constructor closure passed to
//! [`StaticVec::insert_with`]) panics in the middle of a multi-element
//! operation, the vector stays sound: no double drops, no reads of
//! uninitialized slots. Elements that were already shifted out of the live
//! prefix may leak in that case; the operation makes no stronger rollback
//! guarantee.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `StaticVec<T, N>`, mapping to
//!   a plain sequence of at most `N` elements.
//!
//! ## Example
//!
//! ```rust
//! use static_vec::StaticVec;
//!
//! let mut v: StaticVec<String, 4> = StaticVec::new();
//! v.push("a".to_string()).unwrap();
//! v.push("c".to_string()).unwrap();
//! v.insert(1, "b".to_string()).unwrap();
//! assert_eq!(v.as_slice(), &["a", "b", "c"]);
//!
//! let popped = v.pop();
//! assert_eq!(popped.as_deref(), Some("c"));
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::{Drain, StaticVec};
