// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StaticVec`.
//!
//! These errors represent capacity and position conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`StaticVec`](crate::StaticVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would require more live elements than the fixed
    /// capacity `N` allows, including arithmetic overflow on a requested
    /// element count.
    CapacityExceeded,
    /// An index or position was outside the current live range.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::OutOfRange => f.write_str("index out of range"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange);
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::CapacityExceeded.to_string(), "capacity exceeded");
        assert_eq!(Error::OutOfRange.to_string(), "index out of range");
    }
}
