// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`StaticVec`](crate::StaticVec).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence up to capacity `N`; longer input is
//!   an error, not a truncation.
//!
//! Elements deserialize straight into the uninitialized buffer, so no
//! `Default` bound is needed.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize, const N: usize> Serialize for StaticVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(core::marker::PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = StaticVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = StaticVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for StaticVec<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(core::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StaticVec;
    use alloc::string::{String, ToString};

    #[test]
    fn test_serde_roundtrip_json() {
        let v: StaticVec<i32, 5> = StaticVec::try_from(&[1, 2, 3][..]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: StaticVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<StaticVec<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("too many elements") || msg.contains("capacity 3"),
            "msg: {msg}"
        );
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: StaticVec<i32, 4> = StaticVec::default();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: StaticVec<i32, 4> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_deserialize_non_default_owned_type() {
        let json = r#"["a","b"]"#;
        let v: StaticVec<String, 4> = serde_json::from_str(json).unwrap();
        assert_eq!(v.as_slice(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_vecvisitor_expecting_message() {
        // Try to deserialize from a JSON object instead of an array/sequence.
        let err = serde_json::from_str::<StaticVec<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();

        // This should include the string from VecVisitor::expecting.
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }
}
