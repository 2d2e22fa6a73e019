//! String conversions over the vector engine.
//!
//! A [`ByteVector`] holds a string's UTF-8 bytes as ordinary vector
//! elements, built and read back exclusively through the engine's public
//! contract: [`vector_from_str`] is a chain of appends, and
//! [`string_from_vector`] is an iterate-and-copy into a buffer preallocated
//! to the byte count. This crate adds no invariants of its own.
//!
//! ```
//! use sprout_text::{string_from_vector, vector_from_str};
//!
//! let hello = vector_from_str("Hello ");
//! let world = vector_from_str("World!");
//! let both = hello.concat(&world);
//! assert_eq!(string_from_vector(&both).unwrap(), "Hello World!");
//! assert_eq!(string_from_vector(&both.slice(3, 7)).unwrap(), "lo W");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;

use sprout_core::Vector;

/// A vector of UTF-8 bytes.
pub type ByteVector = Vector<u8>;

/// Errors that can occur when turning a byte vector back into a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextError {
    /// The vector's bytes are not valid UTF-8.
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix, in bytes.
        valid_up_to: usize,
    },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUtf8 { valid_up_to } => {
                write!(
                    f,
                    "vector is not valid UTF-8: valid prefix is {valid_up_to} bytes"
                )
            }
        }
    }
}

impl Error for TextError {}

/// Build a [`ByteVector`] from a string by appending its bytes in order.
pub fn vector_from_str(s: &str) -> ByteVector {
    let mut v = ByteVector::new();
    for byte in s.bytes() {
        v = v.append(byte);
    }
    v
}

/// Copy a [`ByteVector`]'s elements into a fresh [`String`].
///
/// The output buffer is preallocated to exactly `v.len()` bytes and filled
/// by iterating the vector. Returns [`TextError::InvalidUtf8`] if the bytes
/// do not form valid UTF-8.
pub fn string_from_vector(v: &ByteVector) -> Result<String, TextError> {
    let mut bytes = Vec::with_capacity(v.len());
    for &byte in v.iter() {
        bytes.push(byte);
    }
    String::from_utf8(bytes).map_err(|e| TextError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
