//! Growable-vector engine with power-of-two capacity doubling.
//!
//! One data structure, [`Vector`], with five facets: construct, append,
//! concatenate, slice, and iterate. Capacity is always a power of two at
//! least as large as the element count, grown by repeated doubling so a
//! chain of `n` appends costs O(n) in total copies.
//!
//! # Ownership discipline
//!
//! Growth is expressed through values, not mutation. [`Vector::append`]
//! consumes its input and returns the grown vector; after a reallocation the
//! old handle no longer exists, so it cannot dangle. [`Vector::concat`] and
//! [`Vector::slice`] copy into fresh allocations and borrow their inputs,
//! which stay independently usable. Each vector value owns exactly one
//! buffer and releases it on drop.
//!
//! # Safety
//!
//! `unsafe` code is confined to the private `raw` module, a handful of
//! primitives over the owned allocation, each with a `// SAFETY:` comment.
//! Everything above that layer is safe Rust.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod iter;
mod raw;
pub mod vector;

pub use iter::Iter;
pub use vector::Vector;
