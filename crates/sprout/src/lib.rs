//! Sprout: growable vectors with amortized doubling and move-based growth.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Sprout sub-crates. For most users, adding `sprout` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sprout::prelude::*;
//!
//! // Growth consumes the old handle and returns the new vector, so a
//! // reallocated buffer can never be reached through a stale binding.
//! let irrationals = Vector::new().append(2.78).append(3.14);
//! assert_eq!(irrationals.len(), 2);
//! assert_eq!(irrationals.capacity(), 2);
//! assert_eq!(irrationals[1], 3.14);
//!
//! for (i, x) in irrationals.enumerate() {
//!     assert_eq!(irrationals[i], *x);
//! }
//!
//! // Concat and slice copy into fresh buffers and borrow their inputs.
//! let hello = vector_from_str("Hello ");
//! let world = vector_from_str("World!");
//! let both = hello.concat(&world);
//! assert_eq!(string_from_vector(&both).unwrap(), "Hello World!");
//! assert_eq!(string_from_vector(&both.slice(3, 7)).unwrap(), "lo W");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`engine`] | `sprout-core` | [`Vector`], iteration, the growth policy |
//! | [`text`] | `sprout-text` | Byte-vector/string conversions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The vector engine (`sprout-core`).
///
/// Most users only need [`engine::Vector`] from this module — it is also
/// available in the [`prelude`].
pub use sprout_core as engine;

/// Byte-vector/string conversions (`sprout-text`).
///
/// [`text::vector_from_str`] and [`text::string_from_vector`] are thin
/// clients of the engine's public contract.
pub use sprout_text as text;

pub use sprout_core::{Iter, Vector};
pub use sprout_text::{string_from_vector, vector_from_str, ByteVector, TextError};

/// Common imports for typical Sprout usage.
///
/// ```rust
/// use sprout::prelude::*;
/// ```
pub mod prelude {
    pub use sprout_core::Vector;
    pub use sprout_text::{string_from_vector, vector_from_str, ByteVector};
}
