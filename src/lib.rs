//! Give a type a deep copy, by serializing it and reading it back
//!
//! ```
//! use deep_copy::deep_copy;
//!
//! #[deep_copy]
//! #[derive(Debug, PartialEq)]
//! pub struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let p = Point { x: 3, y: 4 };
//! let q = p.deep_copy();
//! assert_eq!(q, Point { x: 3, y: 4 });
//! assert!(!std::ptr::eq(&p, &q));
//! ```
//!
//! ## What `#[deep_copy]` does
//!
//!  1. Makes sure the type derives `Serialize` and `Deserialize`,
//!     adding whichever of the two derives is missing.
//!     Derives you already wrote (with your own `serde`) are left alone.
//!
//!  2. Adds an inherent method
//!     ```rust,ignore
//!     pub fn deep_copy(&self) -> TYPE
//!     ```
//!     which writes `self` into an in-memory byte buffer
//!     and decodes a brand new value from it.
//!
//! Because the new value is rebuilt from bytes, it shares nothing with the
//! original: `Vec`s, `Box`es, `String`s, and (with the default `rc`
//! feature) `Rc`/`Arc` contents are all fresh allocations.
//! Every field therefore has to be serializable.
//!
//! ## Where it can be used
//!
//! On non-generic `struct`s and `enum`s.
//! Applying it to a `trait` or a `union` is an error:
//! there is no instance state there to copy.
//! Generic declarations are rejected too.
//!
//! Write `#[deep_copy]` above any `#[derive]` on the type.
//! An attribute macro only sees the attributes below it, so derives
//! written above it are invisible to it, and it would add `Serialize` and
//! `Deserialize` a second time (error E0119, conflicting implementations).
//!
//! If the declaration already has a zero-argument `deep_copy`
//! (for example because the attribute was written twice),
//! nothing further is added.
//!
//! ## Failures
//!
//! `deep_copy` does not return a `Result`.
//! If the round trip fails, it panics with a [`CopyFailure`] message.
//! That only happens when some value's own `Serialize` or `Deserialize`
//! impl reports an error.
//!
//! ## Options
//!
//!  * `#[deep_copy(dbg)]`: print what the transformation did,
//!    and the code it generated, to the compiler's stderr.
//!  * `#[deep_copy(crate = path::to::deep_copy)]`: where generated code
//!    finds this crate, for when it has been renamed or re-exported.

// This is the "library" crate.
//
// A proc macro crate cannot contain anything but proc macros, so the
// runtime half of the copy (the streams generated code calls) lives here,
// next to the reexport of the attribute.

// Within this package (doctests included) generated code says
// `::deep_copy::...`, so that path must resolve here too.
extern crate self as deep_copy;

mod stream;

pub use deep_copy_macros::deep_copy;

pub use stream::CopyFailure;

/// Not a public API; used by generated code
#[doc(hidden)]
pub mod __private {
    pub use crate::stream::{ByteSink, ByteSource, ObjectReader, ObjectWriter};
    pub use serde;
}
