//! Tests for deep-copy
//!
//! Internal, unpublished crate.

pub use std::path::PathBuf;

pub mod tutils;
pub use tutils::*;

// Test cases that we compile and run

#[cfg(test)]
mod capability;
#[cfg(test)]
mod failure;
#[cfg(test)]
mod point;

// trybuild.rs and macrotest.rs are handled separately, since they
// compile whole programs and we would rather run them in their own process.
