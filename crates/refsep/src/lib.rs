//! Rewrites Java-like source so a grammar-driven parser can tell generic
//! method references apart: every `::` qualified by a type-argument list
//! gains the [`MARKER`] immediately before the opening `<`.
//!
//! ```rust
//! use refsep::preprocess;
//!
//! assert_eq!(
//!     preprocess(b"ArrayList<Integer>::new"),
//!     b"ArrayList:REF:<Integer>::new"
//! );
//! ```
//!
//! The scan is byte-level and position-based; it does not tokenize, so
//! string literals and comments receive no special treatment.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod locate;
mod options;
mod point;
mod rewrite;

#[cfg(test)]
mod tests;

pub use error::RewriteError;
pub use locate::{locate, locate_with};
pub use options::{ScanOptions, UnmatchedPolicy};
pub use point::{BracketKind, InsertionPoint, Locations, Unmatched};
pub use rewrite::{MARKER, preprocess, rewrite, strip};
