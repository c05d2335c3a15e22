//! Results produced by scanning a source buffer.
//!
//! [`Locations`] is the output of [`locate`](crate::locate): the marker
//! insertion sites that were resolved, in the order their `::` triggers were
//! encountered, together with any candidates whose bracket walk ran off the
//! start of the buffer.
//!
//! # Examples
//!
//! ```
//! use refsep::locate;
//!
//! let found = locate(b"Set<K>::of");
//! assert_eq!(found.points().len(), 1);
//! assert_eq!(found.points()[0].offset, 3);
//! assert_eq!(found.unmatched(), &[]);
//! ```

use alloc::vec::Vec;

/// The bracket family a backward walk was looking for when it ran out of
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum BracketKind {
    /// A `<` closing a type-argument list.
    Angle,
    /// A `[` closing an array dimension.
    Square,
}

/// A resolved insertion site for the reference marker.
///
/// `offset` is the index of the `<` opening the type-argument list that
/// qualifies a method reference; the marker belongs immediately before it.
/// `reference` is the index of the first `:` of the `::` operator that
/// triggered the backward walk, and always lies to the right of `offset`.
///
/// The derived ordering compares `offset` first, so a list of points can be
/// sorted straight into splice order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct InsertionPoint {
    /// Index of the `<` byte the marker goes in front of.
    pub offset: usize,
    /// Index of the first byte of the triggering `::`.
    pub reference: usize,
}

/// A `::` candidate whose qualifier walk reached the start of the buffer
/// without finding the opening bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Unmatched {
    /// Index of the first byte of the candidate `::`.
    pub reference: usize,
    /// Which bracket family never opened.
    pub kind: BracketKind,
}

/// Everything a scan found: insertion points plus unmatched candidates.
///
/// Points are kept in trigger order (the order their `::` operators appear
/// in the buffer), which is *not* guaranteed to be ascending by `offset`
/// when a qualifier's type arguments themselves contain a method reference.
/// [`rewrite`](crate::rewrite) sorts before splicing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Locations {
    pub(crate) points: Vec<InsertionPoint>,
    pub(crate) unmatched: Vec<Unmatched>,
}

impl Locations {
    /// Resolved insertion sites, in trigger order.
    #[must_use]
    pub fn points(&self) -> &[InsertionPoint] {
        &self.points
    }

    /// Candidates that failed bracket resolution, in trigger order.
    #[must_use]
    pub fn unmatched(&self) -> &[Unmatched] {
        &self.unmatched
    }

    /// `true` when the scan resolved every candidate it examined.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty()
    }

    /// Consumes the result, yielding the insertion sites.
    #[must_use]
    pub fn into_points(self) -> Vec<InsertionPoint> {
        self.points
    }
}
