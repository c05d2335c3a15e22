//! Splicing the reference marker into source text.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::{error::RewriteError, locate::locate, point::InsertionPoint};

/// The marker spliced in front of a qualifying type-argument list: exactly
/// five bytes, `:REF:`.
///
/// The downstream grammar recognizes this token where an ordinary
/// identifier cannot appear, so marked source stays unambiguous.
pub const MARKER: &[u8; 5] = b":REF:";

/// Copies `text`, inserting the marker before each point in `sorted`.
/// Offsets must be ascending and in bounds.
fn splice(text: &[u8], sorted: &[InsertionPoint]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + MARKER.len() * sorted.len());
    let mut copied = 0;
    for point in sorted {
        out.extend_from_slice(&text[copied..point.offset]);
        out.extend_from_slice(MARKER);
        copied = point.offset;
    }
    out.extend_from_slice(&text[copied..]);
    out
}

/// Returns a copy of `text` with the marker inserted immediately before
/// each point's `offset`.
///
/// Existing bytes are never modified or reordered, so the output is always
/// exactly `MARKER.len()` bytes longer per point. The points may arrive in
/// any order; they are sorted by offset before splicing, since trigger
/// order is not offset order when type arguments nest. A duplicated point
/// splices one marker per occurrence.
///
/// # Errors
///
/// [`RewriteError::OffsetOutOfBounds`] when any point does not index into
/// `text`; nothing is written in that case.
///
/// # Examples
///
/// ```rust
/// use refsep::{locate, rewrite};
///
/// let text = b"Function<T, R>::apply";
/// let found = locate(text);
/// let out = rewrite(text, found.points())?;
/// assert_eq!(out, b"Function:REF:<T, R>::apply");
/// # Ok::<(), refsep::RewriteError>(())
/// ```
pub fn rewrite(text: &[u8], points: &[InsertionPoint]) -> Result<Vec<u8>, RewriteError> {
    for point in points {
        if point.offset >= text.len() {
            return Err(RewriteError::OffsetOutOfBounds {
                offset: point.offset,
                len: text.len(),
            });
        }
    }
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    Ok(splice(text, &sorted))
}

/// Scans `text` and returns it with every resolved reference marked.
///
/// Equivalent to [`locate`] followed by [`rewrite`], and infallible since
/// freshly located points are in bounds. Unmatched candidates are skipped;
/// callers that want to see them use the two-step form.
///
/// # Examples
///
/// ```rust
/// use refsep::preprocess;
///
/// assert_eq!(
///     preprocess(b"List<String>::new()"),
///     b"List:REF:<String>::new()"
/// );
/// assert_eq!(preprocess(b"a + b"), b"a + b");
/// ```
#[must_use]
pub fn preprocess(text: &[u8]) -> Vec<u8> {
    let mut points = locate(text).into_points();
    points.sort_unstable();
    splice(text, &points)
}

/// Removes every occurrence of the marker from `text`.
///
/// Inverse of [`preprocess`] for ordinary source: recovery assumes the
/// input neither contained the marker already nor abutted an insertion
/// site with bytes that join an inserted marker to spell another.
///
/// # Examples
///
/// ```rust
/// use refsep::{preprocess, strip};
///
/// let text = b"Map<K, V>::of and int[]::new";
/// assert_eq!(strip(&preprocess(text)), text);
/// ```
#[must_use]
pub fn strip(text: &[u8]) -> Vec<u8> {
    text.replace(MARKER, b"")
}
