//! Locating method references qualified by generic type arguments.
//!
//! A `::` operator is a candidate wherever two colons are followed by some
//! other byte. Resolving a candidate never parses the surrounding source;
//! it walks backward from the operator instead:
//!
//! 1. skip whitespace,
//! 2. hop over any array dimension suffixes (`[]`, possibly several, with
//!    whitespace between them),
//! 3. if the walk now stands on `>`, find the matching `<` with a
//!    pending-close counter so nested argument lists stay balanced.
//!
//! The matched `<` is where [`rewrite`](crate::rewrite) splices the marker:
//!
//! ```text
//! List<String>::new      =>      List:REF:<String>::new
//!     ^      ^^
//!     offset reference
//! ```
//!
//! Anything else under the walk (an identifier byte, a string quote, a
//! closing parenthesis) means the qualifier carries no type arguments and
//! the candidate is left alone.

use alloc::vec::Vec;

use crate::{
    options::{ScanOptions, UnmatchedPolicy},
    point::{BracketKind, InsertionPoint, Locations, Unmatched},
};

/// Whitespace as the scanner understands it: C's `isspace` set. Vertical
/// tab is absent from `u8::is_ascii_whitespace`, so the set is spelled out.
const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Index of the last non-whitespace byte strictly before `end`.
fn last_non_space(text: &[u8], end: usize) -> Option<usize> {
    text[..end].iter().rposition(|&b| !is_space(b))
}

/// Index of the nearest `[` strictly before `end`. Dimension suffixes do
/// not nest, so the nearest opener is the right one.
fn square_open(text: &[u8], end: usize) -> Option<usize> {
    text[..end].iter().rposition(|&b| b == b'[')
}

/// Index of the `<` matching the `>` at `close`, or `None` when the buffer
/// ends before every pending `>` has found its opener.
fn angle_open(text: &[u8], close: usize) -> Option<usize> {
    let mut pending = 1usize;
    let mut i = close;
    while i > 0 {
        i -= 1;
        match text[i] {
            b'>' => pending += 1,
            b'<' => {
                pending -= 1;
                if pending == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Outcome of resolving one candidate.
enum Resolution {
    /// The qualifier ends in a type-argument list opening at this offset.
    Generic(usize),
    /// The qualifier carries no type arguments; nothing to record.
    Plain,
    /// A closing bracket had no opener anywhere to its left.
    Unmatched(BracketKind),
}

/// Walks backward from the `::` at `reference` and classifies its
/// qualifier.
fn resolve(text: &[u8], reference: usize) -> Resolution {
    let Some(mut at) = last_non_space(text, reference) else {
        return Resolution::Plain;
    };
    while text[at] == b']' {
        let Some(open) = square_open(text, at) else {
            return Resolution::Unmatched(BracketKind::Square);
        };
        match last_non_space(text, open) {
            Some(next) => at = next,
            None => return Resolution::Plain,
        }
    }
    if text[at] != b'>' {
        return Resolution::Plain;
    }
    match angle_open(text, at) {
        Some(offset) => Resolution::Generic(offset),
        None => Resolution::Unmatched(BracketKind::Angle),
    }
}

/// Scans `text` for `::` operators qualified by a generic type-argument
/// list and reports where the reference marker belongs.
///
/// Uses default [`ScanOptions`]; see [`locate_with`] to change how
/// unmatched brackets are treated.
///
/// # Examples
///
/// ```rust
/// use refsep::locate;
///
/// let found = locate(b"Supplier<List<String>>::get");
/// assert_eq!(found.points()[0].offset, 8);
///
/// // Array references and plain names are left alone.
/// assert!(locate(b"int[]::new").points().is_empty());
/// assert!(locate(b"String::valueOf").points().is_empty());
/// ```
#[must_use]
pub fn locate(text: &[u8]) -> Locations {
    locate_with(text, ScanOptions::default())
}

/// Scans `text` under the given options.
///
/// Candidates are the positions where `text[i..i + 2]` is `::` and the
/// following byte exists and is not another colon; a longer colon run
/// yields no candidate until its final pair, and a `::` ending the buffer
/// is never examined. Resolved points land in
/// [`Locations::points`](crate::Locations::points) in trigger order;
/// failed walks land in
/// [`Locations::unmatched`](crate::Locations::unmatched).
///
/// # Examples
///
/// ```rust
/// use refsep::{ScanOptions, UnmatchedPolicy, locate_with};
///
/// // The stray `>` has no opener; with `Skip` the scan still resolves
/// // the reference after it.
/// let found = locate_with(b"x >::a Map<K, V>::of", ScanOptions::default());
/// assert_eq!(found.unmatched().len(), 1);
/// assert_eq!(found.points().len(), 1);
///
/// let halted = locate_with(
///     b"x >::a Map<K, V>::of",
///     ScanOptions {
///         unmatched: UnmatchedPolicy::Halt,
///     },
/// );
/// assert_eq!(halted.unmatched().len(), 1);
/// assert!(halted.points().is_empty());
/// ```
#[must_use]
pub fn locate_with(text: &[u8], options: ScanOptions) -> Locations {
    let mut points = Vec::new();
    let mut unmatched = Vec::new();
    let mut i = 0;
    while i + 2 < text.len() {
        if text[i] != b':' || text[i + 1] != b':' || text[i + 2] == b':' {
            i += 1;
            continue;
        }
        match resolve(text, i) {
            Resolution::Generic(offset) => points.push(InsertionPoint {
                offset,
                reference: i,
            }),
            Resolution::Plain => {}
            Resolution::Unmatched(kind) => {
                unmatched.push(Unmatched { reference: i, kind });
                if options.unmatched == UnmatchedPolicy::Halt {
                    break;
                }
            }
        }
        // Candidates cannot overlap: the byte after a candidate pair is
        // not a colon, so the next pair starts past it.
        i += 2;
    }
    Locations { points, unmatched }
}
