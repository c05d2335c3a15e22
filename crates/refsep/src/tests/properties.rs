use alloc::vec::Vec;

use quickcheck::QuickCheck;

use crate::{
    MARKER, ScanOptions, UnmatchedPolicy, locate, locate_with, preprocess, strip,
    tests::reference,
};

/// Random bytes almost never contain `::`, so properties map them onto a
/// small alphabet dense in operators, brackets and whitespace. The alphabet
/// has no `R`, `E` or `F`, so generated sources never contain the marker.
const ALPHABET: &[u8] = b"<>[]:,. \t\nabXY";

fn java_ish(seeds: &[u8]) -> Vec<u8> {
    seeds
        .iter()
        .map(|&s| ALPHABET[usize::from(s) % ALPHABET.len()])
        .collect()
}

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: stripping the marker from preprocessed output recovers the
/// input exactly.
#[test]
fn strip_inverts_preprocess() {
    fn prop(seeds: Vec<u8>) -> bool {
        let src = java_ish(&seeds);
        strip(&preprocess(&src)) == src
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: output length grows by exactly the marker width per point and
/// is otherwise untouched.
#[test]
fn output_grows_by_marker_width_per_point() {
    fn prop(seeds: Vec<u8>) -> bool {
        let src = java_ish(&seeds);
        let points = locate(&src).points().len();
        preprocess(&src).len() == src.len() + MARKER.len() * points
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: the backward-walking scan agrees with the forward
/// match-table checker on every input, points and failures both.
#[test]
fn scan_agrees_with_match_table_checker() {
    fn prop(seeds: Vec<u8>) -> bool {
        let src = java_ish(&seeds);
        let found = locate(&src);
        let expected = reference::scan(&src);

        let points: Vec<(usize, usize)> = found
            .points()
            .iter()
            .map(|p| (p.offset, p.reference))
            .collect();
        let unmatched: Vec<usize> = found.unmatched().iter().map(|u| u.reference).collect();
        points == expected.points && unmatched == expected.unmatched
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: points come out in trigger order, and every point indexes an
/// actual `<` strictly left of its `::`.
#[test]
fn points_are_well_formed_and_in_trigger_order() {
    fn prop(seeds: Vec<u8>) -> bool {
        let src = java_ish(&seeds);
        let found = locate(&src);
        let points = found.points();

        points.windows(2).all(|w| w[0].reference < w[1].reference)
            && points.iter().all(|p| {
                p.offset < p.reference
                    && src[p.offset] == b'<'
                    && src[p.reference..p.reference + 2] == *b"::"
            })
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: halting at the first failure yields a prefix of what the
/// skipping scan finds.
#[test]
fn halt_scan_is_a_prefix_of_skip_scan() {
    fn prop(seeds: Vec<u8>) -> bool {
        let src = java_ish(&seeds);
        let skip = locate(&src);
        let halt = locate_with(
            &src,
            ScanOptions {
                unmatched: UnmatchedPolicy::Halt,
            },
        );

        match skip.unmatched().first() {
            None => halt == skip,
            Some(first) => {
                let before_failure: Vec<_> = skip
                    .points()
                    .iter()
                    .copied()
                    .filter(|p| p.reference < first.reference)
                    .collect();
                halt.unmatched() == &[*first] && halt.points() == before_failure
            }
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
