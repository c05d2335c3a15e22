#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};
use refsep::{MARKER, locate, preprocess, rewrite, strip};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Fragments shaped like the constructs the scan cares about, so mutated
/// inputs keep hitting the interesting paths instead of drifting into
/// operator-free noise.
static FRAGMENTS: &[&[u8]] = &[
    b"::",
    b":::",
    b"::::",
    b"<",
    b">",
    b"[",
    b"]",
    b"[ ]",
    b"List<String>::new",
    b"Map<K, List<V>>::of",
    b"int[][]::clone",
    b"x >>::m",
    b"<Y>::m",
    b"]::m",
    b" \t\x0b\x0c\r\n",
    b"Q<A<B>::m>::n",
    b":REF:",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if seed.is_multiple_of(4) {
        with_rng(|rng| {
            let fragment = FRAGMENTS[rng.random_range(0..FRAGMENTS.len())];
            if fragment.len() > max_size {
                return fuzzer_mutate(data, size, max_size);
            }
            let len = size.max(fragment.len()).min(max_size);
            let at = rng.random_range(0..=len - fragment.len());
            data[at..at + fragment.len()].copy_from_slice(fragment);
            len
        })
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn count_markers(text: &[u8]) -> usize {
    text.windows(MARKER.len()).filter(|w| *w == MARKER).count()
}

fn check(text: &[u8]) {
    let found = locate(text);
    let points = found.points();

    for pair in points.windows(2) {
        assert!(pair[0].reference < pair[1].reference);
    }
    for point in points {
        assert!(point.offset < point.reference);
        assert_eq!(text[point.offset], b'<');
        assert_eq!(&text[point.reference..point.reference + 2], b"::");
    }

    let marked = rewrite(text, points).expect("fresh points are in bounds");
    assert_eq!(marked.len(), text.len() + MARKER.len() * points.len());
    assert_eq!(marked, preprocess(text));

    // Stripping is lossless only when the input is marker-free and no
    // insertion collided with surrounding bytes to spell a second marker.
    if count_markers(text) == 0 && count_markers(&marked) == points.len() {
        assert_eq!(strip(&marked), text);
    }
}

fuzz_target!(|data: &[u8]| check(data));
