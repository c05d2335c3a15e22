#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use refsep::{locate, preprocess};

/// Deterministically create a source buffer of exactly `target_len` bytes.
/// Whole member lines only; the tail is padded with spaces so truncation
/// cannot manufacture half an operator.
fn make_source(target_len: usize) -> Vec<u8> {
    const MEMBER: &[u8] = b"    Supplier<List<String>> s = ArrayList<Integer>::new;\n";
    let mut src = Vec::with_capacity(target_len);
    while src.len() + MEMBER.len() <= target_len {
        src.extend_from_slice(MEMBER);
    }
    src.resize(target_len, b' ');
    debug_assert_eq!(src.len(), target_len);
    src
}

fn bench_scan_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_throughput");
    group.measurement_time(Duration::from_secs(10));
    group.warm_up_time(Duration::from_secs(5));

    for &size in &[10_000usize, 100_000, 1_000_000] {
        let source = make_source(size);

        group.bench_with_input(BenchmarkId::new("locate", size), &source, |b, src| {
            b.iter(|| {
                let found = locate(black_box(src));
                black_box(found.points().len());
            });
        });

        group.bench_with_input(BenchmarkId::new("preprocess", size), &source, |b, src| {
            b.iter(|| {
                let out = preprocess(black_box(src));
                black_box(out.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan_throughput);
criterion_main!(benches);
