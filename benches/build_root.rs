//! Merkle root construction benchmark for different block sizes.
//!
//! Run with: cargo bench --bench build_root

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use merkle_root::{build_root, sha256d};

/// Deterministic txids in display hex
fn txids(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| hex::encode(sha256d(&(i as u64).to_le_bytes())))
        .collect()
}

fn bench_build_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_root");

    for n in [1usize, 16, 1_000, 4_000] {
        let leaves = txids(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &leaves, |b, leaves| {
            b.iter(|| build_root(black_box(leaves)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_root);
criterion_main!(benches);
