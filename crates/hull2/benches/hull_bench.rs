//! Criterion benchmarks for both hull algorithms.
//! Focus sizes: n in {10, 50, 100, 200}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hull2

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::api::{
    compute_brute_force_hull, compute_monotone_chain_hull, random_points, PointCloudCfg,
    ReplayToken, SampleBounds,
};

fn cloud(n: usize, seed: u64) -> Vec<hull2::Point> {
    let cfg = PointCloudCfg {
        count: n,
        bounds: SampleBounds::canvas(800, 600),
    };
    random_points(cfg, ReplayToken { seed, index: 0 })
        .as_slice()
        .to_vec()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _res = compute_brute_force_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("monotone_chain", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 44),
                |pts| {
                    let _res = compute_monotone_chain_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
