//! Criterion benches for the divide-and-conquer hull.
//!
//! - Sizes 1e2..1e5 on disk clouds (small hulls) and circles (every point on
//!   the hull).
//! - Lattice clouds stress ties, duplicates and collinear runs.
//! - The monotone-chain reference is benched alongside as a baseline.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dchull::hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::hull2::util::reference_hull;
use dchull::compute_hull;

fn cloud(count: usize, shape: CloudShape, index: u64) -> Vec<nalgebra::Vector2<f64>> {
    draw_cloud(
        CloudCfg {
            count,
            shape,
            scale: 1.0,
        },
        ReplayToken { seed: 42, index },
    )
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        for (name, shape) in [("disk", CloudShape::Disk), ("circle", CloudShape::Circle)] {
            group.bench_function(BenchmarkId::new(name, n), |b| {
                b.iter_batched(
                    || cloud(n, shape, n as u64),
                    |pts| {
                        let _ = compute_hull(&pts).unwrap();
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    let grid = CloudShape::Grid { half: 50 };
    group.bench_function(BenchmarkId::new("grid", 10_000), |b| {
        b.iter_batched(
            || cloud(10_000, grid, 7),
            |pts| {
                let _ = compute_hull(&pts).unwrap();
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");
    for &n in &[1_000usize, 100_000] {
        group.bench_function(BenchmarkId::new("monotone_chain_disk", n), |b| {
            b.iter_batched(
                || cloud(n, CloudShape::Disk, n as u64),
                |pts| {
                    let _ = reference_hull(&pts);
                },
                BatchSize::LargeInput,
            )
        });
    }
    #[cfg(feature = "parallel")]
    group.bench_function(BenchmarkId::new("par_disk", 100_000), |b| {
        b.iter_batched(
            || cloud(100_000, CloudShape::Disk, 100_000),
            |pts| {
                let _ = dchull::hull2::compute_hull_par(&pts).unwrap();
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_shapes, bench_baseline);
criterion_main!(benches);
