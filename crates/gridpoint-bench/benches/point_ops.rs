//! Criterion micro-benchmarks for point arithmetic, hashing and containment.

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridpoint_bench::{probe_region, scattered_points, scattered_tripoints};
use gridpoint_core::{
    BuildStableHasher, Point, Tripoint, TripointSet, EIGHT_HORIZONTAL_NEIGHBORS,
};
use gridpoint_region::{clamp_half_open, Cuboid};

/// Benchmark: Insert 10K tripoints into the default grid-hashed set.
fn bench_tripoint_set_grid_10k(c: &mut Criterion) {
    let pts = scattered_tripoints(10_000, 100, 5);

    c.bench_function("tripoint_set_grid_10k", |b| {
        b.iter(|| {
            let mut set = TripointSet::default();
            for &t in &pts {
                set.insert(t);
            }
            black_box(set.len());
        });
    });
}

/// Benchmark: Insert a 10K-cell `y = z = 0` row hashed with the exact
/// stable value, next to the same row under the grid hasher.
fn bench_zero_row_stable_vs_grid_10k(c: &mut Criterion) {
    let row: Vec<Tripoint> = (0..10_000).map(|x| Tripoint::new(x, 0, 0)).collect();

    c.bench_function("zero_row_stable_10k", |b| {
        b.iter(|| {
            let mut set: HashSet<Tripoint, BuildStableHasher> = HashSet::default();
            for &t in &row {
                set.insert(t);
            }
            black_box(set.len());
        });
    });

    c.bench_function("zero_row_grid_10k", |b| {
        b.iter(|| {
            let mut set = TripointSet::default();
            for &t in &row {
                set.insert(t);
            }
            black_box(set.len());
        });
    });
}

/// Benchmark: Insert 10K tripoints with std's default SipHash for comparison.
fn bench_tripoint_set_siphash_10k(c: &mut Criterion) {
    let pts = scattered_tripoints(10_000, 100, 5);

    c.bench_function("tripoint_set_siphash_10k", |b| {
        b.iter(|| {
            let mut set = HashSet::new();
            for &t in &pts {
                set.insert(t);
            }
            black_box(set.len());
        });
    });
}

/// Benchmark: Rotate 10K points of a 100x100 chunk through all four turns.
fn bench_rotate_10k(c: &mut Criterion) {
    let pts = scattered_points(10_000, 100);
    let dim = Point::new(100, 100);

    c.bench_function("rotate_10k", |b| {
        b.iter(|| {
            for &p in &pts {
                for turns in 0..4 {
                    black_box(p.rotate(turns, dim));
                }
            }
        });
    });
}

/// Benchmark: Half-open containment and clamping against a probe rectangle.
fn bench_contains_and_clamp_10k(c: &mut Criterion) {
    let pts = scattered_points(10_000, 100);
    let region = probe_region(100);

    c.bench_function("contains_and_clamp_10k", |b| {
        b.iter(|| {
            let mut inside = 0usize;
            for &p in &pts {
                if region.contains_half_open(p) {
                    inside += 1;
                }
                black_box(clamp_half_open(p, &region));
            }
            black_box(inside);
        });
    });
}

/// Benchmark: Count 8-neighbours inside a cuboid for 10K tripoints.
fn bench_neighbour_containment_10k(c: &mut Criterion) {
    let pts = scattered_tripoints(10_000, 100, 5);
    let region = Cuboid::from_rectangle(probe_region(100), -2, 3);

    c.bench_function("neighbour_containment_10k", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &t in &pts {
                for n in EIGHT_HORIZONTAL_NEIGHBORS {
                    if region.contains_half_open(t + n) {
                        hits += 1;
                    }
                }
            }
            black_box(hits);
        });
    });
}

criterion_group!(
    benches,
    bench_tripoint_set_grid_10k,
    bench_zero_row_stable_vs_grid_10k,
    bench_tripoint_set_siphash_10k,
    bench_rotate_10k,
    bench_contains_and_clamp_10k,
    bench_neighbour_containment_10k,
);
criterion_main!(benches);
