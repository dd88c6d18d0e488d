//! Benchmarks for Tetrad geometry
//!
//! Measures performance of:
//! - Single placement computation
//! - Full registry layout
//! - Centroid over a layout

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tetrad_geometry::{centroid, interpolate, position_for, Placement, Position};

/// Benchmark a single placement at different registry sizes
fn bench_position_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_for");

    for &total in &[4usize, 16, 256, 4096, 65_536] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &n| {
            b.iter(|| position_for(black_box(n / 2), black_box(n)))
        });
    }
    group.finish();
}

/// Benchmark laying out a whole registry
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for &total in &[4usize, 64, 1024] {
        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &n| {
            b.iter(|| Placement::of(black_box(n)).collect::<Vec<_>>())
        });
    }
    group.finish();
}

/// Benchmark consensus centroid and message interpolation
fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");

    for &total in &[4usize, 64, 1024] {
        let points: Vec<Position> = Placement::of(total).collect();
        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(BenchmarkId::new("centroid", total), &points, |b, pts| {
            b.iter(|| centroid(black_box(pts)))
        });
    }

    let a = position_for(0, 4);
    let b = position_for(3, 4);
    group.bench_function("interpolate", |bench| {
        bench.iter(|| interpolate(black_box(&a), black_box(&b), black_box(0.42)))
    });

    group.finish();
}

criterion_group!(benches, bench_position_for, bench_layout, bench_blend);
criterion_main!(benches);
