//! Criterion benchmarks for the projection primitives and composite conversions.
//! Inputs are seeded draws inside Finland so runs are comparable.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use kkj::prelude::*;
use kkj::sample::{draw_local_geodetic, ReplayToken};

fn points(n: u64, seed: u64) -> Vec<GeodeticCoordinate> {
    (0..n)
        .map(|index| draw_local_geodetic(ReplayToken { seed, index }))
        .collect()
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let geo = points(256, 43);
    let grid: Vec<GridCoordinate> = geo
        .iter()
        .map(|&g| local_geodetic_to_grid(g).unwrap())
        .collect();

    group.bench_function("project", |b| {
        b.iter(|| {
            for &g in &geo {
                let _p = local_geodetic_to_grid(std::hint::black_box(g));
            }
        })
    });

    group.bench_function("invert", |b| {
        b.iter(|| {
            for &p in &grid {
                let _g = invert(std::hint::black_box(p));
            }
        })
    });

    group.bench_function("datum_shift", |b| {
        b.iter(|| {
            for &g in &geo {
                let _w = local_geodetic_to_global_geodetic(std::hint::black_box(g));
            }
        })
    });

    group.bench_function("wgs84_to_grid_to_wgs84", |b| {
        b.iter_batched(
            || points(64, 44),
            |pts| {
                for g in pts {
                    let p = global_geodetic_to_grid(g).unwrap();
                    let _w = grid_to_global_geodetic(p).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
