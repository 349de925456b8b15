//! Criterion benchmarks for offline collision scoring.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use trajsim_bench::{crowded_profile, reference_profile, reference_sample};
use trajsim_engine::{collisions_per_tick, count_collisions};

/// Benchmark: score a default 10-agent, 100-tick sample.
fn bench_count_10x100(c: &mut Criterion) {
    let sample = reference_sample(&reference_profile(), 42, 10, 100).unwrap();

    c.bench_function("count_collisions_10x100", |b| {
        b.iter(|| {
            let n = count_collisions(&sample.trajectories, &sample.radii).unwrap();
            black_box(n);
        });
    });
}

/// Benchmark: per-tick scoring of a crowded 50-agent, 200-tick sample.
fn bench_per_tick_crowded_50x200(c: &mut Criterion) {
    let sample = reference_sample(&crowded_profile(), 42, 50, 200).unwrap();

    c.bench_function("collisions_per_tick_50x200", |b| {
        b.iter(|| {
            let per_tick = collisions_per_tick(&sample.trajectories, &sample.radii).unwrap();
            black_box(&per_tick);
        });
    });
}

criterion_group!(benches, bench_count_10x100, bench_per_tick_crowded_50x200);
criterion_main!(benches);
