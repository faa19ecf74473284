//! Integration scheme benchmarks.
//!
//! Measures whole-run throughput for the explicit and Verlet schemes on
//! the unit oscillator and the circular Mars orbit, plus one small
//! stability sweep.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stormer::prelude::*;

fn bench_spring_schemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring");
    group.sample_size(100);

    let model = SpringModel::new(1.0, 1.0);
    for steps in [1_000usize, 10_000] {
        let t_max = steps as f64 * 0.01;
        group.bench_with_input(BenchmarkId::new("explicit", steps), &t_max, |b, &t_max| {
            b.iter(|| black_box(integrate_explicit(&model, 0.0, 1.0, t_max, 0.01)));
        });
        group.bench_with_input(BenchmarkId::new("verlet", steps), &t_max, |b, &t_max| {
            b.iter(|| black_box(integrate_verlet(&model, 0.0, 1.0, t_max, 0.01)));
        });
        group.bench_with_input(BenchmarkId::new("analytical", steps), &t_max, |b, &t_max| {
            b.iter(|| black_box(analytical_oscillator(0.0, 1.0, 1.0, 1.0, t_max, 0.01)));
        });
    }

    group.finish();
}

fn bench_two_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_body");
    group.sample_size(100);

    let scenario = TwoBodyScenario::mars_circular();
    for steps in [1_000usize, 10_000] {
        let t_max = steps as f64;
        group.bench_with_input(BenchmarkId::new("verlet", steps), &t_max, |b, &t_max| {
            b.iter(|| black_box(integrate_two_body(&scenario, SchemeKind::Verlet, t_max, 1.0)));
        });
    }

    group.finish();
}

fn bench_stability_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("stability");
    group.sample_size(20);

    let dt_values = log_spaced(-2.0, 0.0, 9);
    group.bench_function("sweep_9_points", |b| {
        b.iter(|| black_box(stability_sweep(50.0, &dt_values)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_spring_schemes,
    bench_two_body,
    bench_stability_sweep
);
criterion_main!(benches);
