//! Criterion micro-benchmarks for the time-stepper.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stria_bench::{reference_profile, stress_profile};
use stria_core::TransportMode;
use stria_sim::run;

/// Benchmark: 1K steps on the default 101-cell lattice, membrane-tethered.
fn bench_stepper_reference(c: &mut Criterion) {
    let params = reference_profile();

    c.bench_function("stepper_reference_1k_steps", |b| {
        b.iter(|| {
            let outcome = run(&params).unwrap();
            black_box(outcome.steps_used);
        });
    });
}

/// Benchmark: 1K steps on a 1001-cell lattice.
fn bench_stepper_stress(c: &mut Criterion) {
    let params = stress_profile();

    c.bench_function("stepper_stress_1k_steps", |b| {
        b.iter(|| {
            let outcome = run(&params).unwrap();
            black_box(outcome.steps_used);
        });
    });
}

/// Benchmark: the soluble path, which adds the activator Laplacian.
fn bench_stepper_soluble(c: &mut Criterion) {
    let params = stria_core::Params {
        activator_type: TransportMode::Soluble,
        ..reference_profile()
    };

    c.bench_function("stepper_soluble_1k_steps", |b| {
        b.iter(|| {
            let outcome = run(&params).unwrap();
            black_box(outcome.steps_used);
        });
    });
}

criterion_group!(
    benches,
    bench_stepper_reference,
    bench_stepper_stress,
    bench_stepper_soluble
);
criterion_main!(benches);
