//! Benchmarks for time-varying synthesis.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use satlink_dsp::dsp::sweep;
use satlink_dsp::SweepParams;

use crate::DURATIONS;

pub fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/sweep");

    for &duration in DURATIONS {
        // Linear ramp in both functions - the emulator's capture shape
        let params = SweepParams {
            sample_rate: 48_000.0,
            duration,
            frequency_of: |t| 1000.0 + 500.0 * t,
            amplitude_of: |t| 1.0 - 0.5 * t,
        };
        let samples = params.sample_count();

        group.bench_with_input(BenchmarkId::new("generate", samples), &params, |b, p| {
            b.iter(|| sweep::generate(black_box(p)).unwrap())
        });
    }

    group.finish();
}
