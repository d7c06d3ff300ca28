//! Benchmarks for chirp synthesis.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use satlink_dsp::dsp::chirp;
use satlink_dsp::ChirpParams;

use crate::DURATIONS;

pub fn bench_chirp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/chirp");

    for &duration in DURATIONS {
        let params = ChirpParams {
            sample_rate: 48_000.0,
            duration,
            start_freq: 1000.0,
            end_freq: 2000.0,
        };
        let samples = params.sample_count();

        group.bench_with_input(BenchmarkId::new("generate", samples), &params, |b, p| {
            b.iter(|| chirp::generate(black_box(p)).unwrap())
        });
    }

    group.finish();
}
