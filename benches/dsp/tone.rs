//! Benchmarks for quantized tone generation.

use std::hint::black_box;

use criterion::Criterion;
use satlink_dsp::dsp::tone;

pub fn bench_tone(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/tone");

    // Fixed-size outputs: 200 bytes for warble, 1M bytes for sine.
    group.bench_function("warble", |b| {
        b.iter(|| tone::warble(black_box(100.0), black_box(0.5)))
    });

    group.sample_size(10);
    group.bench_function("sine", |b| {
        b.iter(|| tone::sine(black_box(1000.0), black_box(0.5)))
    });

    group.finish();
}
