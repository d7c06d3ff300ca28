//! Benchmarks for the complex-sample byte codec.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use satlink_dsp::dsp::chirp;
use satlink_dsp::io::codec;
use satlink_dsp::ChirpParams;

use crate::DURATIONS;

pub fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for &duration in DURATIONS {
        let params = ChirpParams {
            sample_rate: 48_000.0,
            duration,
            start_freq: 1000.0,
            end_freq: 2000.0,
        };
        let signal = chirp::generate(&params).unwrap();
        let bytes = codec::encode(&signal).unwrap();

        group.bench_with_input(
            BenchmarkId::new("encode", signal.len()),
            &signal,
            |b, s| b.iter(|| codec::encode(black_box(s)).unwrap()),
        );

        group.bench_with_input(BenchmarkId::new("decode", signal.len()), &bytes, |b, s| {
            b.iter(|| codec::decode(black_box(s)).unwrap())
        });
    }

    group.finish();
}
