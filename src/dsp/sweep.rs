//! Synthesis from time-varying frequency and amplitude functions.
//!
//! Each sample is rebuilt from scratch as a phasor of magnitude
//! `amplitude_of(t)` at angle `2π · frequency_of(t) · t`. The phase is
//! *instantaneous*, not accumulated: with a non-constant frequency function
//! the waveform can jump in phase between samples, where a true FM signal
//! would integrate frequency over time. Consumers rely on this exact
//! recomputed-per-sample model, so it is kept rather than corrected.

use std::f64::consts::PI;

use super::params::{DspResult, SweepParams};
use super::IQSample;

/// Generate a signal whose frequency and amplitude follow the parameter
/// functions, evaluated once per sample at `t = i / sample_rate`.
pub fn generate<F, A>(params: &SweepParams<F, A>) -> DspResult<Vec<IQSample>>
where
    F: Fn(f64) -> f64,
    A: Fn(f64) -> f64,
{
    params.validate()?;

    let count = params.sample_count();
    let time_step = 1.0 / params.sample_rate;

    let mut signal = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f64 * time_step;
        let frequency = (params.frequency_of)(t);
        let amplitude = (params.amplitude_of)(t);
        let phase = 2.0 * PI * frequency * t;
        signal.push(IQSample::from_polar(amplitude, phase));
    }

    Ok(signal)
}
