//! Quantized 8-bit test tones.
//!
//! These generators feed scope-style displays directly: each byte divided by
//! 255 is a normalized amplitude in [0, 1], and its index divided by the
//! sequence length is a normalized time coordinate. Rates and durations are
//! fixed per generator and exposed as constants so the boundary values can
//! be asserted in tests.

use std::f64::consts::PI;

/// Sample rate of [`sine`] output, in Hz.
pub const SINE_SAMPLE_RATE: f64 = 2_000_000.0;
/// Duration of [`sine`] output, in seconds.
pub const SINE_DURATION: f64 = 0.5;

/// Sample rate of [`warble`] output, in Hz.
pub const WARBLE_SAMPLE_RATE: f64 = 200.0;
/// Duration of [`warble`] output, in seconds.
pub const WARBLE_DURATION: f64 = 1.0;
/// Peak frequency deviation of the warble, in Hz.
pub const WARBLE_FREQ_DEVIATION: f64 = 1000.0;
/// Rate of the warble's frequency wobble, in Hz.
pub const WARBLE_FREQ_RATE: f64 = 5.0;
/// Peak amplitude deviation of the warble.
pub const WARBLE_AMP_DEVIATION: f64 = 0.2;
/// Rate of the warble's amplitude wobble, in Hz.
pub const WARBLE_AMP_RATE: f64 = 2.0;

/// Map a [-1, 1] value onto one byte: `trunc((value + 1) · 0.5 · 255)`,
/// keeping the low 8 bits.
///
/// Out-of-range inputs (amplitude above 1) wrap instead of clamping; the
/// cast goes through i64 because a bare `f64 as u8` saturates and would
/// turn the expected wrapped bytes into 0/255.
#[inline]
pub fn quantize(value: f64) -> u8 {
    ((value + 1.0) * 0.5 * 255.0) as i64 as u8
}

/// Fixed-frequency sine tone: 1 000 000 bytes covering half a second at
/// 2 MHz.
pub fn sine(frequency: f64, amplitude: f64) -> Vec<u8> {
    let count = (SINE_SAMPLE_RATE * SINE_DURATION) as usize;
    let mut signal = Vec::with_capacity(count);

    for i in 0..count {
        let t = i as f64 / SINE_SAMPLE_RATE;
        let value = amplitude * (2.0 * PI * frequency * t).sin();
        signal.push(quantize(value));
    }

    signal
}

/// Warbling tone: both frequency and amplitude wobble sinusoidally around
/// the supplied base values. 200 bytes covering one second at 200 Hz.
pub fn warble(frequency: f64, amplitude: f64) -> Vec<u8> {
    let count = (WARBLE_SAMPLE_RATE * WARBLE_DURATION) as usize;
    let mut signal = Vec::with_capacity(count);

    for i in 0..count {
        let t = i as f64 / WARBLE_SAMPLE_RATE;
        let current_frequency =
            frequency + WARBLE_FREQ_DEVIATION * (2.0 * PI * WARBLE_FREQ_RATE * t).sin();
        let current_amplitude =
            amplitude + WARBLE_AMP_DEVIATION * (2.0 * PI * WARBLE_AMP_RATE * t).sin();
        let value = current_amplitude * (2.0 * PI * current_frequency * t).sin();
        signal.push(quantize(value));
    }

    signal
}
