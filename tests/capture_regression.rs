use approx::assert_relative_eq;
use std::f64::consts::PI;

use satlink_dsp::device::{EmulatorDevice, InputDevice};
use satlink_dsp::dsp::sweep;
use satlink_dsp::io::codec;
use satlink_dsp::{IQSample, SweepParams};

#[test]
fn emulated_capture_round_trips_to_the_sweep() {
    let mut device = EmulatorDevice::new();
    device.open().unwrap();

    let mut bytes = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = device.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
    }
    device.close().unwrap();

    // 0.1 s at 48 kHz, 16 bytes per complex sample.
    assert_eq!(bytes.len(), 4800 * codec::BYTES_PER_SAMPLE);

    let samples = codec::decode(&bytes).unwrap();
    assert_eq!(samples.len(), 4800);

    // t = 0: unit phasor on the positive real axis.
    assert_relative_eq!(samples[0].re, 1.0, epsilon = 1e-12);
    assert_relative_eq!(samples[0].im, 0.0, epsilon = 1e-12);

    // Spot-check mid-capture against the closed-form ramp the emulator
    // observes: f(t) = 1000 + 500t, a(t) = 1 - 0.5t.
    let i = 1000usize;
    let t = i as f64 / 48_000.0;
    let angle = 2.0 * PI * (1000.0 + 500.0 * t) * t;
    let amplitude = 1.0 - 0.5 * t;
    assert_relative_eq!(samples[i].re, amplitude * angle.cos(), epsilon = 1e-12);
    assert_relative_eq!(samples[i].im, amplitude * angle.sin(), epsilon = 1e-12);
}

#[test]
fn constant_sweep_first_frame_encodes_a_unit_phasor() {
    let params = SweepParams {
        sample_rate: 48_000.0,
        duration: 0.1,
        frequency_of: |_| 1000.0,
        amplitude_of: |_| 1.0,
    };
    let signal = sweep::generate(&params).unwrap();
    assert_eq!(signal.len(), 4800);

    let bytes = codec::encode(&signal).unwrap();
    let first = codec::decode(&bytes[..codec::BYTES_PER_SAMPLE]).unwrap();
    assert_eq!(first, vec![IQSample::new(1.0, 0.0)]);
}
