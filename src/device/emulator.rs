//! Capture device emulator backed by the sweep synthesizer.
//!
//! Emulates a front end observing a short downlink test sweep: frequency
//! ramping 1000 → 1050 Hz and amplitude fading 1.0 → 0.95 over 0.1 s at
//! 48 kHz. Opening the device synthesizes and encodes the capture; `read`
//! then hands the bytes out in whatever chunk sizes the caller asks for.

use crate::dsp::{sweep, SweepParams};
use crate::io::codec;

use super::{DeviceError, DeviceResult, InputDevice};

/// Sample rate of the emulated capture, in Hz.
pub const CAPTURE_SAMPLE_RATE: f64 = 48_000.0;
/// Duration of the emulated capture, in seconds.
pub const CAPTURE_DURATION: f64 = 0.1;

/// In-memory capture device serving synthesized signal bytes.
pub struct EmulatorDevice {
    /// Encoded capture; populated by `open`, dropped by `close`.
    payload: Option<Vec<u8>>,
    cursor: usize,
}

impl EmulatorDevice {
    pub fn new() -> Self {
        Self {
            payload: None,
            cursor: 0,
        }
    }

    /// The fixture sweep this emulator observes.
    fn capture_params() -> SweepParams<fn(f64) -> f64, fn(f64) -> f64> {
        SweepParams {
            sample_rate: CAPTURE_SAMPLE_RATE,
            duration: CAPTURE_DURATION,
            frequency_of: |t| 1000.0 + 500.0 * t,
            amplitude_of: |t| 1.0 - 0.5 * t,
        }
    }

    /// Synthesize and encode the whole capture in one shot, bypassing the
    /// open/read cycle.
    pub fn generate() -> DeviceResult<Vec<u8>> {
        let signal = sweep::generate(&Self::capture_params())?;
        Ok(codec::encode(&signal)?)
    }
}

impl Default for EmulatorDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDevice for EmulatorDevice {
    fn find(&mut self) {
        // Nothing to probe; the emulator is always present.
    }

    fn open(&mut self) -> DeviceResult<()> {
        self.payload = Some(Self::generate()?);
        self.cursor = 0;
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8]) -> DeviceResult<usize> {
        let payload = self.payload.as_ref().ok_or(DeviceError::NotOpen)?;

        let remaining = &payload[self.cursor..];
        let count = remaining.len().min(buffer.len());
        buffer[..count].copy_from_slice(&remaining[..count]);
        self.cursor += count;
        Ok(count)
    }

    fn close(&mut self) -> DeviceResult<()> {
        self.payload = None;
        self.cursor = 0;
        Ok(())
    }
}
