//! Input-device capability boundary.
//!
//! Consumers that expect to pull capture bytes from a radio front end talk
//! to the [`InputDevice`] trait: discover, open, read, close. Two
//! implementations ship here: [`EmulatorDevice`], which serves synthesized
//! signal bytes, and [`NullDevice`], a no-op stand-in for tests that only
//! need the contract satisfied.

/// Synthesizer-backed capture device.
pub mod emulator;
/// No-op device stub.
pub mod null;

pub use emulator::EmulatorDevice;
pub use null::NullDevice;

use thiserror::Error;

use crate::dsp::DspError;
use crate::io::codec::CodecError;

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors surfaced through the device boundary.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("device is not open")]
    NotOpen,

    #[error("signal synthesis failed: {0}")]
    Synthesis(#[from] DspError),

    #[error("signal encoding failed: {0}")]
    Encoding(#[from] CodecError),
}

/// Capability set expected of a capture source.
///
/// `read` fills as much of the buffer as it can and reports the byte count;
/// zero means the capture is exhausted. `find` is best-effort discovery and
/// deliberately reports nothing.
pub trait InputDevice {
    fn find(&mut self);

    fn open(&mut self) -> DeviceResult<()>;

    fn read(&mut self, buffer: &mut [u8]) -> DeviceResult<usize>;

    fn close(&mut self) -> DeviceResult<()>;
}

/// Identity record for a discovered device.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// Driver backing the device.
    pub driver: String,
    /// Human-readable label.
    pub label: String,
    /// Connection string.
    pub address: String,
}

/// Enumerate available capture devices.
///
/// Only the built-in emulator exists; real hardware would be appended here.
pub fn discover() -> Vec<DeviceInfo> {
    vec![DeviceInfo {
        driver: "emulator".to_string(),
        label: "Signal Emulator".to_string(),
        address: "emulator://default".to_string(),
    }]
}
