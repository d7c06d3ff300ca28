//! No-op device stub.

use super::{DeviceResult, InputDevice};

/// A device that satisfies the capability contract without doing anything:
/// discovery finds nothing, open and close always succeed, and `read`
/// always reports zero bytes. Useful as a test double anywhere an
/// [`InputDevice`] is expected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDevice;

impl NullDevice {
    pub fn new() -> Self {
        Self
    }
}

impl InputDevice for NullDevice {
    fn find(&mut self) {}

    fn open(&mut self) -> DeviceResult<()> {
        Ok(())
    }

    fn read(&mut self, _buffer: &mut [u8]) -> DeviceResult<usize> {
        Ok(0)
    }

    fn close(&mut self) -> DeviceResult<()> {
        Ok(())
    }
}
