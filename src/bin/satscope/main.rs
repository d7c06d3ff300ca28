//! satscope - Terminal signal scope
//!
//! Run with: cargo run --bin satscope
//!
//! Streams the emulated capture device into a live I/Q trace and spectrum,
//! alongside the quantized test-tone plot.

mod ui;

use std::thread;
use std::time::Duration;

use color_eyre::Result;
use rtrb::RingBuffer;
use satlink_dsp::device::emulator::CAPTURE_SAMPLE_RATE;
use satlink_dsp::device::{EmulatorDevice, InputDevice};
use satlink_dsp::io::codec;
use satlink_dsp::IQSample;

use ui::UiApp;

/// Bytes pulled from the device per read (64 complex samples).
const READ_CHUNK: usize = 1024;

fn main() -> Result<()> {
    color_eyre::install()?;

    let (samples_tx, samples_rx) = RingBuffer::<IQSample>::new(8192);
    thread::spawn(move || stream_capture(samples_tx));

    let mut terminal = ratatui::init();
    let mut app = UiApp::new(samples_rx);
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

/// Pull capture bytes from the emulated device, decode them, and feed the
/// UI at roughly capture rate. Reopens the device when the capture is
/// exhausted so the scope keeps moving.
fn stream_capture(mut samples_tx: rtrb::Producer<IQSample>) {
    let mut device = EmulatorDevice::new();
    if device.open().is_err() {
        return;
    }

    let mut chunk = [0u8; READ_CHUNK];
    loop {
        match device.read(&mut chunk) {
            Ok(0) => {
                // Capture exhausted; rewind by reopening.
                if device.open().is_err() {
                    return;
                }
            }
            Ok(n) => {
                let whole = n - n % codec::BYTES_PER_SAMPLE;
                if let Ok(samples) = codec::decode(&chunk[..whole]) {
                    let pace =
                        Duration::from_secs_f64(samples.len() as f64 / CAPTURE_SAMPLE_RATE);
                    for sample in samples {
                        let _ = samples_tx.push(sample); // drop when the UI lags
                    }
                    thread::sleep(pace);
                }
            }
            Err(_) => return,
        }
    }
}
