pub mod device; // Input-device capability boundary
pub mod dsp; // Signal synthesis primitives
pub mod io; // Byte-level sample encoding

pub use dsp::params::{ChirpParams, DspError, DspResult, SignalParams, SweepParams};
pub use dsp::IQSample;
