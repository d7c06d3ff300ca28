//! Signal-synthesis primitives.
//!
//! These functions are pure: one call turns a parameter set into a finished
//! sample sequence, with no hidden state between calls. Given the same
//! parameters they always produce the same samples, so output can be cached,
//! compared, or regenerated freely.

/// Linear-FM chirp synthesis.
pub mod chirp;
/// Parameter records and validation.
pub mod params;
/// Time-varying frequency/amplitude synthesis.
pub mod sweep;
/// Quantized 8-bit test tones for scope-style display.
pub mod tone;

pub use params::{ChirpParams, DspError, DspResult, SignalParams, SweepParams};

/// A single complex-valued (I/Q) sample: real part in-phase, imaginary part
/// quadrature.
pub type IQSample = num_complex::Complex64;
