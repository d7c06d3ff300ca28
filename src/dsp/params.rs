//! Parameter records for signal synthesis.
//!
//! Every generator takes its parameters as a plain value struct and validates
//! them before computing anything. Invalid rates or durations are rejected
//! with a typed error instead of silently producing an empty sequence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for synthesis operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors produced by parameter validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DspError {
    #[error("invalid sample rate: {0} Hz (must be > 0)")]
    InvalidSampleRate(f64),

    #[error("invalid duration: {0} s (must be > 0)")]
    InvalidDuration(f64),
}

/// Base timing parameters shared by every generator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Signal duration in seconds.
    pub duration: f64,
}

impl SignalParams {
    pub fn new(sample_rate: f64, duration: f64) -> Self {
        Self {
            sample_rate,
            duration,
        }
    }

    /// Reject non-positive (or NaN) rates and durations.
    ///
    /// The comparisons are written so NaN fails them too.
    pub fn validate(&self) -> DspResult<()> {
        if !(self.sample_rate > 0.0) {
            return Err(DspError::InvalidSampleRate(self.sample_rate));
        }
        if !(self.duration > 0.0) {
            return Err(DspError::InvalidDuration(self.duration));
        }
        Ok(())
    }

    /// Number of samples the parameters describe: `floor(rate * duration)`.
    ///
    /// Zero is a valid count (an empty signal); validated parameters can
    /// never make the product negative.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate * self.duration) as usize
    }
}

/// Parameters for a linear frequency sweep (chirp).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChirpParams {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Signal duration in seconds.
    pub duration: f64,
    /// Frequency at t = 0, in Hz.
    pub start_freq: f64,
    /// Frequency at t = duration, in Hz.
    pub end_freq: f64,
}

impl ChirpParams {
    /// The shared timing portion of the parameters.
    pub fn signal(&self) -> SignalParams {
        SignalParams::new(self.sample_rate, self.duration)
    }

    pub fn validate(&self) -> DspResult<()> {
        self.signal().validate()
    }

    pub fn sample_count(&self) -> usize {
        self.signal().sample_count()
    }

    /// Frequency sweep rate in Hz per second. Negative for a downchirp.
    pub fn chirp_rate(&self) -> f64 {
        (self.end_freq - self.start_freq) / self.duration
    }
}

/// Parameters for a signal whose frequency and amplitude follow arbitrary
/// functions of time.
///
/// The two callables are evaluated once per sample at `t = i / sample_rate`
/// and are expected to be pure: the same `t` must always yield the same
/// value. Any non-capturing closure or `fn` works:
///
/// ```
/// use satlink_dsp::dsp::{sweep, SweepParams};
///
/// let params = SweepParams {
///     sample_rate: 48_000.0,
///     duration: 0.1,
///     frequency_of: |t| 1000.0 + 500.0 * t,
///     amplitude_of: |t| 1.0 - 0.5 * t,
/// };
/// let signal = sweep::generate(&params).unwrap();
/// assert_eq!(signal.len(), 4800);
/// ```
pub struct SweepParams<F, A>
where
    F: Fn(f64) -> f64,
    A: Fn(f64) -> f64,
{
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Signal duration in seconds.
    pub duration: f64,
    /// Instantaneous frequency in Hz at a given time.
    pub frequency_of: F,
    /// Instantaneous amplitude at a given time.
    pub amplitude_of: A,
}

impl<F, A> SweepParams<F, A>
where
    F: Fn(f64) -> f64,
    A: Fn(f64) -> f64,
{
    pub fn signal(&self) -> SignalParams {
        SignalParams::new(self.sample_rate, self.duration)
    }

    pub fn validate(&self) -> DspResult<()> {
        self.signal().validate()
    }

    pub fn sample_count(&self) -> usize {
        self.signal().sample_count()
    }
}
