//! Fixed-layout byte encoding of complex samples.
//!
//! Wire layout: for each sample, the real component then the imaginary
//! component, each an 8-byte little-endian IEEE-754 double. Every sample
//! therefore occupies exactly [`BYTES_PER_SAMPLE`] bytes and a signal of
//! `n` samples encodes to exactly `16 · n` bytes, with no header or
//! padding. Decoding is the exact inverse; for finite values the round
//! trip is bit-exact.

use std::io::{self, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

use crate::dsp::IQSample;

/// Encoded size of one complex sample: two little-endian f64 values.
pub const BYTES_PER_SAMPLE: usize = 16;

/// Errors produced by the sample codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The byte sink refused further data. Encoding is deterministic, so
    /// this is not retried.
    #[error("byte sink rejected write: {0}")]
    Write(#[from] io::Error),

    /// The input of a decode was not a whole number of 16-byte sample
    /// frames.
    #[error("truncated sample frame: {0} bytes is not a multiple of 16")]
    TruncatedFrame(usize),
}

/// Encode a signal into a freshly allocated buffer.
///
/// Growth of the in-memory buffer cannot fail; the `Result` exists because
/// the same path serves bounded sinks through [`encode_into`].
pub fn encode(signal: &[IQSample]) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Vec::with_capacity(signal.len() * BYTES_PER_SAMPLE);
    encode_into(signal, &mut buffer)?;
    Ok(buffer)
}

/// Encode a signal into an arbitrary byte sink.
///
/// A sink with bounded capacity (a fixed slice, a full pipe) surfaces its
/// refusal as [`CodecError::Write`].
pub fn encode_into<W: Write>(signal: &[IQSample], mut sink: W) -> Result<(), CodecError> {
    for sample in signal {
        sink.write_f64::<LittleEndian>(sample.re)?;
        sink.write_f64::<LittleEndian>(sample.im)?;
    }
    Ok(())
}

/// Decode an encoded byte buffer back into complex samples.
pub fn decode(bytes: &[u8]) -> Result<Vec<IQSample>, CodecError> {
    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(CodecError::TruncatedFrame(bytes.len()));
    }

    let mut samples = Vec::with_capacity(bytes.len() / BYTES_PER_SAMPLE);
    let mut cursor = bytes;
    while !cursor.is_empty() {
        let re = cursor.read_f64::<LittleEndian>()?;
        let im = cursor.read_f64::<LittleEndian>()?;
        samples.push(IQSample::new(re, im));
    }

    Ok(samples)
}
