//! # Sample Format Converter
//!
//! Normalizes Symphonia's decoded audio buffers to planar f32 channels.

use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::conv::IntoSample;
use symphonia::core::sample::Sample;

/// Converts decoded Symphonia buffers into planar f32 samples.
///
/// Symphonia outputs audio in a range of sample formats (i8 through f64,
/// signed and unsigned, plus 24-bit). The pipeline works on per-channel f32
/// sequences nominally in [-1.0, 1.0], so every packet is appended here in
/// that shape.
pub struct SampleConverter;

impl SampleConverter {
    /// Append one decoded packet to the planar accumulator.
    ///
    /// `out` must hold exactly one `Vec` per channel of `buffer`; each
    /// channel's samples are converted to f32 and appended in order.
    pub fn append_planar_f32(buffer: &AudioBufferRef<'_>, out: &mut [Vec<f32>]) {
        match buffer {
            AudioBufferRef::U8(buf) => Self::extend(buf, out),
            AudioBufferRef::U16(buf) => Self::extend(buf, out),
            AudioBufferRef::U24(buf) => Self::extend(buf, out),
            AudioBufferRef::U32(buf) => Self::extend(buf, out),
            AudioBufferRef::S8(buf) => Self::extend(buf, out),
            AudioBufferRef::S16(buf) => Self::extend(buf, out),
            AudioBufferRef::S24(buf) => Self::extend(buf, out),
            AudioBufferRef::S32(buf) => Self::extend(buf, out),
            AudioBufferRef::F32(buf) => Self::extend(buf, out),
            AudioBufferRef::F64(buf) => Self::extend(buf, out),
        }
    }

    fn extend<T>(buf: &AudioBuffer<T>, out: &mut [Vec<f32>])
    where
        T: Sample + IntoSample<f32>,
    {
        for (chan_idx, dst) in out.iter_mut().enumerate() {
            dst.extend(buf.chan(chan_idx).iter().map(|&s| s.into_sample()));
        }
    }
}
