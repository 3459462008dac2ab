//! # Core Conversion Types and Traits
//!
//! Defines the data that flows through the pipeline and the capability
//! trait the decode stage is implemented behind.
//!
//! Each pipeline stage consumes its predecessor's output by value and
//! produces a new buffer; nothing is shared or mutated after hand-off.

use crate::convert::DecodeContext;
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Compressed audio input: opaque bytes plus an advisory content type.
///
/// The content type (e.g. `audio/webm;codecs=opus`) is a hint only; the
/// decode stage probes the bytes and handles mislabeled input.
#[derive(Debug, Clone)]
pub struct AudioBlob {
    /// Raw compressed audio data (encoded format, not PCM).
    pub data: Bytes,
    /// Advisory MIME content type supplied by the recording side.
    pub content_type: Option<String>,
}

impl AudioBlob {
    /// Create a blob with no content-type hint.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
        }
    }

    /// Attach an advisory content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Size of the compressed payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Decoded multichannel audio in planar layout.
///
/// Every channel holds the same number of frames; samples are nominally in
/// [-1.0, 1.0], values outside are legal and clamped during quantization.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    /// Sample rate of the samples in `channels`, in Hz.
    pub sample_rate: u32,
    /// One sample sequence per channel, all of equal length.
    pub channels: Vec<Vec<f32>>,
}

impl DecodedAudio {
    /// Create a decoded buffer.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }
}

/// Capability trait for the platform audio-decoding facility.
///
/// Implementations turn opaque compressed bytes into planar f32 audio at
/// the rate the [`DecodeContext`] was acquired for. This is the seam that
/// keeps the pure pipeline stages independent of the decode platform, and
/// `decode` is the pipeline's only suspension point.
///
/// # Errors
///
/// Implementations return decode-kind errors for unrecognized or corrupted
/// input and resource-kind errors when the decode machinery itself fails;
/// see [`ConvertError`](crate::ConvertError) classifiers. Failures are
/// terminal for the call; there is no internal retry.
#[async_trait]
pub trait DecodeBackend: Send + Sync {
    /// Decode a compressed blob into planar audio at the context's target
    /// rate.
    async fn decode(&self, blob: &AudioBlob, ctx: &DecodeContext) -> Result<DecodedAudio>;
}
