//! # Conversion Pipeline
//!
//! The decoding context scope and the front door that wires the stages
//! together: decode → downmix → quantize → encode.

use crate::config::ConvertConfig;
use crate::decoder::SymphoniaBackend;
use crate::error::{ConvertError, Result};
use crate::traits::{AudioBlob, DecodeBackend};
use crate::{downmix, quantize, wav};
use std::future::Future;
use tracing::{debug, instrument};

/// Ceiling on the target rate a context can be acquired for.
const MAX_TARGET_RATE: u32 = 384_000;

/// Handle to an acquired decoding context.
///
/// One context is acquired per conversion call and configured with the
/// target output rate. Release happens in `Drop`, so it runs on every exit
/// path: success, error propagation, panic unwind, or cancellation of the
/// future holding it.
#[derive(Debug)]
pub struct DecodeContext {
    target_rate: u32,
}

impl DecodeContext {
    /// Acquire a decoding context configured for `target_rate` Hz.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidRate`] when the rate is zero or
    /// beyond the supported ceiling.
    pub fn acquire(target_rate: u32) -> Result<Self> {
        if target_rate == 0 || target_rate > MAX_TARGET_RATE {
            return Err(ConvertError::InvalidRate(target_rate));
        }
        debug!(target_rate, "decoding context acquired");
        Ok(Self { target_rate })
    }

    /// The output sample rate this context was acquired for.
    pub fn target_rate(&self) -> u32 {
        self.target_rate
    }
}

impl Drop for DecodeContext {
    fn drop(&mut self) {
        debug!(target_rate = self.target_rate, "decoding context released");
    }
}

/// Run `body` with a decoding context acquired for `target_rate`.
///
/// The context is released whether the body returns, fails, or its future
/// is dropped mid-flight. Acquisition failure is returned without running
/// the body.
pub async fn with_decoding_context<T, Fut>(
    target_rate: u32,
    body: impl FnOnce(DecodeContext) -> Fut,
) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    let ctx = DecodeContext::acquire(target_rate)?;
    body(ctx).await
}

/// Converts compressed speech audio into canonical mono PCM16 WAV.
///
/// Each call to [`convert`](WavConverter::convert) is one independent flow
/// with no shared mutable state, so a single converter can serve concurrent
/// calls. No retries, caching, or timeouts happen internally; a failed
/// decode is terminal for that call and never yields a partial blob.
pub struct WavConverter<B = SymphoniaBackend> {
    backend: B,
    config: ConvertConfig,
}

impl WavConverter<SymphoniaBackend> {
    /// Build a converter over the Symphonia backend from configuration.
    pub fn from_config(config: ConvertConfig) -> Self {
        let backend = SymphoniaBackend::new(config.max_consecutive_decode_errors);
        Self { backend, config }
    }
}

impl<B: DecodeBackend> WavConverter<B> {
    /// Build a converter over a caller-supplied decode backend.
    pub fn new(backend: B, config: ConvertConfig) -> Self {
        Self { backend, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert one compressed blob to a WAV byte buffer.
    ///
    /// The output is exactly `44 + 2 * N` bytes: the canonical mono PCM16
    /// header followed by N little-endian samples at the configured target
    /// rate. Identical input bytes and configuration always produce
    /// byte-identical output.
    #[instrument(skip(self, blob), fields(len = blob.len()))]
    pub async fn convert(&self, blob: &AudioBlob) -> Result<Vec<u8>> {
        with_decoding_context(self.config.target_sample_rate, |ctx| async move {
            let decoded = self.backend.decode(blob, &ctx).await?;
            debug!(
                frames = decoded.frames(),
                channels = decoded.channel_count(),
                "decoded audio"
            );

            let mono = downmix::downmix(decoded);
            let pcm = quantize::quantize(&mono);
            Ok(wav::encode_wav(&pcm, ctx.target_rate()))
        })
        .await
    }
}

/// One-shot conversion over the Symphonia backend.
///
/// Convenience for callers that do not hold a converter: builds a default
/// configuration at `target_rate` and converts a single blob.
pub async fn convert_to_wav(
    data: impl Into<bytes::Bytes>,
    content_type: Option<&str>,
    target_rate: u32,
) -> Result<Vec<u8>> {
    let config = ConvertConfig {
        target_sample_rate: target_rate,
        ..ConvertConfig::default()
    };
    let converter = WavConverter::from_config(config);

    let mut blob = AudioBlob::new(data);
    if let Some(content_type) = content_type {
        blob = blob.with_content_type(content_type);
    }

    converter.convert(&blob).await
}
