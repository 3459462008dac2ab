//! # Symphonia Decode Backend
//!
//! Decode Adapter implementation over the Symphonia library. Turns an
//! opaque compressed-audio byte buffer into planar f32 audio at the
//! decoding context's target rate.

use crate::convert::DecodeContext;
use crate::decoder::format_detector::FormatDetector;
use crate::decoder::sample_converter::SampleConverter;
use crate::error::{ConvertError, Result};
use crate::resample::resample_channels;
use crate::traits::{AudioBlob, DecodeBackend, DecodedAudio};
use async_trait::async_trait;
use std::io::Cursor;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use tracing::{debug, error, instrument, warn};

/// Decode backend backed by Symphonia's probe and codec registries.
///
/// The whole compressed buffer is demuxed and decoded in one pass:
/// - probe the container, guided by the advisory content type,
/// - select the first audio track,
/// - decode every packet into planar f32 channels,
/// - resample to the target rate when the source rate differs.
///
/// Isolated corrupted packets are skipped up to a configurable consecutive
/// cap; crossing the cap fails the call. No format needs to be known up
/// front, the probe recognizes the container from the bytes.
pub struct SymphoniaBackend {
    /// Consecutive corrupted packets tolerated before giving up.
    max_consecutive_errors: usize,
}

impl SymphoniaBackend {
    /// Create a backend with the given corrupted-packet tolerance.
    pub fn new(max_consecutive_errors: usize) -> Self {
        Self {
            max_consecutive_errors,
        }
    }

    /// Demux and decode the entire blob at its native rate.
    ///
    /// Returns the accumulated planar channels and the source sample rate
    /// reported by the decoder.
    fn decode_all(&self, blob: &AudioBlob) -> Result<(Vec<Vec<f32>>, u32)> {
        let hint = FormatDetector::hint_for(blob);
        let cursor = Cursor::new(blob.data.to_vec());
        let media_source = Box::new(cursor) as Box<dyn MediaSource>;
        let mss = MediaSourceStream::new(media_source, Default::default());

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| {
                error!("format probe failed: {}", e);
                ConvertError::InvalidFormat(format!("failed to probe format: {e}"))
            })?;

        let mut reader = probed.format;

        let track = reader
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| {
                error!("no supported audio tracks found");
                ConvertError::FormatNotDecodable("no supported audio tracks".to_string())
            })?;
        let track_id = track.id;
        debug!(track_id, "selected audio track");

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| {
                error!("failed to create decoder: {}", e);
                ConvertError::UnsupportedCodec(format!("failed to create codec decoder: {e}"))
            })?;

        let mut channels: Vec<Vec<f32>> = Vec::new();
        let mut source_rate = 0u32;
        let mut consecutive_errors = 0usize;

        loop {
            let packet = match reader.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    // Normal end of the in-memory stream.
                    break;
                }
                Err(SymphoniaError::ResetRequired) => {
                    warn!("track list changed mid-stream");
                    return Err(ConvertError::DecodingError(
                        "track list changed, reset required".to_string(),
                    ));
                }
                Err(e) => {
                    error!("fatal format reader error: {}", e);
                    return Err(ConvertError::DecodingError(format!(
                        "failed to read packet: {e}"
                    )));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => {
                    consecutive_errors = 0;

                    let spec = *decoded.spec();
                    source_rate = spec.rate;
                    let channel_count = spec.channels.count();

                    if channels.is_empty() {
                        channels = vec![Vec::new(); channel_count];
                    } else if channels.len() != channel_count {
                        return Err(ConvertError::CorruptedStream(format!(
                            "channel layout changed from {} to {}",
                            channels.len(),
                            channel_count
                        )));
                    }

                    SampleConverter::append_planar_f32(&decoded, &mut channels);
                }
                Err(SymphoniaError::DecodeError(e)) => {
                    // Invalid codec data in one packet; skip and keep going.
                    consecutive_errors += 1;
                    warn!(
                        "skipping corrupted packet ({}/{}): {}",
                        consecutive_errors, self.max_consecutive_errors, e
                    );

                    if consecutive_errors >= self.max_consecutive_errors {
                        error!("too many consecutive decode errors");
                        return Err(ConvertError::CorruptedStream(format!(
                            "stream corruption after {} failed packets",
                            self.max_consecutive_errors
                        )));
                    }
                }
                Err(SymphoniaError::IoError(e)) => {
                    consecutive_errors += 1;
                    warn!(
                        "skipping packet with I/O error ({}/{}): {}",
                        consecutive_errors, self.max_consecutive_errors, e
                    );

                    if consecutive_errors >= self.max_consecutive_errors {
                        error!("too many consecutive decode errors");
                        return Err(ConvertError::CorruptedStream(format!(
                            "stream corruption after {} failed packets",
                            self.max_consecutive_errors
                        )));
                    }
                }
                Err(e) => {
                    error!("fatal decode error: {}", e);
                    return Err(ConvertError::DecodingError(format!(
                        "failed to decode packet: {e}"
                    )));
                }
            }
        }

        if channels.is_empty() || channels.iter().all(Vec::is_empty) {
            return Err(ConvertError::EmptyStream);
        }
        if source_rate == 0 {
            return Err(ConvertError::InvalidFormat("missing sample rate".to_string()));
        }

        Ok((channels, source_rate))
    }
}

impl Default for SymphoniaBackend {
    fn default() -> Self {
        Self::new(10)
    }
}

#[async_trait]
impl DecodeBackend for SymphoniaBackend {
    #[instrument(skip(self, blob, ctx), fields(len = blob.len(), content_type = ?blob.content_type, target_rate = ctx.target_rate()))]
    async fn decode(&self, blob: &AudioBlob, ctx: &DecodeContext) -> Result<DecodedAudio> {
        if blob.is_empty() {
            return Err(ConvertError::EmptyStream);
        }

        let (channels, source_rate) = self.decode_all(blob)?;
        let frames = channels.first().map(Vec::len).unwrap_or(0);
        debug!(source_rate, frames, channels = channels.len(), "decode complete");

        let channels = resample_channels(channels, source_rate, ctx.target_rate())?;

        Ok(DecodedAudio::new(ctx.target_rate(), channels))
    }
}
