//! # Rate Conversion
//!
//! Whole-buffer sinc resampling used by the decode stage when the source
//! material's native rate differs from the target rate. Symphonia decodes at
//! the container's rate, so the decode stage carries this step itself; the
//! rate written into the WAV header therefore always matches the payload.

use crate::error::{ConvertError, Result};
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use tracing::debug;

/// Resample planar channels from `source_rate` to `target_rate`.
///
/// Identity rates and empty buffers pass through untouched, keeping no-op
/// conversions bit-transparent. All channels are resampled together so their
/// lengths stay equal.
pub fn resample_channels(
    channels: Vec<Vec<f32>>,
    source_rate: u32,
    target_rate: u32,
) -> Result<Vec<Vec<f32>>> {
    if source_rate == target_rate {
        return Ok(channels);
    }

    let frames = channels.first().map(Vec::len).unwrap_or(0);
    if frames == 0 {
        return Ok(channels);
    }

    debug!(
        source_rate,
        target_rate,
        frames,
        channels = channels.len(),
        "resampling decoded audio"
    );

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(
        target_rate as f64 / source_rate as f64,
        2.0,
        params,
        frames,
        channels.len(),
    )
    .map_err(|e| ConvertError::ResampleFailed(e.to_string()))?;

    resampler
        .process(&channels, None)
        .map_err(|e| ConvertError::ResampleFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rate_passes_through() {
        let channels = vec![vec![0.1f32, 0.2, 0.3]];
        let out = resample_channels(channels.clone(), 16000, 16000).unwrap();
        assert_eq!(out, channels);
    }

    #[test]
    fn empty_buffer_passes_through() {
        let out = resample_channels(vec![Vec::new()], 48000, 16000).unwrap();
        assert_eq!(out, vec![Vec::<f32>::new()]);
    }

    #[test]
    fn downsample_shrinks_buffer() {
        let input = vec![vec![0.0f32; 48000], vec![0.0f32; 48000]];
        let out = resample_channels(input, 48000, 16000).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].len(), out[1].len());
        // One second of audio; sinc latency trims a small margin.
        let frames = out[0].len() as i64;
        assert!((frames - 16000).abs() < 1600, "got {frames} frames");
    }

    #[test]
    fn upsample_grows_buffer() {
        let input = vec![vec![0.0f32; 8000]];
        let out = resample_channels(input, 8000, 16000).unwrap();
        let frames = out[0].len() as i64;
        assert!((frames - 16000).abs() < 1600, "got {frames} frames");
    }
}
