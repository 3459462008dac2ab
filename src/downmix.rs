//! # Downmixer
//!
//! Collapses decoded multichannel audio to a single mono channel.

use crate::traits::DecodedAudio;

/// Downmix decoded audio to mono.
///
/// Single-channel input passes through unchanged. For two or more channels
/// the output is the per-index arithmetic mean of channels 0 and 1; channels
/// beyond index 1 do not participate and are silently dropped. That
/// first-two-channels behavior is a known limitation of the conversion this
/// pipeline reproduces and is kept as-is.
///
/// Total over any channel count; an empty buffer yields an empty mono
/// buffer.
pub fn downmix(decoded: DecodedAudio) -> Vec<f32> {
    let mut channels = decoded.channels.into_iter();

    let first = match channels.next() {
        Some(first) => first,
        None => return Vec::new(),
    };

    match channels.next() {
        None => first,
        Some(second) => first
            .iter()
            .zip(second.iter())
            .map(|(left, right)| (left + right) / 2.0)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_passes_through() {
        let audio = DecodedAudio::new(16000, vec![vec![0.0, 1.0, -1.0]]);
        assert_eq!(downmix(audio), vec![0.0, 1.0, -1.0]);
    }

    #[test]
    fn stereo_averages() {
        let audio = DecodedAudio::new(16000, vec![vec![1.0, 1.0], vec![-1.0, -1.0]]);
        assert_eq!(downmix(audio), vec![0.0, 0.0]);
    }

    #[test]
    fn stereo_half_sum() {
        let audio = DecodedAudio::new(16000, vec![vec![0.5, 0.25], vec![0.5, 0.75]]);
        assert_eq!(downmix(audio), vec![0.5, 0.5]);
    }

    #[test]
    fn channels_past_index_one_are_ignored() {
        let audio = DecodedAudio::new(
            16000,
            vec![vec![1.0, 1.0], vec![-1.0, -1.0], vec![0.7, 0.7]],
        );
        assert_eq!(downmix(audio), vec![0.0, 0.0]);
    }

    #[test]
    fn empty_input() {
        assert!(downmix(DecodedAudio::new(16000, Vec::new())).is_empty());
        assert!(downmix(DecodedAudio::new(16000, vec![Vec::new()])).is_empty());
    }
}
