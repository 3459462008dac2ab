//! Integration tests for the Symphonia decode backend.
//!
//! These run the real probe/decode path. WAV is used as the test input
//! container because the crate's own encoder can produce it exactly, which
//! gives a fixture-free end to end check.

#![cfg(feature = "decoder-wav")]

use speech_wav::{convert_to_wav, encode_wav, AudioBlob, ConvertConfig, WavConverter};

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn pcm_samples(wav: &[u8]) -> Vec<i16> {
    wav[44..]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// 440 Hz sine at about half amplitude.
fn sine_pcm(rate: u32, frames: usize) -> Vec<i16> {
    (0..frames)
        .map(|i| {
            let t = i as f32 / rate as f32;
            let s = (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5;
            (s * 32767.0) as i16
        })
        .collect()
}

#[tokio::test]
async fn garbage_bytes_are_rejected() {
    let err = convert_to_wav(vec![0xAB; 64], None, 16000).await.unwrap_err();
    assert!(err.is_decode_error());
}

#[tokio::test]
async fn empty_input_is_rejected() {
    let err = convert_to_wav(Vec::new(), Some("audio/webm"), 16000)
        .await
        .unwrap_err();
    assert!(err.is_decode_error());
}

#[tokio::test]
async fn wav_input_converts_end_to_end() {
    let pcm = sine_pcm(16000, 1600);
    let input = encode_wav(&pcm, 16000);

    let converter = WavConverter::from_config(ConvertConfig::default());
    let blob = AudioBlob::new(input).with_content_type("audio/wav");
    let out = converter.convert(&blob).await.unwrap();

    assert_eq!(out.len(), 44 + 2 * 1600);
    assert_eq!(u32_at(&out, 24), 16000);

    // PCM16 → f32 → PCM16 loses at most one LSB on positive samples
    // (the decode normalizes by 32768, the quantizer scales by 32767).
    let out_pcm = pcm_samples(&out);
    assert_eq!(out_pcm.len(), pcm.len());
    for (&a, &b) in pcm.iter().zip(out_pcm.iter()) {
        assert!((a as i32 - b as i32).abs() <= 1, "sample drifted: {a} vs {b}");
    }
}

#[tokio::test]
async fn mislabeled_content_type_still_decodes() {
    // The content type is advisory; the probe recognizes the real container.
    let input = encode_wav(&sine_pcm(16000, 320), 16000);
    let out = convert_to_wav(input, Some("audio/webm"), 16000).await.unwrap();
    assert_eq!(out.len(), 44 + 2 * 320);
}

#[tokio::test]
async fn source_rate_mismatch_is_resampled() {
    // One second at 48 kHz in, 16 kHz target out.
    let input = encode_wav(&sine_pcm(48000, 48000), 48000);
    let out = convert_to_wav(input, Some("audio/wav"), 16000).await.unwrap();

    assert_eq!(u32_at(&out, 24), 16000);

    let frames = (out.len() - 44) / 2;
    let drift = (frames as i64 - 16000).abs();
    assert!(drift < 1600, "expected about 16000 frames, got {frames}");
}

#[tokio::test]
async fn header_only_wav_has_no_audio() {
    let input = encode_wav(&[], 16000);
    let err = convert_to_wav(input, Some("audio/wav"), 16000)
        .await
        .unwrap_err();
    assert!(err.is_decode_error());
}

#[tokio::test]
async fn real_backend_is_deterministic() {
    let input = encode_wav(&sine_pcm(16000, 800), 16000);
    let first = convert_to_wav(input.clone(), Some("audio/wav"), 16000)
        .await
        .unwrap();
    let second = convert_to_wav(input, Some("audio/wav"), 16000).await.unwrap();
    assert_eq!(first, second);
}
