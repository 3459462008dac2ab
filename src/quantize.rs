//! # Quantizer
//!
//! Maps normalized f32 samples to signed 16-bit PCM.

/// Quantize mono f32 samples to signed 16-bit PCM.
///
/// Per sample: NaN becomes 0, the value is clamped to [-1.0, 1.0], then
/// scaled by 32768 when negative and 32767 otherwise (the signed 16-bit
/// range is asymmetric), and finally truncated toward zero. Truncation, not
/// rounding, is the contract: `0.5` maps to `16383`, `-0.5` to `-16384`.
///
/// Total over any f32 input, finite or not.
pub fn quantize(mono: &[f32]) -> Vec<i16> {
    mono.iter().map(|&sample| quantize_sample(sample)).collect()
}

fn quantize_sample(sample: f32) -> i16 {
    // NaN has no meaningful amplitude; treat it as silence.
    let sample = if sample.is_nan() { 0.0 } else { sample };
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled.trunc() as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(quantize(&[0.0, 1.0, -1.0]), vec![0, 32767, -32768]);
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(quantize(&[2.5]), vec![32767]);
        assert_eq!(quantize(&[-2.5]), vec![-32768]);
        assert_eq!(quantize(&[f32::INFINITY, f32::NEG_INFINITY]), vec![32767, -32768]);
    }

    #[test]
    fn nan_is_silence() {
        assert_eq!(quantize(&[f32::NAN]), vec![0]);
    }

    #[test]
    fn truncates_toward_zero() {
        // 0.5 * 32767 = 16383.5; rounding would give 16384.
        assert_eq!(quantize(&[0.5]), vec![16383]);
        // -0.5 * 32768 = -16384 exactly.
        assert_eq!(quantize(&[-0.5]), vec![-16384]);
    }

    #[test]
    fn asymmetric_scale() {
        // The same magnitude maps through different scale factors by sign.
        assert_eq!(quantize(&[0.25]), vec![8191]); // 8191.75 truncated
        assert_eq!(quantize(&[-0.25]), vec![-8192]);
    }

    #[test]
    fn empty_input() {
        assert!(quantize(&[]).is_empty());
    }
}
