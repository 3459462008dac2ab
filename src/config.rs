//! # Conversion Configuration
//!
//! Configuration types for the audio-to-WAV conversion pipeline.

use serde::{Deserialize, Serialize};

/// Conversion pipeline configuration.
///
/// Controls the target output rate and decode-stage error tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Output sample rate in Hz. The decode stage delivers audio at this
    /// rate, resampling when the source material differs.
    ///
    /// Default: 16000 (wideband speech, the rate recognition services
    /// commonly require).
    #[serde(default = "default_target_sample_rate")]
    pub target_sample_rate: u32,

    /// Number of consecutive corrupted packets tolerated during decode
    /// before the call fails.
    ///
    /// Default: 10.
    #[serde(default = "default_max_consecutive_decode_errors")]
    pub max_consecutive_decode_errors: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            target_sample_rate: default_target_sample_rate(),
            max_consecutive_decode_errors: default_max_consecutive_decode_errors(),
        }
    }
}

impl ConvertConfig {
    /// Configuration for narrowband telephony recognition (8 kHz).
    pub fn telephony() -> Self {
        Self {
            target_sample_rate: 8000,
            ..Self::default()
        }
    }
}

fn default_target_sample_rate() -> u32 {
    16000
}

fn default_max_consecutive_decode_errors() -> usize {
    10
}
