//! # Conversion Error Types
//!
//! Error types for the audio-to-WAV conversion pipeline.

use thiserror::Error;

/// Errors that can occur while converting compressed audio to WAV.
#[derive(Error, Debug)]
pub enum ConvertError {
    // ========================================================================
    // Decode Errors (bad or unrecognizable input)
    // ========================================================================
    /// Audio container is not recognized or cannot be parsed.
    #[error("Unsupported or invalid audio format: {0}")]
    InvalidFormat(String),

    /// Codec is not supported by the decoder build.
    #[error("Unsupported codec: {0}")]
    UnsupportedCodec(String),

    /// Container was recognized but contains nothing decodable.
    #[error("Cannot decode audio format: {0}")]
    FormatNotDecodable(String),

    /// Error occurred during audio decoding.
    #[error("Decoding error: {0}")]
    DecodingError(String),

    /// Audio stream is corrupted or contains invalid data.
    #[error("Corrupted audio stream: {0}")]
    CorruptedStream(String),

    /// Input buffer is empty or decoded to zero audio frames.
    #[error("Audio stream contains no audio data")]
    EmptyStream,

    // ========================================================================
    // Resource Errors (decoding context could not be obtained or driven)
    // ========================================================================
    /// Decoding context could not be acquired.
    #[error("Decoding context unavailable: {0}")]
    ResourceUnavailable(String),

    /// Requested target sample rate is out of range.
    #[error("Invalid target sample rate: {0} Hz")]
    InvalidRate(u32),

    /// Rate conversion inside the decode stage failed.
    #[error("Resampling failed: {0}")]
    ResampleFailed(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConvertError {
    /// Returns `true` if the input bytes were unrecognized, corrupted, or
    /// otherwise undecodable. Terminal for the call; retrying with the same
    /// bytes cannot succeed.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidFormat(_)
                | ConvertError::UnsupportedCodec(_)
                | ConvertError::FormatNotDecodable(_)
                | ConvertError::DecodingError(_)
                | ConvertError::CorruptedStream(_)
                | ConvertError::EmptyStream
        )
    }

    /// Returns `true` if the decoding context could not be acquired or
    /// operated, independent of the input bytes.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            ConvertError::ResourceUnavailable(_)
                | ConvertError::InvalidRate(_)
                | ConvertError::ResampleFailed(_)
        )
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
