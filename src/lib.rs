//! # speech-wav
//!
//! Normalizes browser-recorded speech audio into the canonical mono PCM16
//! WAV layout that speech-recognition services require.
//!
//! ## Overview
//!
//! Recording front ends hand over compressed audio in whatever container
//! and codec the platform produced (WebM, Ogg, MP3, ...), at an arbitrary
//! channel count and sample rate. Recognition services accept exactly one
//! shape: mono, 16-bit PCM, a fixed sample rate, a 44-byte canonical WAV
//! header. This crate is the pipeline between the two:
//!
//! decode (Symphonia, resampled to the target rate) → downmix to mono →
//! quantize to i16 → serialize as RIFF/WAVE.
//!
//! Each conversion is all-or-nothing: the caller gets a complete WAV byte
//! buffer or an error, never a partial blob. The decoding context acquired
//! per call is released on every exit path.
//!
//! ## Example
//!
//! ```rust,no_run
//! use speech_wav::convert_to_wav;
//!
//! # async fn example(recording: Vec<u8>) -> speech_wav::Result<()> {
//! let wav = convert_to_wav(recording, Some("audio/webm;codecs=opus"), 16000).await?;
//! assert_eq!(&wav[0..4], b"RIFF");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convert;
pub mod decoder;
pub mod downmix;
pub mod error;
pub mod quantize;
pub mod resample;
pub mod traits;
pub mod wav;

pub use config::ConvertConfig;
pub use convert::{convert_to_wav, with_decoding_context, DecodeContext, WavConverter};
pub use decoder::SymphoniaBackend;
pub use downmix::downmix;
pub use error::{ConvertError, Result};
pub use quantize::quantize;
pub use traits::{AudioBlob, DecodeBackend, DecodedAudio};
pub use wav::{encode_wav, write_wav, WAV_HEADER_LEN};
