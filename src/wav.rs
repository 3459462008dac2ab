//! # WAV Container Encoder
//!
//! Serializes mono PCM16 samples into the canonical 44-byte-header RIFF/WAVE
//! layout.

use std::io::{self, Write};

/// Size of the canonical PCM WAV header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

/// Output channel count; the pipeline always emits mono.
const NUM_CHANNELS: u16 = 1;

/// Output bit depth.
const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per frame: 1 channel x 16 bits / 8.
const BLOCK_ALIGN: u16 = 2;

/// Write a complete mono PCM16 WAV file to a writer.
///
/// Layout (all multi-byte integers little-endian):
///
/// | Offset | Field          | Value                 |
/// |--------|----------------|-----------------------|
/// | 0      | ChunkID        | "RIFF"                |
/// | 4      | ChunkSize      | 36 + dataSize         |
/// | 8      | Format         | "WAVE"                |
/// | 12     | Subchunk1ID    | "fmt "                |
/// | 16     | Subchunk1Size  | 16                    |
/// | 20     | AudioFormat    | 1 (PCM)               |
/// | 22     | NumChannels    | 1                     |
/// | 24     | SampleRate     | `sample_rate`         |
/// | 28     | ByteRate       | sample_rate * 2       |
/// | 32     | BlockAlign     | 2                     |
/// | 34     | BitsPerSample  | 16                    |
/// | 36     | Subchunk2ID    | "data"                |
/// | 40     | Subchunk2Size  | dataSize = 2 * N      |
/// | 44..   | payload        | N little-endian i16   |
///
/// An empty sample slice produces the 44-byte header-only file.
pub fn write_wav<W: Write>(writer: &mut W, pcm: &[i16], sample_rate: u32) -> io::Result<()> {
    let data_size = (pcm.len() * 2) as u32;
    let byte_rate = sample_rate * BLOCK_ALIGN as u32;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // audio format (1 = PCM)
    writer.write_all(&NUM_CHANNELS.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&BLOCK_ALIGN.to_le_bytes())?;
    writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    for &sample in pcm {
        writer.write_all(&sample.to_le_bytes())?;
    }

    Ok(())
}

/// Encode mono PCM16 samples as a WAV byte buffer of exactly `44 + 2 * N`
/// bytes.
pub fn encode_wav(pcm: &[i16], sample_rate: u32) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm.len() * 2);
    // Writing into a Vec cannot fail.
    let _ = write_wav(&mut buffer, pcm, sample_rate);
    buffer
}
