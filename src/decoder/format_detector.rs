//! # Format Detection
//!
//! Turns the caller's advisory content type into a Symphonia probe hint.

use crate::traits::AudioBlob;
use symphonia::core::probe::Hint;
use tracing::debug;

/// Builds probe hints from MIME content types.
///
/// The hint is advisory: Symphonia's probe still inspects the bytes, so a
/// wrong or missing content type only costs probe time, never correctness.
pub struct FormatDetector;

impl FormatDetector {
    /// Create a probe hint for a blob from its advisory content type.
    ///
    /// Browser recorders commonly attach codec parameters
    /// (`audio/webm;codecs=opus`); only the essence part is used.
    pub fn hint_for(blob: &AudioBlob) -> Hint {
        let mut hint = Hint::new();

        match blob.content_type.as_deref() {
            Some(content_type) => {
                let essence = content_type
                    .split(';')
                    .next()
                    .unwrap_or(content_type)
                    .trim();
                debug!(mime = essence, "setting probe hint from content type");
                hint.mime_type(essence);
                if let Some(extension) = Self::extension_for_mime(essence) {
                    hint.with_extension(extension);
                }
            }
            None => {
                debug!("no content type supplied, probe will auto-detect");
            }
        }

        hint
    }

    /// Map a MIME essence to the common container extension.
    fn extension_for_mime(mime: &str) -> Option<&'static str> {
        match mime {
            "audio/webm" | "video/webm" => Some("webm"),
            "audio/ogg" | "application/ogg" | "audio/opus" => Some("ogg"),
            "audio/mpeg" | "audio/mp3" => Some("mp3"),
            "audio/mp4" | "audio/aac" | "audio/x-m4a" => Some("m4a"),
            "audio/flac" | "audio/x-flac" => Some("flac"),
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some("wav"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_without_content_type() {
        let blob = AudioBlob::new(vec![0u8; 4]);
        let _hint = FormatDetector::hint_for(&blob);
        // Hint is opaque; building one from a bare blob must not panic.
    }

    #[test]
    fn hint_with_codec_parameters() {
        let blob = AudioBlob::new(vec![0u8; 4]).with_content_type("audio/webm;codecs=opus");
        let _hint = FormatDetector::hint_for(&blob);
    }

    #[test]
    fn extension_mapping() {
        assert_eq!(FormatDetector::extension_for_mime("audio/webm"), Some("webm"));
        assert_eq!(FormatDetector::extension_for_mime("audio/ogg"), Some("ogg"));
        assert_eq!(FormatDetector::extension_for_mime("audio/mpeg"), Some("mp3"));
        assert_eq!(FormatDetector::extension_for_mime("audio/wav"), Some("wav"));
        assert_eq!(FormatDetector::extension_for_mime("text/plain"), None);
    }
}
