//! # Decode Stage
//!
//! Format detection, the Symphonia-backed decode adapter, and sample
//! format normalization.

pub mod format_detector;
pub mod sample_converter;
pub mod symphonia;

pub use format_detector::FormatDetector;
pub use sample_converter::SampleConverter;
pub use self::symphonia::SymphoniaBackend;
