//! Error types for the conversion pipeline.

/// Errors that can occur while converting a bitmap to glyphs.
///
/// A failed conversion never yields partial output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid source dimensions {width}x{height}: both must be positive")]
    InvalidDimension {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
    },

    #[error("Cannot resample to {width}x{height}: {reason}")]
    Resample {
        /// Requested target width
        width: u32,
        /// Requested target height
        height: u32,
        /// Why the resize was refused
        reason: String,
    },

    #[error("Image could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
}
