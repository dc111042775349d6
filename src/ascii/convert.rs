//! Single-call conversion pipeline.

use super::assemble::{assemble, ConversionResult};
use super::bitmap::SourceBitmap;
use super::dimensions::{plan, VerticalCompression};
use super::resample::resample;
use crate::error::ConvertError;

/// Default output width in glyph cells.
pub const DEFAULT_COLUMNS: u32 = 100;

/// Default brightness multiplier.
pub const DEFAULT_BRIGHTNESS: f64 = 1.0;

/// Caller-supplied conversion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    /// Requested output width. Clamped to `[1, 1000]`, never rejected.
    pub columns: i64,
    /// Multiplier for luma and colour channels. Unbounded.
    pub brightness: f64,
    pub compression: VerticalCompression,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS as i64,
            brightness: DEFAULT_BRIGHTNESS,
            compression: VerticalCompression::default(),
        }
    }
}

/// Convert a bitmap into a flat sequence of glyph cells and row sentinels.
///
/// Plans the grid from the source size, resamples with Lanczos3, then maps
/// each pixel to a glyph and colour. Either the whole result is returned or
/// an error is, never a partial sequence.
pub fn convert(source: &SourceBitmap, options: &ConvertOptions) -> Result<ConversionResult, ConvertError> {
    let (src_w, src_h) = source.dimensions();
    let geometry = plan(src_w, src_h, options.columns, options.compression)?;
    let resampled = resample(source, geometry)?;
    let result = assemble(&resampled, options.brightness);

    log::info!(
        "Converted {}x{} image to {}x{} glyphs (brightness {})",
        src_w,
        src_h,
        geometry.width,
        geometry.height,
        options.brightness
    );

    Ok(result)
}
