//! Target geometry planning for aspect-ratio-preserving conversion.

use crate::error::ConvertError;

/// Smallest accepted column count.
pub const MIN_COLUMNS: u32 = 1;

/// Largest accepted column count.
pub const MAX_COLUMNS: u32 = 1000;

/// Glyph cells are drawn 1.5x taller than a source pixel is wide.
pub const CELL_ASPECT: f64 = 1.5;

/// Extra vertical squash applied on top of [`CELL_ASPECT`].
///
/// Terminal character cells are roughly twice as tall as wide, so output meant
/// for a terminal needs half the rows to avoid a stretched picture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VerticalCompression {
    #[default]
    Standard,
    Terminal,
}

impl VerticalCompression {
    /// Multiplier applied to the planned height.
    pub fn factor(&self) -> f64 {
        match self {
            VerticalCompression::Standard => 1.0,
            VerticalCompression::Terminal => 0.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VerticalCompression::Standard => "standard",
            VerticalCompression::Terminal => "terminal",
        }
    }
}

/// Output grid size in glyph cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGeometry {
    pub width: u32,
    pub height: u32,
}

impl TargetGeometry {
    /// Number of entries a conversion at this size produces, sentinels included.
    pub fn output_len(&self) -> usize {
        let (w, h) = (self.width as usize, self.height as usize);
        w * h + h
    }
}

/// Coerce a requested column count into `[MIN_COLUMNS, MAX_COLUMNS]`.
///
/// Out-of-range values are never rejected.
pub fn clamp_columns(requested: i64) -> u32 {
    let clamped = requested.clamp(MIN_COLUMNS as i64, MAX_COLUMNS as i64) as u32;
    if clamped as i64 != requested {
        log::debug!("Requested {} columns, using {}", requested, clamped);
    }
    clamped
}

/// Plan the output grid for a source image.
///
/// The width is the clamped column count. The height follows the source
/// aspect ratio, divided by [`CELL_ASPECT`] and scaled by the compression
/// factor, then truncated toward zero. A very wide source can therefore plan
/// zero rows; the resampler rejects that.
///
/// # Example
/// ```
/// use glyphcast::ascii::{plan, VerticalCompression};
///
/// let geometry = plan(640, 480, 120, VerticalCompression::Standard).unwrap();
/// assert_eq!((geometry.width, geometry.height), (120, 60));
/// ```
pub fn plan(
    source_width: u32,
    source_height: u32,
    requested_columns: i64,
    compression: VerticalCompression,
) -> Result<TargetGeometry, ConvertError> {
    if source_width == 0 || source_height == 0 {
        return Err(ConvertError::InvalidDimension {
            width: source_width,
            height: source_height,
        });
    }

    let width = clamp_columns(requested_columns);
    let ratio = source_height as f64 / source_width as f64;
    let height = (width as f64 / CELL_ASPECT * ratio * compression.factor()) as u32;

    log::debug!(
        "Planned {}x{} grid for {}x{} source ({} compression)",
        width,
        height,
        source_width,
        source_height,
        compression.name()
    );

    Ok(TargetGeometry { width, height })
}
