//! Resampling the source bitmap onto the planned grid.

use image::imageops::{self, FilterType};

use super::bitmap::SourceBitmap;
use super::dimensions::TargetGeometry;
use crate::error::ConvertError;

/// Filter used for every resize. Output columns are usually far fewer than
/// source pixels, and nearest/bilinear alias badly at that ratio.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Resize `source` to exactly `target.width x target.height`.
///
/// Fails if the source is empty or either target dimension is zero.
pub fn resample(source: &SourceBitmap, target: TargetGeometry) -> Result<SourceBitmap, ConvertError> {
    let refuse = |reason: &str| ConvertError::Resample {
        width: target.width,
        height: target.height,
        reason: reason.to_string(),
    };

    if source.width() == 0 || source.height() == 0 {
        return Err(refuse("source bitmap is empty"));
    }
    if target.width == 0 {
        return Err(refuse("target width is zero"));
    }
    if target.height == 0 {
        return Err(refuse("target height is zero"));
    }

    if source.dimensions() == (target.width, target.height) {
        return Ok(source.clone());
    }

    Ok(imageops::resize(source, target.width, target.height, FILTER))
}
