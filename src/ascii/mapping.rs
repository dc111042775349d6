//! Brightness to glyph mapping.

use super::charset::{GLYPH_RAMP, RAMP_LEN};

/// Lowest scaled luma. Keeps the quantized level off zero.
pub const MIN_SCALED_LUMA: u8 = 1;

/// Highest scaled luma.
pub const MAX_SCALED_LUMA: u8 = 255;

/// Unweighted mean of the colour channels.
///
/// This is deliberately not a perceptual (BT.601/709) weighting.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0
}

/// Apply the brightness multiplier to a luma value and clamp to `[1, 255]`.
///
/// The multiplier is unbounded; negative and NaN values land on the lower bound.
#[inline]
pub fn scale_luma(luma: f64, brightness: f64) -> u8 {
    let scaled = (luma * brightness).round();
    if scaled.is_nan() {
        return MIN_SCALED_LUMA;
    }
    scaled.clamp(MIN_SCALED_LUMA as f64, MAX_SCALED_LUMA as f64) as u8
}

/// Quantize a scaled luma onto the ramp: `round(scaled / 255 * 64)`.
#[inline]
pub fn glyph_index(scaled: u8) -> usize {
    let steps = (RAMP_LEN - 1) as f64;
    let index = (scaled as f64 / MAX_SCALED_LUMA as f64 * steps).round() as usize;
    index.min(RAMP_LEN - 1)
}

/// Ramp index for a pixel at the given brightness multiplier.
#[inline]
pub fn pixel_index(r: u8, g: u8, b: u8, brightness: f64) -> usize {
    glyph_index(scale_luma(luma(r, g, b), brightness))
}

/// Glyph for a pixel at the given brightness multiplier.
#[inline]
pub fn map_glyph(r: u8, g: u8, b: u8, brightness: f64) -> char {
    GLYPH_RAMP[pixel_index(r, g, b, brightness)]
}
