//! Per-cell colour resolution.

use serde::Serialize;

use super::charset::LIGHTEST_GLYPH;

/// RGB colour for a glyph cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelColor {
    pub const BLACK: PixelColor = PixelColor { r: 0, g: 0, b: 0 };
    pub const WHITE: PixelColor = PixelColor {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Multiply a channel by the brightness factor, rounding and clamping to `[0, 255]`.
///
/// Unlike luma scaling the lower bound here is 0.
#[inline]
pub fn scale_channel(channel: u8, brightness: f64) -> u8 {
    let scaled = (channel as f64 * brightness).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 255.0) as u8
}

/// Colour for a cell that was assigned `glyph`.
///
/// Cells on the blank glyph are forced to white so that near-black pixels
/// don't leave dark specks on a light background.
pub fn resolve_color(r: u8, g: u8, b: u8, brightness: f64, glyph: char) -> PixelColor {
    if glyph == LIGHTEST_GLYPH {
        return PixelColor::WHITE;
    }
    PixelColor {
        r: scale_channel(r, brightness),
        g: scale_channel(g, brightness),
        b: scale_channel(b, brightness),
    }
}
