//! Ingestion boundary: turning decoded images into RGBA source bitmaps.

use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::ConvertError;

/// Canonical input to the pipeline: 8-bit RGBA, row-major.
pub type SourceBitmap = RgbaImage;

/// Convert any decoded image into a [`SourceBitmap`].
///
/// Every pixel format the decoder can produce maps onto RGBA8. Colour
/// channels are premultiplied by alpha, so transparent regions read as black.
pub fn canonicalize(img: &DynamicImage) -> SourceBitmap {
    let mut rgba = img.to_rgba8();
    for pixel in rgba.pixels_mut() {
        *pixel = premultiply(*pixel);
    }
    rgba
}

/// Scale the colour channels of a pixel by its alpha.
#[inline]
pub fn premultiply(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    if a == u8::MAX {
        return pixel;
    }
    let scale = |c: u8| ((c as u32 * a as u32 + 127) / 255) as u8;
    Rgba([scale(r), scale(g), scale(b), a])
}

/// Decode an in-memory PNG or JPEG.
pub fn decode(bytes: &[u8]) -> Result<SourceBitmap, ConvertError> {
    let img = image::load_from_memory(bytes)?;
    Ok(canonicalize(&img))
}

/// Read and decode an image file.
pub fn load(path: &Path) -> Result<SourceBitmap, ConvertError> {
    let img = image::open(path)?;
    log::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(canonicalize(&img))
}
