//! Image to coloured glyph conversion.
//!
//! The pipeline runs in four stages:
//!
//! 1. **Geometry planning** - clamp the column count and derive the row count
//!    from the source aspect ratio
//! 2. **Resampling** - Lanczos3 resize onto the planned grid
//! 3. **Glyph mapping** - average the channels, apply the brightness factor and
//!    quantize onto the 65-entry [`GLYPH_RAMP`]
//! 4. **Colour resolution and assembly** - scale each pixel's colour and emit
//!    cells row by row, closing every row with [`Cell::RowEnd`]
//!
//! [`convert`] runs all four. Each call owns its intermediate buffers, so
//! conversions can run concurrently without coordination.

mod assemble;
mod bitmap;
mod charset;
mod color;
mod convert;
mod dimensions;
mod mapping;
mod resample;

pub use assemble::{assemble, Cell, ConversionResult, PixelUnit, ROW_END_MARKER};
pub use bitmap::{canonicalize, decode, load, premultiply, SourceBitmap};
pub use charset::{glyph_at, index_of, DENSEST_GLYPH, GLYPH_RAMP, LIGHTEST_GLYPH, RAMP_LEN};
pub use color::{resolve_color, scale_channel, PixelColor};
pub use convert::{convert, ConvertOptions, DEFAULT_BRIGHTNESS, DEFAULT_COLUMNS};
pub use dimensions::{
    clamp_columns, plan, TargetGeometry, VerticalCompression, CELL_ASPECT, MAX_COLUMNS,
    MIN_COLUMNS,
};
pub use mapping::{
    glyph_index, luma, map_glyph, pixel_index, scale_luma, MAX_SCALED_LUMA, MIN_SCALED_LUMA,
};
pub use resample::{resample, FILTER};
