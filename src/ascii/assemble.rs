//! Row-major assembly of glyph cells with explicit end-of-row markers.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::bitmap::SourceBitmap;
use super::color::{resolve_color, PixelColor};
use super::mapping::map_glyph;

/// Glyph string a row sentinel serializes with.
pub const ROW_END_MARKER: &str = "enter";

/// One output cell: a glyph and the colour to draw it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelUnit {
    pub glyph: char,
    pub color: PixelColor,
}

/// An entry of the flat output sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Pixel(PixelUnit),
    /// Marks the end of a scanline.
    RowEnd,
}

impl Cell {
    pub fn is_row_end(&self) -> bool {
        matches!(self, Cell::RowEnd)
    }

    pub fn as_pixel(&self) -> Option<&PixelUnit> {
        match self {
            Cell::Pixel(unit) => Some(unit),
            Cell::RowEnd => None,
        }
    }

    /// Colour carried by this entry. Sentinels are black.
    pub fn color(&self) -> PixelColor {
        match self {
            Cell::Pixel(unit) => unit.color,
            Cell::RowEnd => PixelColor::BLACK,
        }
    }
}

// Both variants share the `{glyph, color}` record shape.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        let glyph: &str = match self {
            Cell::Pixel(unit) => unit.glyph.encode_utf8(&mut buf),
            Cell::RowEnd => ROW_END_MARKER,
        };
        let mut record = serializer.serialize_struct("Cell", 2)?;
        record.serialize_field("glyph", glyph)?;
        record.serialize_field("color", &self.color())?;
        record.end()
    }
}

/// The complete result of one conversion.
///
/// Rows are delimited only by [`Cell::RowEnd`]; no width or height is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    cells: Vec<Cell>,
}

impl ConversionResult {
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows, i.e. the number of sentinels.
    pub fn row_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_row_end()).count()
    }

    /// Iterate over the glyph cells of each row, split at the sentinels.
    ///
    /// Cells after the last sentinel (if any) are not a complete row and are skipped.
    pub fn rows(&self) -> impl Iterator<Item = Vec<PixelUnit>> + '_ {
        let mut rest = self.cells.as_slice();
        std::iter::from_fn(move || {
            let end = rest.iter().position(Cell::is_row_end)?;
            let row = rest[..end].iter().filter_map(Cell::as_pixel).copied().collect();
            rest = &rest[end + 1..];
            Some(row)
        })
    }
}

impl Serialize for ConversionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cells.serialize(serializer)
    }
}

/// Map every pixel of an already-resampled bitmap to a cell.
///
/// Emits the pixels of row 0 left to right, a sentinel, then row 1, and so on.
pub fn assemble(bitmap: &SourceBitmap, brightness: f64) -> ConversionResult {
    let (width, height) = bitmap.dimensions();
    let mut cells = Vec::with_capacity(width as usize * height as usize + height as usize);

    for y in 0..height {
        for x in 0..width {
            let [r, g, b, _] = bitmap.get_pixel(x, y).0;
            let glyph = map_glyph(r, g, b, brightness);
            let color = resolve_color(r, g, b, brightness, glyph);
            cells.push(Cell::Pixel(PixelUnit { glyph, color }));
        }
        cells.push(Cell::RowEnd);
    }

    ConversionResult { cells }
}
