//! Output encoders for a conversion result.

use crate::ascii::{Cell, ConversionResult};

/// Encoding used when writing a [`ConversionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Array of `{glyph, color: {r, g, b}}` records, sentinels included
    Json,
    /// Glyphs with 24-bit ANSI foreground colours
    #[default]
    Ansi,
    /// Glyphs only, one line per row
    Text,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Text => "text",
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Encode the result in the requested format.
pub fn render(result: &ConversionResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_json(result),
        OutputFormat::Ansi => Ok(to_ansi(result)),
        OutputFormat::Text => Ok(to_text(result)),
    }
}

pub fn to_json(result: &ConversionResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

/// Render with a truecolor escape before every glyph.
///
/// Each row ends with a reset and a newline.
pub fn to_ansi(result: &ConversionResult) -> String {
    // Escape plus glyph is at most ~20 bytes per cell
    let mut out = String::with_capacity(result.len() * 20);
    for cell in result.cells() {
        match cell {
            Cell::Pixel(unit) => {
                let c = unit.color;
                out.push_str(&format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b));
                out.push(unit.glyph);
            }
            Cell::RowEnd => {
                out.push_str(ANSI_RESET);
                out.push('\n');
            }
        }
    }
    out
}

pub fn to_text(result: &ConversionResult) -> String {
    result
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Pixel(unit) => unit.glyph,
            Cell::RowEnd => '\n',
        })
        .collect()
}
