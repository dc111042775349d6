//! Glyph ramp used for brightness quantization.

/// Number of entries in [`GLYPH_RAMP`].
pub const RAMP_LEN: usize = 65;

/// Glyphs ordered from least ink (index 0) to most ink (index 64).
///
/// Shared read-only by every conversion; there is no way to swap it at runtime.
#[rustfmt::skip]
pub const GLYPH_RAMP: [char; RAMP_LEN] = [
    '.', '^', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~', '+', '_', '-', '?',
    ']', '[', '}', '{', '1', ')', '(', '|', '/', 't', 'f', 'j', 'r', 'x', 'n', 'u',
    'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q',
    'p', 'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@',
    '$',
];

/// The blank glyph. Cells that land here are always painted white.
pub const LIGHTEST_GLYPH: char = GLYPH_RAMP[0];

/// The densest glyph.
pub const DENSEST_GLYPH: char = GLYPH_RAMP[RAMP_LEN - 1];

/// Look up the glyph for a ramp index, saturating at the densest entry.
#[inline]
pub fn glyph_at(index: usize) -> char {
    GLYPH_RAMP[index.min(RAMP_LEN - 1)]
}

/// Position of a glyph in the ramp, if it is part of it.
pub fn index_of(glyph: char) -> Option<usize> {
    GLYPH_RAMP.iter().position(|&g| g == glyph)
}
