//! glyphcast library crate.
//!
//! Converts raster images into grids of glyphs chosen by brightness, each
//! paired with a colour. The [`ascii`] module holds the pipeline; [`render`]
//! encodes its output and [`cli`] drives it from the command line.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
