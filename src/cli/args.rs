//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Compression, Format};

/// Convert an image into coloured ASCII art
#[derive(Parser, Debug)]
#[command(name = "glyphcast")]
#[command(version, about = "Render images as coloured glyph grids", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// PNG or JPEG image to convert
    pub image: Option<PathBuf>,

    /// Output width in glyphs (clamped to 1-1000)
    #[arg(long, short = 'w', allow_negative_numbers = true)]
    pub columns: Option<i64>,

    /// Brightness multiplier for luma and colour
    #[arg(long, short, allow_negative_numbers = true)]
    pub brightness: Option<f64>,

    /// Vertical compression
    #[arg(long)]
    pub compression: Option<Compression>,

    /// Output encoding
    #[arg(long, short)]
    pub format: Option<Format>,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,
    /// Create default config file
    Init,
}
