//! CLI enum types for compression and output format options.

use clap::ValueEnum;

use crate::ascii::VerticalCompression;
use crate::render::OutputFormat;

/// Vertical compression preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Compression {
    /// Rows follow the 1.5 cell aspect only
    #[default]
    Standard,
    /// Half the rows, for terminal character cells
    Terminal,
}

impl From<Compression> for VerticalCompression {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Standard => VerticalCompression::Standard,
            Compression::Terminal => VerticalCompression::Terminal,
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    Json,
    #[default]
    Ansi,
    Text,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => OutputFormat::Json,
            Format::Ansi => OutputFormat::Ansi,
            Format::Text => OutputFormat::Text,
        }
    }
}

/// Parse a value from the config file, case-insensitively.
/// Unknown values are logged and ignored.
pub fn parse_config_value<T: ValueEnum>(key: &str, value: &str) -> Option<T> {
    match T::from_str(value, true) {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring unknown {} '{}' in config file", key, value);
            None
        }
    }
}
