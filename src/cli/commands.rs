//! Handlers for the convert run and config subcommands.

use std::path::{Path, PathBuf};

use super::args::{Args, ConfigAction};
use super::enums::{parse_config_value, Compression, Format};
use crate::ascii::{self, ConvertOptions, DEFAULT_BRIGHTNESS, DEFAULT_COLUMNS};
use crate::config::{default_path as get_config_path, Config, ConfigError, DEFAULT_CONFIG};
use crate::error::ConvertError;
use crate::render::{self, OutputFormat};

/// Errors surfaced by the command-line driver.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No image given. Usage: glyphcast <IMAGE> [OPTIONS]")]
    MissingImage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Effective settings after merging CLI flags, config file and defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub options: ConvertOptions,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge settings: CLI args > config file > built-in defaults.
    pub fn resolve(args: &Args, cfg: &Config) -> Self {
        let columns = args
            .columns
            .or(cfg.convert.columns)
            .unwrap_or(DEFAULT_COLUMNS as i64);
        let brightness = args
            .brightness
            .or(cfg.convert.brightness)
            .unwrap_or(DEFAULT_BRIGHTNESS);
        let compression = args
            .compression
            .or_else(|| {
                cfg.convert
                    .compression
                    .as_deref()
                    .and_then(|s| parse_config_value::<Compression>("compression", s))
            })
            .unwrap_or_default();
        let format = args
            .format
            .or_else(|| {
                cfg.output
                    .format
                    .as_deref()
                    .and_then(|s| parse_config_value::<Format>("format", s))
            })
            .unwrap_or_default();

        Settings {
            options: ConvertOptions {
                columns,
                brightness,
                compression: compression.into(),
            },
            format: format.into(),
        }
    }
}

/// Convert the image named on the command line and return the encoded output.
pub fn run_convert(args: &Args) -> Result<String, CommandError> {
    let image = args.image.as_deref().ok_or(CommandError::MissingImage)?;
    let cfg = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, &cfg);
    convert_file(image, &settings)
}

/// Load, convert and encode a single image file.
pub fn convert_file(image: &Path, settings: &Settings) -> Result<String, CommandError> {
    let bitmap = ascii::load(image)?;
    let result = ascii::convert(&bitmap, &settings.options)?;
    Ok(render::render(&result, settings.format)?)
}

/// Write output to `path`, or stdout when no path is given.
pub fn write_output(output: &str, path: Option<&Path>) -> Result<(), CommandError> {
    match path {
        Some(path) => {
            std::fs::write(path, output).map_err(|e| CommandError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
            log::info!("Wrote {} bytes to {}", output.len(), path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, args: &Args) -> Result<(), CommandError> {
    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    match action {
        ConfigAction::Show => {
            let cfg = Config::load(Some(&config_path))?;
            let settings = Settings::resolve(args, &cfg);
            println!("{}", describe(&settings));
            println!();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Human-readable summary of effective settings.
pub fn describe(settings: &Settings) -> String {
    format!(
        "Current configuration:\n  Columns: {}\n  Brightness: {}\n  Compression: {}\n  Format: {}",
        settings.options.columns,
        settings.options.brightness,
        settings.options.compression.name(),
        settings.format.name()
    )
}

/// Write the default config template, refusing to overwrite an existing file.
pub fn init_config(path: &Path) -> Result<(), CommandError> {
    if path.exists() {
        return Err(CommandError::ConfigExists(path.to_path_buf()));
    }

    let write_err = |e| CommandError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(write_err)?;
    Ok(())
}
