//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use commands::{
    convert_file, describe, handle_config_action, init_config, run_convert, write_output,
    CommandError, Settings,
};
pub use enums::{Compression, Format};
