//! tapcalc CLI library
//!
//! Argument parsing, configuration, logging setup and the subcommand
//! handlers behind the `tapcalc` binary.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod output;

pub use commands::{
    Cli, ColorArg, Commands, FormatArg, PaletteArgs, PressArgs, RunArgs, ThemeArg,
};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
