//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tapcalc::theme::Theme;

use crate::config::{ColorChoice, OutputFormat};

/// tapcalc: single-screen keypad calculator
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the calculator in the terminal (click the keypad with the mouse)
    Run(RunArgs),

    /// Replay key presses through a fresh calculator and print the display
    ///
    /// Tokens are keypad labels: digits, `.`, `C`, `+/-`, `%`, `÷` (or `/`),
    /// `×` (or `*`, `x`), `-`, `+` and `=`. Digit runs such as `12.5` are
    /// split into one press per character.
    Press(PressArgs),

    /// Print the keypad layout
    Keypad,

    /// Print the colors of a theme
    Palette(PaletteArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Starting theme
    #[arg(short, long, default_value = "dark")]
    pub theme: ThemeArg,

    /// Write logs to this file; the screen is never logged to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Key tokens, pressed left to right
    #[arg(required = true)]
    pub tokens: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,

    /// Theme reported in the display state
    #[arg(short, long, default_value = "dark")]
    pub theme: ThemeArg,

    /// Print the display after every press
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the palette command
#[derive(Parser, Debug)]
pub struct PaletteArgs {
    /// Theme to print
    #[arg(short, long, default_value = "dark")]
    pub theme: ThemeArg,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Theme argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ThemeArg {
    /// Dark background
    #[default]
    Dark,
    /// Light background
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
