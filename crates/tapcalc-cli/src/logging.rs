//! Log subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the level comes from `-v`/`-q`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the level filter for a verbosity
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_level()))
}

/// Logs to stderr, keeping stdout for command output
pub fn init(verbosity: Verbosity, ansi: bool) -> CliResult<()> {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(ansi))
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Logs to a file; used while the terminal surface owns the screen
pub fn init_file(verbosity: Verbosity, path: &Path) -> CliResult<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
