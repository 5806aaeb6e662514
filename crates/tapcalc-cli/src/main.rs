//! tapcalc: single-screen keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! tapcalc run                       # Interactive calculator (mouse)
//! tapcalc press 7 + 5 =             # Replay keys, print the display
//! tapcalc press --steps 6 ÷ 4 =     # Display after every press
//! tapcalc palette --theme light     # Theme colors
//! ```

use std::process::ExitCode;

use clap::Parser;
use tapcalc_cli::{handlers, logging, Cli, CliConfig, CliResult, Commands};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = handlers::build_config(&cli);

    match cli.command {
        Commands::Run(args) => {
            if let Some(path) = &args.log_file {
                logging::init_file(config.verbosity, path)?;
            }
            run_interactive(&config)
        }
        Commands::Press(args) => {
            init_stderr_logging(&config)?;
            println!("{}", handlers::press(&config, &args)?);
            Ok(())
        }
        Commands::Keypad => {
            init_stderr_logging(&config)?;
            println!("{}", handlers::keypad());
            Ok(())
        }
        Commands::Palette(_) => {
            init_stderr_logging(&config)?;
            println!("{}", handlers::palette(&config)?);
            Ok(())
        }
    }
}

fn init_stderr_logging(config: &CliConfig) -> CliResult<()> {
    logging::init(config.verbosity, config.color.should_color())
}

#[cfg(feature = "tui")]
fn run_interactive(config: &CliConfig) -> CliResult<()> {
    handlers::interactive(config)
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_config: &CliConfig) -> CliResult<()> {
    Err(tapcalc_cli::CliError::invalid_argument(
        "terminal surface not enabled. Rebuild with --features tui",
    ))
}
