//! Subcommand handlers
//!
//! Handlers return their output as a string; `main` prints it.

use tapcalc::core::key::parse_sequence;
use tapcalc::core::Calculator;
use tapcalc::keypad::Keypad;
use tracing::{debug, info};

use crate::commands::{Cli, Commands, PressArgs};
use crate::config::{CliConfig, Verbosity};
use crate::error::CliResult;
use crate::output::{render_keypad, render_palette, render_state, render_steps, Step};

/// Builds the configuration from parsed arguments
pub fn build_config(cli: &Cli) -> CliConfig {
    let config = CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into());

    match &cli.command {
        Commands::Run(args) => config.with_theme(args.theme.into()),
        Commands::Press(args) => config
            .with_theme(args.theme.into())
            .with_format(args.format.into()),
        Commands::Palette(args) => config
            .with_theme(args.theme.into())
            .with_format(args.format.into()),
        Commands::Keypad => config,
    }
}

/// Replays key tokens through a fresh calculator.
///
/// Every token is parsed before the first press, so a bad token leaves
/// nothing half-applied.
pub fn press(config: &CliConfig, args: &PressArgs) -> CliResult<String> {
    let keys = parse_sequence(&args.tokens.join(" "))?;
    info!(presses = keys.len(), "replaying keys");

    let mut calc = Calculator::with_theme(config.theme);
    let color = config.color.should_color();

    if args.steps {
        let steps: Vec<Step> = keys
            .into_iter()
            .map(|key| {
                calc.press(key);
                Step {
                    key: key.label(),
                    state: calc.snapshot(),
                }
            })
            .collect();
        return render_steps(&steps, config.format, color);
    }

    calc.press_all(keys);
    debug!(display = calc.session().display_value(), "replay finished");
    render_state(&calc.snapshot(), config.format, color)
}

/// Prints the keypad layout
pub fn keypad() -> String {
    render_keypad(&Keypad::new())
}

/// Prints the colors of the configured theme
pub fn palette(config: &CliConfig) -> CliResult<String> {
    render_palette(config.theme, config.format, config.color.should_color())
}

/// Opens the terminal calculator
#[cfg(feature = "tui")]
pub fn interactive(config: &CliConfig) -> CliResult<()> {
    tapcalc::tui::run(config.theme)?;
    Ok(())
}
