//! Interactive terminal loop

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};

use crate::core::CalcResult;
use crate::theme::Theme;

use super::app::TuiApp;
use super::grid::{Cell, TextGrid};
use super::input::InputHandler;
use super::render::render;

/// Undoes terminal setup when dropped.
///
/// Every restore step runs even if an earlier one fails.
struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    screen: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Takes ownership of `out`; `raw_mode` says whether raw mode is already on
    const fn new(out: W, raw_mode: bool) -> Self {
        Self {
            out,
            raw_mode,
            screen: false,
        }
    }

    /// Switches to the alternate screen with mouse capture and a hidden cursor
    fn enter_screen(&mut self) -> io::Result<()> {
        // Marked first so a partial entry is still undone.
        self.screen = true;
        execute!(self.out, EnterAlternateScreen, EnableMouseCapture, Hide)
    }

    fn restore(&mut self) {
        if self.screen {
            let _ = execute!(self.out, DisableMouseCapture);
            let _ = execute!(self.out, Show);
            let _ = execute!(self.out, LeaveAlternateScreen);
            self.screen = false;
        }
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
        }
        let _ = self.out.flush();
        debug!("terminal restored");
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Runs the calculator until the user quits.
///
/// The terminal is restored on every exit path, including a failed setup.
pub fn run(theme: Theme) -> CalcResult<()> {
    enable_raw_mode()?;
    let mut guard = TerminalGuard::new(io::stdout(), true);
    guard.enter_screen()?;
    event_loop(&mut guard.out, theme)
}

fn event_loop<W: Write>(out: &mut W, theme: Theme) -> CalcResult<()> {
    let (width, height) = terminal::size()?;
    let mut app = TuiApp::new(theme, width, height);
    let input = InputHandler::new();
    info!(width, height, %theme, "calculator started");

    loop {
        let (w, h) = app.size();
        let palette = app.theme().palette();
        let mut grid = TextGrid::new(w, h, Cell::blank(palette.text, palette.background));
        render(&app, &mut grid);
        grid.flush(out)?;

        let event = event::read()?;
        app.handle(input.handle_event(&event, &app.layout(), app.keypad()));
        if app.should_quit() {
            break;
        }
    }

    info!(last_result = app.calculator().session().last_result(), "calculator closed");
    Ok(())
}
