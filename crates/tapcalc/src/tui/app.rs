//! Terminal application state

use tracing::debug;

use crate::core::{Calculator, Key};
use crate::display::DisplayState;
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;
use crate::theme::Theme;

use super::input::UiAction;
use super::render::Layout;

/// Calculator plus everything the terminal surface tracks around it
#[derive(Debug)]
pub struct TuiApp {
    calculator: Calculator,
    keypad: Keypad,
    layout: Layout,
    size: (u16, u16),
    /// Last button pressed, drawn in its shadow color
    highlighted: Option<Key>,
    should_quit: bool,
}

impl TuiApp {
    /// Creates an app for a terminal of the given size
    #[must_use]
    pub fn new(theme: Theme, width: u16, height: u16) -> Self {
        Self {
            calculator: Calculator::with_theme(theme),
            keypad: Keypad::new(),
            layout: Layout::compute(width, height),
            size: (width, height),
            highlighted: None,
            should_quit: false,
        }
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the current layout
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the terminal size (width, height)
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Returns the highlighted key
    #[must_use]
    pub fn highlighted(&self) -> Option<Key> {
        self.highlighted
    }

    /// Returns the current theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.calculator.theme()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Derives what to draw
    #[must_use]
    pub fn snapshot(&self) -> DisplayState {
        self.calculator.snapshot()
    }

    /// Presses keys as if their buttons were clicked
    pub fn press_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.handle(UiAction::Press(*key));
        }
    }

    /// Applies one UI action
    pub fn handle(&mut self, action: UiAction) {
        match action {
            UiAction::Press(key) => {
                self.calculator.press(key);
                self.highlighted = Some(key);
            }
            UiAction::ToggleTheme => self.calculator.toggle_theme(),
            UiAction::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.size = (width, height);
                self.layout = Layout::compute(width, height);
            }
            UiAction::Quit => self.should_quit = true,
            UiAction::None => {}
        }
    }
}

impl CalculatorDriver for TuiApp {
    fn press(&mut self, key: Key) {
        self.handle(UiAction::Press(key));
    }

    fn display(&self) -> String {
        self.snapshot().value
    }

    fn equation(&self) -> String {
        self.snapshot().equation
    }

    fn last_result(&self) -> String {
        self.snapshot().last_result
    }
}
