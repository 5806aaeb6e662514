//! Calculator facade: the current session plus the theme flag

use tracing::debug;

use super::key::{parse_sequence, Key};
use super::session::Session;
use super::CalcResult;
use crate::display::DisplayState;
use crate::theme::Theme;

/// Owns the live session and the theme a surface renders with
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    session: Session,
    theme: Theme,
}

impl Calculator {
    /// Creates a calculator with a fresh session and the default theme
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator starting in the given theme
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            session: Session::new(),
            theme,
        }
    }

    /// Returns the current session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches between dark and light
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = %self.theme, "theme toggled");
    }

    /// Handles one press and returns the new session
    pub fn press(&mut self, key: Key) -> &Session {
        self.session = self.session.press(key);
        debug!(
            %key,
            display = self.session.display_value(),
            equation = self.session.equation_text(),
            "key pressed"
        );
        &self.session
    }

    /// Handles presses in order
    pub fn press_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
    }

    /// Parses a token sequence (`"7 + 5 ="`) and presses every key.
    ///
    /// Nothing is pressed if any token fails to parse.
    pub fn press_tokens(&mut self, input: &str) -> CalcResult<()> {
        let keys = parse_sequence(input)?;
        self.press_all(keys);
        Ok(())
    }

    /// Presses `C`
    pub fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Derives what a surface should show right now
    #[must_use]
    pub fn snapshot(&self) -> DisplayState {
        DisplayState::new(&self.session, self.theme)
    }
}
