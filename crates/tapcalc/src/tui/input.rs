//! Terminal event handling
//!
//! Calculator keys are pressed by clicking keypad buttons. The keyboard only
//! drives the surface itself: `t` toggles the theme, `q`/`Esc`/`Ctrl+C` quit.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::Key;
use crate::keypad::Keypad;

use super::render::Layout;

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// A keypad button was clicked
    Press(Key),
    /// Switch between dark and light
    ToggleTheme,
    /// Terminal changed size
    Resize(u16, u16),
    /// Leave the app
    Quit,
    /// Nothing to do
    None,
}

/// Maps terminal events to UI actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event
    #[must_use]
    pub fn handle_event(&self, event: &Event, layout: &Layout, keypad: &Keypad) -> UiAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, layout, keypad),
            Event::Resize(width, height) => UiAction::Resize(*width, *height),
            _ => UiAction::None,
        }
    }

    /// Maps a key event
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> UiAction {
        if event.kind != KeyEventKind::Press {
            return UiAction::None;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => UiAction::Quit,
                _ => UiAction::None,
            };
        }
        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => UiAction::Quit,
            KeyCode::Char('t') => UiAction::ToggleTheme,
            _ => UiAction::None,
        }
    }

    /// Maps a mouse event; only left-button presses on the keypad count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, layout: &Layout, keypad: &Keypad) -> UiAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => keypad
                .hit_test(layout.keypad, event.column, event.row)
                .map_or(UiAction::None, UiAction::Press),
            _ => UiAction::None,
        }
    }
}
