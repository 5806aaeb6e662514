//! Terminal surface for the calculator
//!
//! Draws the display and keypad with crossterm and turns mouse clicks on
//! the keypad into key presses.

mod app;
mod grid;
mod input;
mod render;
mod terminal;

pub use app::TuiApp;
pub use grid::{Cell, Style, TextGrid};
pub use input::{InputHandler, UiAction};
pub use render::{render, Layout};
pub use terminal::run;
