//! Keypad layout shared by every surface
//!
//! ```text
//! [ C ] [+/-] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Key, Operator};

/// Visual class of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonStyle {
    /// Digits and the decimal point
    Digit,
    /// Binary operators and `=`
    Operation,
    /// `C`, `+/-` and `%`
    Special,
}

impl ButtonStyle {
    /// Returns the style a key is drawn with
    #[must_use]
    pub const fn for_key(key: Key) -> Self {
        match key {
            Key::Digit(_) | Key::Decimal => Self::Digit,
            Key::Clear | Key::ToggleSign | Key::Operator(Operator::Percent) => Self::Special,
            Key::Operator(_) | Key::Equals => Self::Operation,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The key this button presses
    pub key: Key,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Visual class
    pub style: ButtonStyle,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub const fn new(key: Key, row: usize, col: usize) -> Self {
        Self::wide(key, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub const fn wide(key: Key, row: usize, col: usize, span: usize) -> Self {
        Self {
            key,
            row,
            col,
            span,
            style: ButtonStyle::for_key(key),
        }
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Screen rectangle in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    /// Left edge
    pub x: u16,
    /// Top edge
    pub y: u16,
    /// Width in cells
    pub width: u16,
    /// Height in cells
    pub height: u16,
}

impl Area {
    /// Creates an area
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the point lies inside
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

/// The calculator keypad: 5 rows by 4 columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C +/- % ÷
            KeypadButton::new(Key::Clear, 0, 0),
            KeypadButton::new(Key::ToggleSign, 0, 1),
            KeypadButton::new(Key::Operator(Operator::Percent), 0, 2),
            KeypadButton::new(Key::Operator(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::new(Key::Digit(7), 1, 0),
            KeypadButton::new(Key::Digit(8), 1, 1),
            KeypadButton::new(Key::Digit(9), 1, 2),
            KeypadButton::new(Key::Operator(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::new(Key::Digit(4), 2, 0),
            KeypadButton::new(Key::Digit(5), 2, 1),
            KeypadButton::new(Key::Digit(6), 2, 2),
            KeypadButton::new(Key::Operator(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(Key::Digit(1), 3, 0),
            KeypadButton::new(Key::Digit(2), 3, 1),
            KeypadButton::new(Key::Digit(3), 3, 2),
            KeypadButton::new(Key::Operator(Operator::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButton::wide(Key::Digit(0), 4, 0, 2),
            KeypadButton::new(Key::Decimal, 4, 2),
            KeypadButton::new(Key::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns an iterator over all buttons in reading order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the button for a key
    #[must_use]
    pub fn find(&self, key: Key) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Returns the screen area of a button when the keypad fills `area`
    #[must_use]
    pub fn button_area(&self, area: Area, button: &KeypadButton) -> Area {
        let cell_w = area.width / self.cols as u16;
        let cell_h = area.height / self.rows as u16;
        Area::new(
            area.x + button.col as u16 * cell_w,
            area.y + button.row as u16 * cell_h,
            cell_w * button.span as u16,
            cell_h,
        )
    }

    /// Maps a screen position to the key under it
    #[must_use]
    pub fn hit_test(&self, area: Area, x: u16, y: u16) -> Option<Key> {
        if !area.contains(x, y) {
            return None;
        }
        let cell_w = area.width / self.cols as u16;
        let cell_h = area.height / self.rows as u16;
        if cell_w == 0 || cell_h == 0 {
            return None;
        }
        let col = ((x - area.x) / cell_w) as usize;
        let row = ((y - area.y) / cell_h) as usize;
        self.get_button_at(row, col).map(|b| b.key)
    }

    /// Renders the layout as plain text rows
    #[must_use]
    pub fn to_text(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                self.buttons
                    .iter()
                    .filter(|b| b.row == row)
                    .map(|b| {
                        let width = 5 * b.span + (b.span - 1);
                        format!("[{:^w$}]", b.key.label(), w = width - 2)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
