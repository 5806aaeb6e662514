//! What a surface shows after each press
//!
//! The font size is derived from the length of the display text on every
//! read; it is never stored in the session.

use serde::{Deserialize, Serialize};

use crate::core::Session;
use crate::theme::Theme;

/// Font size for display text at or under [`FONT_SHRINK_THRESHOLD`] characters
pub const BASE_FONT_SIZE: i32 = 80;

/// Display length after which the font starts to shrink
pub const FONT_SHRINK_THRESHOLD: usize = 8;

/// Font size lost per character beyond the threshold
pub const FONT_SHRINK_STEP: i32 = 5;

/// Returns the font size for a display text.
///
/// Not clamped: long values go to zero and below, and the surface decides
/// its own floor.
#[must_use]
pub fn font_size(display: &str) -> i32 {
    let len = display.chars().count();
    if len > FONT_SHRINK_THRESHOLD {
        let excess = (len - FONT_SHRINK_THRESHOLD) as i32;
        BASE_FONT_SIZE - excess.saturating_mul(FONT_SHRINK_STEP)
    } else {
        BASE_FONT_SIZE
    }
}

/// Everything a surface renders for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Running equation, shown small above the value
    pub equation: String,
    /// Main display text
    pub value: String,
    /// Font size hint for `value`
    pub font_size: i32,
    /// Last completed calculation, shown as a subtitle
    pub last_result: String,
    /// Palette selector
    pub theme: Theme,
}

impl DisplayState {
    /// Derives the display state of a session
    #[must_use]
    pub fn new(session: &Session, theme: Theme) -> Self {
        Self {
            equation: session.equation_text().to_string(),
            value: session.display_value().to_string(),
            font_size: font_size(session.display_value()),
            last_result: session.last_result().to_string(),
            theme,
        }
    }

    /// Returns true when the value fits at the base font size
    #[must_use]
    pub fn is_full_size(&self) -> bool {
        self.font_size >= BASE_FONT_SIZE
    }
}
