//! tapcalc - single-screen keypad calculator
//!
//! The calculator is a sequential, left-to-right input state machine. A
//! rendering surface sends one [`Key`](core::Key) per press and reads back
//! three strings: the running equation, the main value and the
//! last-calculation subtitle.
//!
//! - [`core`]: key tokens, operators, formatting and the [`Session`](core::Session) record
//! - [`display`]: per-frame display state, including the font size hint
//! - [`theme`]: dark and light palettes
//! - [`keypad`]: button layout and hit testing
//! - [`driver`]: the surface seam and shared scenarios
//! - `tui`: crossterm surface (feature `tui`)
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_tokens("7 + 5 =").unwrap();
//!
//! let state = calc.snapshot();
//! assert_eq!(state.value, "12");
//! assert_eq!(state.last_result, "7 + 5 = 12");
//! assert_eq!(state.equation, "");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod driver;
pub mod keypad;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::{CalcError, CalcResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_operand, format_result, parse_operand};
    pub use crate::core::key::parse_sequence;
    pub use crate::core::{CalcError, CalcResult, Calculator, Key, KeyKind, Operator, Session};
    pub use crate::display::{font_size, DisplayState};
    pub use crate::driver::{CalculatorDriver, SessionDriver};
    pub use crate::keypad::{Area, ButtonStyle, Keypad, KeypadButton};
    pub use crate::theme::{Palette, Rgb, Theme};

    #[cfg(feature = "tui")]
    pub use crate::tui::TuiApp;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut driver = SessionDriver::new();
        driver.press_sequence("6 ÷ 4 =").unwrap();
        assert_eq!(driver.display(), "1.5");
    }

    #[test]
    fn test_session_value_semantics() {
        let a = Session::new().press_all(parse_sequence("7 + 5").unwrap());
        let b = Session::new().press_all(parse_sequence("7 + 0 5").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_calculator_snapshot_font_hint() {
        let mut calc = Calculator::with_theme(Theme::Light);
        calc.press_tokens("123456789").unwrap();
        assert_eq!(calc.snapshot().font_size, font_size("123456789"));
        assert_eq!(calc.snapshot().font_size, 75);
    }
}
