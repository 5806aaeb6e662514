//! The calculator session record and its transitions
//!
//! A [`Session`] is a value: [`Session::press`] never mutates the record it
//! is called on, it returns the next one. Two sessions that went through
//! equivalent presses compare equal.
//!
//! Dispatch, first matching rule wins:
//!
//! | Key | Transition |
//! |-----|------------|
//! | digit, `.` | input |
//! | `C` | reset |
//! | `+ - × ÷ % +/-` | operator |
//! | `=` | evaluate |

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::format::{format_operand, format_result, parse_operand};
use super::key::{Key, KeyKind};
use super::operator::Operator;

/// Display value of a fresh or cleared session
pub const INITIAL_DISPLAY: &str = "0";

/// Mutable-by-replacement state of one calculator screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Operand currently shown
    display_value: String,
    /// Next digit starts a new operand instead of extending this one
    ready_to_replace: bool,
    /// Operator waiting for its second operand
    pending_operator: Option<Operator>,
    /// Running equation shown above the display
    equation_text: String,
    /// Subtitle left by the last `=`
    last_result: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a fresh session showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            display_value: INITIAL_DISPLAY.to_string(),
            ready_to_replace: true,
            pending_operator: None,
            equation_text: String::new(),
            last_result: String::new(),
        }
    }

    /// Returns the operand currently shown
    #[must_use]
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// Returns whether the next digit starts a new operand
    #[must_use]
    pub fn ready_to_replace(&self) -> bool {
        self.ready_to_replace
    }

    /// Returns the operator awaiting a second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Returns the running equation
    #[must_use]
    pub fn equation_text(&self) -> &str {
        &self.equation_text
    }

    /// Returns the last completed calculation
    #[must_use]
    pub fn last_result(&self) -> &str {
        &self.last_result
    }

    /// Returns the session that follows a press of `key`
    #[must_use]
    pub fn press(&self, key: Key) -> Self {
        let mut next = self.clone();
        match key.kind() {
            KeyKind::Input => next.input(key),
            KeyKind::Reset => next.reset(),
            KeyKind::Operator => next.operator(key),
            KeyKind::Evaluate => next.evaluate(),
        }
        next
    }

    /// Folds a sequence of presses, starting from this session
    #[must_use]
    pub fn press_all<I>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter()
            .fold(self.clone(), |session, key| session.press(key))
    }

    fn input(&mut self, key: Key) {
        let Some(ch) = key.input_text() else {
            return;
        };

        if self.ready_to_replace {
            self.display_value = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            self.ready_to_replace = false;
            if self.pending_operator.is_some() {
                self.equation_text.push(ch);
            } else {
                self.equation_text = ch.to_string();
            }
            return;
        }

        if ch == '.' && self.display_value.contains('.') {
            trace!(display = %self.display_value, "second decimal point ignored");
            return;
        }

        if self.display_value == INITIAL_DISPLAY && ch != '.' {
            self.display_value = ch.to_string();
            self.replace_trailing_operand(ch);
        } else {
            self.display_value.push(ch);
            self.equation_text.push(ch);
        }
    }

    /// Swaps the operand segment at the end of the equation for `ch`.
    fn replace_trailing_operand(&mut self, ch: char) {
        match self.equation_text.rfind(' ') {
            Some(idx) => self.equation_text.truncate(idx + 1),
            None => self.equation_text.clear(),
        }
        self.equation_text.push(ch);
    }

    fn reset(&mut self) {
        self.display_value = INITIAL_DISPLAY.to_string();
        self.pending_operator = None;
        self.equation_text.clear();
        self.ready_to_replace = true;
    }

    fn operator(&mut self, key: Key) {
        let current = parse_operand(&self.display_value);

        let op = match key {
            Key::ToggleSign => {
                self.display_value = format_operand(-current);
                return;
            }
            Key::Operator(op) => op,
            _ => return,
        };

        if let Some(previous) = self.pending_operator.replace(op) {
            if self.ready_to_replace {
                trace!(%previous, %op, "pending operator overwritten");
            }
        }
        self.ready_to_replace = true;
        self.equation_text = format!("{} {} ", format_operand(current), op.equation_glyph());
    }

    fn evaluate(&mut self) {
        let Some(op) = self.pending_operator else {
            trace!("evaluate with nothing pending");
            return;
        };

        let first = parse_operand(self.equation_text.split(' ').next().unwrap_or_default());
        let second = parse_operand(&self.display_value);
        let result = format_result(op.apply(first, second));

        self.last_result = format!(
            "{} {} {} = {}",
            format_operand(first),
            op.glyph(),
            format_operand(second),
            result
        );
        debug!(calculation = %self.last_result, "evaluated");

        self.display_value = result;
        self.equation_text.clear();
        self.pending_operator = None;
        self.ready_to_replace = true;
    }
}
