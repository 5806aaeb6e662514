//! Key tokens emitted by a rendering surface
//!
//! One press carries exactly one [`Key`]. Surfaces that only have text
//! (the CLI, tests) go through [`Key::from_str`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::operator::Operator;
use super::CalcError;

/// A single keypad press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Clear (`C`)
    Clear,
    /// Sign flip (`+/-`)
    ToggleSign,
    /// Binary operator
    Operator(Operator),
    /// Evaluate (`=`)
    Equals,
}

/// Dispatch class of a key, in the order keys are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Digits and the decimal point
    Input,
    /// `C`
    Reset,
    /// Binary operators and the sign flip
    Operator,
    /// `=`
    Evaluate,
}

impl Key {
    /// Every distinct key, in keypad reading order
    pub const ALL: [Self; 19] = [
        Self::Clear,
        Self::ToggleSign,
        Self::Operator(Operator::Percent),
        Self::Operator(Operator::Divide),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Operator(Operator::Multiply),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Operator(Operator::Subtract),
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Operator(Operator::Add),
        Self::Digit(0),
        Self::Decimal,
        Self::Equals,
    ];

    /// Returns the label printed on the key
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// Returns the text this key contributes to an operand, if any.
    ///
    /// A `Digit` outside 0-9 contributes nothing, so pressing it is a no-op.
    #[must_use]
    pub fn input_text(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }

    /// Classifies the key for dispatch
    #[must_use]
    pub const fn kind(&self) -> KeyKind {
        match self {
            Self::Digit(_) | Self::Decimal => KeyKind::Input,
            Self::Clear => KeyKind::Reset,
            Self::ToggleSign | Self::Operator(_) => KeyKind::Operator,
            Self::Equals => KeyKind::Evaluate,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let key = match token {
            "." => Self::Decimal,
            "C" | "c" | "AC" => Self::Clear,
            "+/-" | "±" | "neg" => Self::ToggleSign,
            "+" => Self::Operator(Operator::Add),
            "-" | "−" => Self::Operator(Operator::Subtract),
            "×" | "*" | "x" => Self::Operator(Operator::Multiply),
            "÷" | "/" => Self::Operator(Operator::Divide),
            "%" => Self::Operator(Operator::Percent),
            "=" => Self::Equals,
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    _ => return Err(CalcError::unknown_key(token)),
                }
            }
        };
        Ok(key)
    }
}

/// Parses a whitespace-separated token sequence such as `"7 + 5 ="`.
///
/// A token made only of digits and decimal points (`"200"`, `"1.5"`) is
/// expanded into one press per character.
pub fn parse_sequence(input: &str) -> Result<Vec<Key>, CalcError> {
    let mut keys = Vec::new();
    for token in input.split_whitespace() {
        if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            for c in token.chars() {
                keys.push(c.to_string().parse()?);
            }
        } else {
            keys.push(token.parse()?);
        }
    }
    Ok(keys)
}
