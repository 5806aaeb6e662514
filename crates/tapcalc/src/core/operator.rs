//! Binary operators the keypad can leave pending
//!
//! Operators are applied strictly left to right: there is no precedence,
//! only one operator waits for its second operand at a time.

use serde::{Deserialize, Serialize};

/// A binary operator awaiting its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Percent of the first operand (%)
    Percent,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 5] = [
        Self::Percent,
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Add,
    ];

    /// Returns the glyph printed on the key
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percent => "%",
        }
    }

    /// Returns the glyph used in the running equation (`÷` is shown as `/`)
    #[must_use]
    pub const fn equation_glyph(&self) -> &'static str {
        match self {
            Self::Divide => "/",
            other => other.glyph(),
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by zero is not guarded: the result is whatever IEEE 754
    /// produces (`inf`, `-inf` or `NaN`). Percent takes `b` percent of `a`.
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Percent => a * (b / 100.0),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
