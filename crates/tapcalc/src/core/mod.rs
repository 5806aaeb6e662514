//! Calculator core: key tokens, operators, number formatting and the
//! input state machine
//!
//! Nothing in here can fail during a press. Invalid presses are silent
//! no-ops; errors only come from turning text into keys.

mod calculator;
pub mod format;
pub mod key;
mod operator;
pub mod session;

pub use calculator::Calculator;
pub use key::{Key, KeyKind};
pub use operator::Operator;
pub use session::Session;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised at the edges of the calculator
#[derive(Debug, Error)]
pub enum CalcError {
    /// Text that names no keypad key
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Terminal I/O failure
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(token: impl Into<String>) -> Self {
        Self::UnknownKey(token.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_unknown_key_display() {
        let err = CalcError::unknown_key("sqrt");
        assert_eq!(err.to_string(), "Unknown key: sqrt");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CalcError = io_err.into();
        assert!(err.to_string().contains("Terminal I/O"));
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::unknown_key("^"));
        assert!(err.to_string().contains("Unknown key"));
    }
}
