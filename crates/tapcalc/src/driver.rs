//! Surface-independent calculator driver
//!
//! Every surface that can press keys and read back the three display
//! strings implements [`CalculatorDriver`]. The `verify_*` functions are
//! written once against the trait and run against each surface.

use crate::core::key::parse_sequence;
use crate::core::{CalcResult, Calculator, Key};

/// Interface between a rendering surface and the calculator
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, key: Key);

    /// Gets the main display text
    fn display(&self) -> String;

    /// Gets the running equation
    fn equation(&self) -> String;

    /// Gets the last-calculation subtitle
    fn last_result(&self) -> String;

    /// Presses `C`
    fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Presses every key of a token sequence such as `"7 + 5 ="`
    fn press_sequence(&mut self, input: &str) -> CalcResult<()> {
        for key in parse_sequence(input)? {
            self.press(key);
        }
        Ok(())
    }
}

/// In-memory driver with no surface at all
#[derive(Debug, Default)]
pub struct SessionDriver {
    calculator: Calculator,
}

impl SessionDriver {
    /// Creates a driver around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for SessionDriver {
    fn press(&mut self, key: Key) {
        self.calculator.press(key);
    }

    fn display(&self) -> String {
        self.calculator.session().display_value().to_string()
    }

    fn equation(&self) -> String {
        self.calculator.session().equation_text().to_string()
    }

    fn last_result(&self) -> String {
        self.calculator.session().last_result().to_string()
    }
}

// ===== Shared scenarios =====
// Each one starts by clearing, so they can run back to back on one driver.

/// Verifies the four arithmetic operators and percent
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    for (input, expected, subtitle) in [
        ("7 + 5 =", "12", "7 + 5 = 12"),
        ("3 - 8 =", "-5", "3 - 8 = -5"),
        ("6 × 7 =", "42", "6 × 7 = 42"),
        ("6 ÷ 4 =", "1.5", "6 ÷ 4 = 1.5"),
        ("200 % 10 =", "20", "200 % 10 = 20"),
    ] {
        driver.clear();
        driver.press_sequence(input)?;
        assert_eq!(driver.display(), expected, "{input}");
        assert_eq!(driver.last_result(), subtitle, "{input}");
        assert_eq!(driver.equation(), "", "{input}");
    }
    Ok(())
}

/// Verifies leading-zero and repeated-decimal suppression
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence("0 0 5")?;
    assert_eq!(driver.display(), "5");

    driver.clear();
    driver.press_sequence(". .")?;
    assert_eq!(driver.display(), "0.");

    driver.clear();
    driver.press_sequence("3 . 1 . 4")?;
    assert_eq!(driver.display(), "3.14");
    Ok(())
}

/// Verifies the running equation text through one calculation
pub fn verify_equation_text<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence("1 2")?;
    assert_eq!(driver.equation(), "12");
    driver.press_sequence("÷")?;
    assert_eq!(driver.equation(), "12 / ");
    driver.press_sequence("4")?;
    assert_eq!(driver.equation(), "12 / 4");
    driver.press_sequence("=")?;
    assert_eq!(driver.equation(), "");
    assert_eq!(driver.display(), "3");
    Ok(())
}

/// Verifies the no-op policies: `=` with nothing pending, operator overwrite
pub fn verify_silent_no_ops<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence("=")?;
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.equation(), "");

    driver.clear();
    driver.press_sequence("8 + + × - 3 =")?;
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.last_result(), "8 - 3 = 5");
    Ok(())
}

/// Verifies that the subtitle survives `C`
pub fn verify_last_result_survives_clear<D: CalculatorDriver>(
    driver: &mut D,
) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence("9 × 9 =")?;
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.last_result(), "9 × 9 = 81");
    Ok(())
}

/// Runs every shared scenario
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_digit_entry(driver)?;
    verify_equation_text(driver)?;
    verify_silent_no_ops(driver)?;
    verify_last_result_survives_clear(driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_driver_new() {
        let driver = SessionDriver::new();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.equation(), "");
        assert_eq!(driver.last_result(), "");
    }

    #[test]
    fn test_session_driver_press_sequence_error() {
        let mut driver = SessionDriver::new();
        assert!(driver.press_sequence("7 ^ 2").is_err());
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_session_driver_exposes_calculator() {
        let mut driver = SessionDriver::new();
        driver.press(Key::Digit(3));
        assert_eq!(driver.calculator().session().display_value(), "3");
    }

    #[test]
    fn test_verify_basic_arithmetic() {
        verify_basic_arithmetic(&mut SessionDriver::new()).unwrap();
    }

    #[test]
    fn test_verify_digit_entry() {
        verify_digit_entry(&mut SessionDriver::new()).unwrap();
    }

    #[test]
    fn test_verify_equation_text() {
        verify_equation_text(&mut SessionDriver::new()).unwrap();
    }

    #[test]
    fn test_verify_silent_no_ops() {
        verify_silent_no_ops(&mut SessionDriver::new()).unwrap();
    }

    #[test]
    fn test_verify_all_back_to_back() {
        let mut driver = SessionDriver::new();
        verify_all(&mut driver).unwrap();
        verify_all(&mut driver).unwrap();
    }
}
