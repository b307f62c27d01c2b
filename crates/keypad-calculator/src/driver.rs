//! Frontend-independent calculator driver
//!
//! The same `verify_*` suites run against every frontend: each frontend
//! implements [`CalculatorDriver`] by feeding keys or button presses through
//! its own input path and reading back what it actually rendered.

use crate::core::{InputEvent, Operator};

/// Drives a calculator frontend the way a user would
pub trait CalculatorDriver {
    /// Sends a browser-style key name (`"7"`, `"+"`, `"Enter"`, `"Escape"`...)
    ///
    /// Returns true if the frontend used the key.
    fn press_key(&mut self, key: &str) -> bool;

    /// Clicks the keypad button producing `event`
    fn press_button(&mut self, event: InputEvent) -> bool;

    /// Rendered display text
    fn display(&self) -> String;

    /// Rendered operation line
    fn operation(&self) -> String;

    /// Rendered history records, newest first
    fn history(&self) -> Vec<String>;

    /// Presses each whitespace-separated key in turn
    fn press_keys(&mut self, keys: &str) {
        for key in keys.split_whitespace() {
            self.press_key(key);
        }
    }

    /// Clears the calculator and its history
    fn reset(&mut self) {
        self.press_key("Escape");
        self.press_button(InputEvent::ClearHistory);
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, InputEvent};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_key(&mut self, key: &str) -> bool {
            self.app.press_key(key)
        }

        fn press_button(&mut self, event: InputEvent) -> bool {
            self.app.press_button(event)
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn operation(&self) -> String {
            self.app.operation().to_string()
        }

        fn history(&self) -> Vec<String> {
            self.app.history().to_vec()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared verification suites =====

/// Digits concatenate with the leading zero suppressed
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.display(), "0");

    driver.press_keys("1 2 3");
    assert_eq!(driver.display(), "123");
    driver.reset();

    driver.press_keys("0 0 7");
    assert_eq!(driver.display(), "7");
    driver.reset();
}

/// A decimal point is added once; after an operator it starts "0."
pub fn verify_decimal_input<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys(". 2 . 5");
    assert_eq!(driver.display(), "0.25");

    driver.press_keys("+ .");
    assert_eq!(driver.display(), "0.");
    driver.press_keys("5 =");
    assert_eq!(driver.display(), "0.75");
    assert_eq!(driver.history(), vec!["0.25 + 0.5 = 0.75"]);
    driver.reset();
}

/// Each operator on its own
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("1 2 + 8 =", "20"),
        ("3 - 5 =", "-2"),
        ("6 * 7 =", "42"),
        ("7 / 2 =", "3.5"),
    ] {
        driver.reset();
        driver.press_keys(keys);
        assert_eq!(driver.display(), expected, "keys {keys}");
    }

    driver.reset();
    driver.press_keys("1 2 + 8 =");
    assert_eq!(driver.history(), vec!["12 + 8 = 20"]);
    driver.reset();
}

/// Division by zero shows 0 and is recorded
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("5 / 0 =");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.history(), vec!["5 / 0 = 0"]);
    driver.reset();
}

/// Operators chain left to right, each completed step recorded
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("1 + 2 +");
    assert_eq!(driver.display(), "3");
    assert_eq!(driver.operation(), "3 +");

    driver.press_keys("3 =");
    assert_eq!(driver.display(), "6");
    assert_eq!(driver.history(), vec!["3 + 3 = 6", "1 + 2 = 3"]);
    driver.reset();
}

/// The operation line shows the pending operand and operator
pub fn verify_operation_text<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.operation(), "");
    driver.press_keys("9 *");
    assert_eq!(driver.operation(), "9 *");
    driver.press_keys("2");
    assert_eq!(driver.operation(), "9 *");
    driver.press_keys("=");
    assert_eq!(driver.operation(), "");
    driver.reset();
}

/// Clear resets the display and pending state but keeps history
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("2 + 2 = 5 *");
    driver.press_key("Escape");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.operation(), "");
    assert_eq!(driver.history(), vec!["2 + 2 = 4"]);

    // After clear, "=" has nothing to complete
    driver.press_keys("7 =");
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.history().len(), 1);
    driver.reset();
}

/// Backspace trims the number being typed; ignored while waiting
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("1 2 Backspace");
    assert_eq!(driver.display(), "1");
    driver.press_key("Backspace");
    assert_eq!(driver.display(), "0");

    driver.press_keys("4 5 +");
    driver.press_key("Backspace");
    assert_eq!(driver.display(), "45");
    driver.reset();
}

/// History keeps the ten newest entries, newest first
pub fn verify_history_limit<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    for d in 0..=9 {
        driver.press_keys(&format!("{d} + 1 ="));
    }
    driver.press_keys("9 * 9 =");

    let history = driver.history();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "9 * 9 = 81");
    assert_eq!(history[9], "1 + 1 = 2");
    driver.reset();
}

/// The clear-history control empties the list and keeps the display
pub fn verify_clear_history<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("8 - 3 =");
    assert_eq!(driver.history().len(), 1);

    assert!(driver.press_button(InputEvent::ClearHistory));
    assert!(driver.history().is_empty());
    assert_eq!(driver.display(), "5");
    driver.reset();
}

/// The on-screen keypad drives the same engine as the keyboard
pub fn verify_keypad_buttons<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    for event in [
        InputEvent::Digit(7),
        InputEvent::Operator(Operator::Multiply),
        InputEvent::Digit(6),
        InputEvent::Equals,
    ] {
        assert!(driver.press_button(event), "button for {event:?}");
    }
    assert_eq!(driver.display(), "42");
    assert_eq!(driver.history(), vec!["7 * 6 = 42"]);

    assert!(driver.press_button(InputEvent::Clear));
    assert_eq!(driver.display(), "0");
    driver.reset();
}

/// Keys outside the keypad change nothing
pub fn verify_ignored_keys<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_key("4");
    for key in ["x", "^", "%", "Tab"] {
        assert!(!driver.press_key(key), "key {key}");
    }
    assert_eq!(driver.display(), "4");
    assert_eq!(driver.operation(), "");
    driver.reset();
}

/// Runs every suite
pub fn run_all_suites<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_input(driver);
    verify_basic_arithmetic(driver);
    verify_divide_by_zero(driver);
    verify_chained_operations(driver);
    verify_operation_text(driver);
    verify_clear(driver);
    verify_backspace(driver);
    verify_history_limit(driver);
    verify_clear_history(driver);
    verify_keypad_buttons(driver);
    verify_ignored_keys(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;
        use crate::tui::CalculatorApp;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.display(), "0");
            assert!(driver.history().is_empty());
        }

        #[test]
        fn test_tui_driver_with_app() {
            let mut app = CalculatorApp::new();
            app.press_key("3");
            let driver = TuiDriver::with_app(app);
            assert_eq!(driver.display(), "3");
            assert_eq!(driver.app().display(), "3");
        }

        #[test]
        fn test_tui_driver_reset() {
            let mut driver = TuiDriver::new();
            driver.press_keys("1 + 1 = 5");
            driver.reset();
            assert_eq!(driver.display(), "0");
            assert!(driver.history().is_empty());
        }

        #[test]
        fn test_unified_digit_entry() {
            verify_digit_entry(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_decimal_input() {
            verify_decimal_input(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_basic_arithmetic() {
            verify_basic_arithmetic(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_divide_by_zero() {
            verify_divide_by_zero(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_chained_operations() {
            verify_chained_operations(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_clear_and_backspace() {
            let mut driver = TuiDriver::new();
            verify_clear(&mut driver);
            verify_backspace(&mut driver);
        }

        #[test]
        fn test_unified_history() {
            let mut driver = TuiDriver::new();
            verify_history_limit(&mut driver);
            verify_clear_history(&mut driver);
        }

        #[test]
        fn test_unified_keypad_and_ignored_keys() {
            let mut driver = TuiDriver::new();
            verify_keypad_buttons(&mut driver);
            verify_ignored_keys(&mut driver);
        }

        #[test]
        fn test_all_suites() {
            run_all_suites(&mut TuiDriver::new());
        }
    }
}
