//! Driver for the browser frontend, backed by the mock DOM
//!
//! Events go through the same path as in the page: keydown keys through
//! `handle_key`, clicks through the clicked element's data attributes. Reads
//! come from the DOM, not from the engine.

use super::dom::{DomEvent, MockDom, CLEAR_HISTORY_ID, DISPLAY_ID, OPERATION_ID};
use super::keypad::WasmKeypad;
use crate::config::CalculatorConfig;
use crate::core::{CalcResult, CalculatorEngine, InputEvent};
use crate::driver::CalculatorDriver;
use crate::render::CalculatorWidget;

/// Calculator widget rendering into a [`MockDom`]
#[derive(Debug)]
pub struct WasmDriver {
    widget: CalculatorWidget<MockDom>,
    keypad: WasmKeypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a fresh calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(CalculatorEngine::new())
    }

    /// Creates a driver from a configuration
    pub fn with_config(config: &CalculatorConfig) -> CalcResult<Self> {
        Ok(Self::with_engine(CalculatorEngine::with_config(config)?))
    }

    fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            widget: CalculatorWidget::with_engine(engine, MockDom::calculator()),
            keypad: WasmKeypad::new(),
        }
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.widget.surface()
    }

    /// Returns the engine behind the page
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        self.widget.engine()
    }

    /// Dispatches a document keydown
    pub fn key_down(&mut self, key: &str) -> bool {
        self.widget.surface_mut().dispatch_event(DomEvent::key_down(key));
        self.widget.handle_key(key)
    }

    /// Clicks an element by id; elements without a `data-action` do nothing
    pub fn click(&mut self, element_id: &str) -> bool {
        self.widget
            .surface_mut()
            .dispatch_event(DomEvent::click(element_id));

        let Some(element) = self.widget.surface().get_element(element_id) else {
            return false;
        };
        let action = element.get_attr("data-action").map(str::to_string);
        let value = element.get_attr("data-value").map(str::to_string);
        match action {
            Some(action) => self.widget.handle_button(&action, value.as_deref()),
            None => false,
        }
    }
}

impl CalculatorDriver for WasmDriver {
    fn press_key(&mut self, key: &str) -> bool {
        self.key_down(key)
    }

    fn press_button(&mut self, event: InputEvent) -> bool {
        let id = if event == InputEvent::ClearHistory {
            CLEAR_HISTORY_ID.to_string()
        } else {
            match self.keypad.find_button_by_event(event) {
                Some(button) => button.id.clone(),
                None => return false,
            }
        };
        self.click(&id)
    }

    fn display(&self) -> String {
        self.dom()
            .get_element_text(DISPLAY_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn operation(&self) -> String {
        self.dom()
            .get_element_text(OPERATION_ID)
            .unwrap_or_default()
            .to_string()
    }

    fn history(&self) -> Vec<String> {
        self.dom().history_texts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        run_all_suites, verify_backspace, verify_basic_arithmetic,
        verify_chained_operations, verify_clear, verify_clear_history, verify_decimal_input,
        verify_digit_entry, verify_divide_by_zero, verify_history_limit, verify_ignored_keys,
        verify_keypad_buttons, verify_operation_text,
    };

    // ===== Constructor tests =====

    #[test]
    fn test_wasm_driver_new_renders_page() {
        let driver = WasmDriver::new();
        assert_eq!(driver.display(), "0");
        assert_eq!(driver.operation(), "");
        assert!(driver.history().is_empty());
        assert!(driver.dom().shows_no_history());
    }

    #[test]
    fn test_wasm_driver_with_config() {
        let config = CalculatorConfig::new().with_precision(4);
        let mut driver = WasmDriver::with_config(&config).unwrap();
        driver.press_keys("2 / 3 =");
        assert_eq!(driver.history(), vec!["2 / 3 = 0.6667"]);
        assert_eq!(driver.display(), driver.engine().display());
    }

    #[test]
    fn test_wasm_driver_with_invalid_config() {
        let config = CalculatorConfig::new().with_history_capacity(0);
        assert!(WasmDriver::with_config(&config).is_err());
    }

    // ===== Event tests =====

    #[test]
    fn test_key_down_records_event() {
        let mut driver = WasmDriver::new();
        driver.key_down("5");
        assert_eq!(driver.dom().event_history(), [DomEvent::key_down("5")]);
        assert_eq!(driver.display(), "5");
    }

    #[test]
    fn test_click_keypad_buttons() {
        let mut driver = WasmDriver::new();
        for id in ["btn-9", "btn-minus", "btn-4", "btn-equals"] {
            assert!(driver.click(id), "click {id}");
        }
        assert_eq!(driver.display(), "5");
        assert_eq!(driver.history(), vec!["9 - 4 = 5"]);
        assert_eq!(driver.dom().event_history().len(), 4);
    }

    #[test]
    fn test_click_clear_history_button() {
        let mut driver = WasmDriver::new();
        driver.press_keys("1 + 1 =");
        assert!(driver.click(CLEAR_HISTORY_ID));
        assert!(driver.history().is_empty());
        assert!(driver.dom().shows_no_history());
    }

    #[test]
    fn test_click_non_button() {
        let mut driver = WasmDriver::new();
        assert!(!driver.click(DISPLAY_ID));
        assert!(!driver.click("missing"));
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_history_items_rendered_as_elements() {
        let mut driver = WasmDriver::new();
        driver.press_keys("1 + 2 + 3 =");
        assert_eq!(driver.dom().get_element_text("history-0"), Some("3 + 3 = 6"));
        assert_eq!(driver.dom().get_element_text("history-1"), Some("1 + 2 = 3"));
    }

    // ===== Shared suites =====

    #[test]
    fn test_unified_digit_and_decimal() {
        let mut driver = WasmDriver::new();
        verify_digit_entry(&mut driver);
        verify_decimal_input(&mut driver);
    }

    #[test]
    fn test_unified_arithmetic() {
        let mut driver = WasmDriver::new();
        verify_basic_arithmetic(&mut driver);
        verify_divide_by_zero(&mut driver);
        verify_chained_operations(&mut driver);
        verify_operation_text(&mut driver);
    }

    #[test]
    fn test_unified_clear_and_backspace() {
        let mut driver = WasmDriver::new();
        verify_clear(&mut driver);
        verify_backspace(&mut driver);
    }

    #[test]
    fn test_unified_history() {
        let mut driver = WasmDriver::new();
        verify_history_limit(&mut driver);
        verify_clear_history(&mut driver);
    }

    #[test]
    fn test_unified_keypad_and_ignored_keys() {
        let mut driver = WasmDriver::new();
        verify_keypad_buttons(&mut driver);
        verify_ignored_keys(&mut driver);
    }

    #[test]
    fn test_all_suites() {
        run_all_suites(&mut WasmDriver::new());
    }
}
