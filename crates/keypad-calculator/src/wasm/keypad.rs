//! Keypad for the browser frontend
//!
//! Mirrors the terminal keypad: both are built from [`KEYPAD_LAYOUT`]. Every
//! button carries `data-action` and, for digits and operators, `data-value`,
//! which is what the page glue hands back to the calculator on click.

use super::dom::DomElement;
use crate::core::{InputEvent, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};

/// Element id of the keypad container
pub const KEYPAD_ID: &str = "keypad";

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button produces
    pub event: InputEvent,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            event,
            id: event.element_id(),
            row,
            col,
        }
    }

    /// CSS class describing the button's role
    #[must_use]
    pub fn role_class(&self) -> &'static str {
        match self.event {
            InputEvent::Digit(_) | InputEvent::Decimal => "btn-number",
            InputEvent::Operator(_) => "btn-operator",
            InputEvent::Equals => "btn-equals",
            InputEvent::Clear | InputEvent::Backspace | InputEvent::ClearHistory => {
                "btn-function"
            }
        }
    }

    /// Builds the `<button>` element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.event.label())
            .with_class("btn")
            .with_class(self.role_class())
            .with_attr("data-action", self.event.action());
        if let Some(value) = self.event.value() {
            elem = elem.with_attr("data-value", &value);
        }
        elem
    }
}

/// Browser keypad layout
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_LAYOUT
            .iter()
            .map(|slot| KeypadButtonDef::new(slot.event, slot.row, slot.col))
            .collect();
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (KEYPAD_ROWS, KEYPAD_COLS)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column; empty cells return `None`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that produces `event`
    #[must_use]
    pub fn find_button_by_event(&self, event: InputEvent) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons.iter().map(KeypadButtonDef::to_element).collect()
    }

    /// Creates the keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements()
            .into_iter()
            .fold(
                DomElement::new("div").with_id(KEYPAD_ID).with_class("buttons"),
                DomElement::with_child,
            )
    }

    /// Maps a click on a keypad button to its event
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<InputEvent> {
        self.find_button_by_id(element_id).map(|btn| btn.event)
    }

    /// Maps any clicked element to an event through its data attributes
    #[must_use]
    pub fn event_for_element(element: &DomElement) -> Option<InputEvent> {
        let action = element.get_attr("data-action")?;
        InputEvent::from_button(action, element.get_attr("data-value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    // ===== KeypadButtonDef tests =====

    #[test]
    fn test_button_def_ids() {
        assert_eq!(KeypadButtonDef::new(InputEvent::Digit(5), 2, 1).id, "btn-5");
        assert_eq!(
            KeypadButtonDef::new(InputEvent::Operator(Operator::Add), 3, 3).id,
            "btn-plus"
        );
        assert_eq!(
            KeypadButtonDef::new(InputEvent::Operator(Operator::Divide), 0, 3).id,
            "btn-divide"
        );
        assert_eq!(KeypadButtonDef::new(InputEvent::Decimal, 4, 1).id, "btn-decimal");
        assert_eq!(KeypadButtonDef::new(InputEvent::Equals, 4, 2).id, "btn-equals");
        assert_eq!(KeypadButtonDef::new(InputEvent::Clear, 0, 0).id, "btn-clear");
    }

    #[test]
    fn test_button_def_element_attributes() {
        let elem = KeypadButtonDef::new(InputEvent::Operator(Operator::Multiply), 1, 3).to_element();
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.text_content, "×");
        assert!(elem.has_class("btn"));
        assert!(elem.has_class("btn-operator"));
        assert_eq!(elem.get_attr("data-action"), Some("operation"));
        assert_eq!(elem.get_attr("data-value"), Some("*"));
    }

    #[test]
    fn test_button_def_element_without_value() {
        let elem = KeypadButtonDef::new(InputEvent::Equals, 4, 2).to_element();
        assert_eq!(elem.get_attr("data-action"), Some("equals"));
        assert_eq!(elem.get_attr("data-value"), None);
        assert!(elem.has_class("btn-equals"));
    }

    // ===== WasmKeypad tests =====

    #[test]
    fn test_wasm_keypad_new() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.button_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_wasm_keypad_get_button_at() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().event, InputEvent::Clear);
        assert_eq!(keypad.get_button_at(1, 0).unwrap().event, InputEvent::Digit(7));
        assert_eq!(
            keypad.get_button_at(0, 3).unwrap().event,
            InputEvent::Operator(Operator::Divide)
        );
        assert_eq!(keypad.get_button_at(4, 2).unwrap().event, InputEvent::Equals);
    }

    #[test]
    fn test_wasm_keypad_gap_and_out_of_bounds() {
        let keypad = WasmKeypad::new();
        assert!(keypad.get_button_at(4, 3).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_wasm_keypad_find_button() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.find_button_by_id("btn-9").unwrap().event, InputEvent::Digit(9));
        assert!(keypad.find_button_by_id("btn-power").is_none());
        assert_eq!(
            keypad.find_button_by_event(InputEvent::Backspace).unwrap().id,
            "btn-backspace"
        );
    }

    #[test]
    fn test_wasm_keypad_handle_click() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.handle_click("btn-3"), Some(InputEvent::Digit(3)));
        assert_eq!(
            keypad.handle_click("btn-minus"),
            Some(InputEvent::Operator(Operator::Subtract))
        );
        assert_eq!(keypad.handle_click("display"), None);
    }

    #[test]
    fn test_wasm_keypad_container() {
        let keypad = WasmKeypad::new();
        let container = keypad.create_keypad_element();
        assert_eq!(container.id, KEYPAD_ID);
        assert_eq!(container.children.len(), 19);
    }

    #[test]
    fn test_every_button_element_maps_back() {
        let keypad = WasmKeypad::new();
        for (def, elem) in keypad.buttons().iter().zip(keypad.create_dom_elements()) {
            assert_eq!(WasmKeypad::event_for_element(&elem), Some(def.event));
        }
    }

    #[test]
    fn test_event_for_element_without_action() {
        assert_eq!(WasmKeypad::event_for_element(&DomElement::new("div")), None);
    }
}
