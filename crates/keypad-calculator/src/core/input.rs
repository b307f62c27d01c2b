//! Input events and how keys and keypad buttons map onto them

use crate::core::Operator;

/// Every input the calculator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Choose a binary operator
    Operator(Operator),
    /// Complete the pending operation
    Equals,
    /// Reset the display and pending state
    Clear,
    /// Drop the last entered character
    Backspace,
    /// Empty the history list
    ClearHistory,
}

impl InputEvent {
    /// Maps a keyboard `key` value (as in `KeyboardEvent.key`) to an event
    ///
    /// Returns `None` for keys the calculator ignores.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::Decimal),
            "+" | "-" | "*" | "/" => Operator::from_symbol(key).map(Self::Operator),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "c" | "C" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            _ => Self::digit_from_str(key),
        }
    }

    /// Maps a keypad button's `data-action` / `data-value` pair to an event
    #[must_use]
    pub fn from_button(action: &str, value: Option<&str>) -> Option<Self> {
        match action {
            "number" => value.and_then(Self::digit_from_str),
            "decimal" => Some(Self::Decimal),
            "operation" => value.and_then(Operator::from_symbol).map(Self::Operator),
            "equals" => Some(Self::Equals),
            "clear" => Some(Self::Clear),
            "backspace" => Some(Self::Backspace),
            "clear-history" => Some(Self::ClearHistory),
            _ => None,
        }
    }

    fn digit_from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            _ => None,
        }
    }

    /// The `data-action` attribute for this event's button
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Digit(_) => "number",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operation",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Backspace => "backspace",
            Self::ClearHistory => "clear-history",
        }
    }

    /// The `data-value` attribute, for buttons that carry one
    #[must_use]
    pub fn value(&self) -> Option<String> {
        match self {
            Self::Digit(d) => Some(d.to_string()),
            Self::Operator(op) => Some(op.symbol().to_string()),
            _ => None,
        }
    }

    /// Text shown on the keypad button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ClearHistory => "CH".to_string(),
        }
    }

    /// Element ID for this event's button
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Operator(op) => format!("btn-{}", op.name()),
            other => format!("btn-{}", other.action()),
        }
    }
}

/// A button position on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadSlot {
    /// What the button does
    pub event: InputEvent,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

/// Keypad rows
pub const KEYPAD_ROWS: usize = 5;
/// Keypad columns
pub const KEYPAD_COLS: usize = 4;

const fn slot(event: InputEvent, row: usize, col: usize) -> KeypadSlot {
    KeypadSlot { event, row, col }
}

/// Shared keypad layout for every frontend
///
/// ```text
/// [ C ] [ ⌫ ] [ CH] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ = ]
/// ```
pub const KEYPAD_LAYOUT: [KeypadSlot; 19] = [
    slot(InputEvent::Clear, 0, 0),
    slot(InputEvent::Backspace, 0, 1),
    slot(InputEvent::ClearHistory, 0, 2),
    slot(InputEvent::Operator(Operator::Divide), 0, 3),
    slot(InputEvent::Digit(7), 1, 0),
    slot(InputEvent::Digit(8), 1, 1),
    slot(InputEvent::Digit(9), 1, 2),
    slot(InputEvent::Operator(Operator::Multiply), 1, 3),
    slot(InputEvent::Digit(4), 2, 0),
    slot(InputEvent::Digit(5), 2, 1),
    slot(InputEvent::Digit(6), 2, 2),
    slot(InputEvent::Operator(Operator::Subtract), 2, 3),
    slot(InputEvent::Digit(1), 3, 0),
    slot(InputEvent::Digit(2), 3, 1),
    slot(InputEvent::Digit(3), 3, 2),
    slot(InputEvent::Operator(Operator::Add), 3, 3),
    slot(InputEvent::Digit(0), 4, 0),
    slot(InputEvent::Decimal, 4, 1),
    slot(InputEvent::Equals, 4, 2),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ===== Keyboard mapping =====

    #[test]
    fn test_from_key_digits() {
        for d in 0..=9u8 {
            assert_eq!(
                InputEvent::from_key(&d.to_string()),
                Some(InputEvent::Digit(d))
            );
        }
    }

    #[test]
    fn test_from_key_operators() {
        assert_eq!(
            InputEvent::from_key("+"),
            Some(InputEvent::Operator(Operator::Add))
        );
        assert_eq!(
            InputEvent::from_key("-"),
            Some(InputEvent::Operator(Operator::Subtract))
        );
        assert_eq!(
            InputEvent::from_key("*"),
            Some(InputEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            InputEvent::from_key("/"),
            Some(InputEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_from_key_actions() {
        assert_eq!(InputEvent::from_key("."), Some(InputEvent::Decimal));
        assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key("="), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key("Escape"), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_key("c"), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_key("C"), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_key("Backspace"), Some(InputEvent::Backspace));
    }

    #[test]
    fn test_from_key_unmapped() {
        for key in ["a", "x", "×", "÷", "^", "%", "Tab", "Delete", "12", "", "F1"] {
            assert_eq!(InputEvent::from_key(key), None, "key {key:?}");
        }
    }

    // ===== Button mapping =====

    #[test]
    fn test_from_button() {
        assert_eq!(
            InputEvent::from_button("number", Some("7")),
            Some(InputEvent::Digit(7))
        );
        assert_eq!(
            InputEvent::from_button("operation", Some("×")),
            Some(InputEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            InputEvent::from_button("clear-history", None),
            Some(InputEvent::ClearHistory)
        );
    }

    #[test]
    fn test_from_button_missing_value() {
        assert_eq!(InputEvent::from_button("number", None), None);
        assert_eq!(InputEvent::from_button("operation", None), None);
        assert_eq!(InputEvent::from_button("number", Some("x")), None);
    }

    #[test]
    fn test_from_button_unknown_action() {
        assert_eq!(InputEvent::from_button("percent", None), None);
    }

    #[test]
    fn test_button_attributes_map_back() {
        for slot in KEYPAD_LAYOUT {
            let value = slot.event.value();
            assert_eq!(
                InputEvent::from_button(slot.event.action(), value.as_deref()),
                Some(slot.event)
            );
        }
    }

    // ===== Layout =====

    #[test]
    fn test_layout_has_every_digit_and_operator() {
        let events: HashSet<InputEvent> = KEYPAD_LAYOUT.iter().map(|s| s.event).collect();
        for d in 0..=9 {
            assert!(events.contains(&InputEvent::Digit(d)));
        }
        for op in Operator::ALL {
            assert!(events.contains(&InputEvent::Operator(op)));
        }
        assert!(events.contains(&InputEvent::Equals));
        assert!(events.contains(&InputEvent::Backspace));
    }

    #[test]
    fn test_layout_positions_unique_and_in_bounds() {
        let mut seen = HashSet::new();
        for slot in KEYPAD_LAYOUT {
            assert!(slot.row < KEYPAD_ROWS && slot.col < KEYPAD_COLS);
            assert!(seen.insert((slot.row, slot.col)));
        }
    }

    #[test]
    fn test_element_ids_unique() {
        let ids: HashSet<String> = KEYPAD_LAYOUT.iter().map(|s| s.event.element_id()).collect();
        assert_eq!(ids.len(), KEYPAD_LAYOUT.len());
    }

    #[test]
    fn test_labels() {
        assert_eq!(InputEvent::Digit(3).label(), "3");
        assert_eq!(InputEvent::Operator(Operator::Divide).label(), "÷");
        assert_eq!(InputEvent::Backspace.label(), "⌫");
    }
}
