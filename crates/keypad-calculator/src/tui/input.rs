//! Keyboard input handling for the terminal frontend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::InputEvent;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the calculator
    Input(InputEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps crossterm key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Input(InputEvent::ClearHistory),
                _ => KeyAction::None,
            };
        }

        Self::key_name(code)
            .and_then(|name| InputEvent::from_key(&name))
            .map_or(KeyAction::None, KeyAction::Input)
    }

    /// Browser-style `key` name for a key code
    #[must_use]
    pub fn key_name(code: KeyCode) -> Option<String> {
        match code {
            KeyCode::Char(c) => Some(c.to_string()),
            KeyCode::Enter => Some("Enter".to_string()),
            KeyCode::Esc => Some("Escape".to_string()),
            KeyCode::Backspace => Some("Backspace".to_string()),
            _ => None,
        }
    }

    /// Key code for a browser-style `key` name
    #[must_use]
    pub fn key_code(name: &str) -> Option<KeyCode> {
        match name {
            "Enter" => Some(KeyCode::Enter),
            "Escape" => Some(KeyCode::Esc),
            "Backspace" => Some(KeyCode::Backspace),
            "Tab" => Some(KeyCode::Tab),
            "Delete" => Some(KeyCode::Delete),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(KeyCode::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Input(InputEvent::Digit(i as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            let c = op.symbol().chars().next().unwrap();
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Input(InputEvent::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_special_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Input(InputEvent::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Input(InputEvent::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Input(InputEvent::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('c'))),
            KeyAction::Input(InputEvent::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Input(InputEvent::Backspace)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Input(InputEvent::Decimal)
        );
    }

    #[test]
    fn test_handle_ctrl_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::Input(InputEvent::ClearHistory)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_handle_ignored_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('x'),
            KeyCode::Char('^'),
            KeyCode::Tab,
            KeyCode::Delete,
            KeyCode::Left,
            KeyCode::Up,
            KeyCode::F(1),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_key_name_and_code_agree() {
        for name in ["7", "+", ".", "Enter", "Escape", "Backspace"] {
            let code = InputHandler::key_code(name).unwrap();
            assert_eq!(InputHandler::key_name(code).as_deref(), Some(name));
        }
    }

    #[test]
    fn test_key_code_unknown() {
        assert_eq!(InputHandler::key_code("F13"), None);
        assert_eq!(InputHandler::key_code(""), None);
        assert_eq!(InputHandler::key_code("Tab"), Some(KeyCode::Tab));
    }
}
