//! Terminal application state

use crossterm::event::{KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use crate::config::CalculatorConfig;
use crate::core::{CalcResult, CalculatorEngine, InputEvent};
use crate::render::{CalculatorWidget, RenderSurface};

/// Last rendered projections, drawn by the ratatui UI on every frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalSurface {
    /// Main display text
    pub display: String,
    /// Pending operation line
    pub operation: String,
    /// History records, newest first
    pub history: Vec<String>,
}

impl RenderSurface for TerminalSurface {
    fn set_display_text(&mut self, text: &str) {
        self.display = text.to_string();
    }

    fn set_operation_text(&mut self, text: &str) {
        self.operation = text.to_string();
    }

    fn render_history(&mut self, records: &[String]) {
        self.history = records.to_vec();
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    widget: CalculatorWidget<TerminalSurface>,
    keypad: Keypad,
    input: InputHandler,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(CalculatorEngine::new())
    }

    /// Creates a calculator app from a configuration
    pub fn with_config(config: &CalculatorConfig) -> CalcResult<Self> {
        Ok(Self::with_engine(CalculatorEngine::with_config(config)?))
    }

    fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            widget: CalculatorWidget::with_engine(engine, TerminalSurface::default()),
            keypad: Keypad::new(),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// Handles a terminal key event; returns true if it changed anything
    pub fn handle_key_event(&mut self, event: KeyEvent) -> bool {
        match self.input.handle_key(event) {
            KeyAction::Quit => {
                self.quit();
                true
            }
            KeyAction::Input(input) => {
                self.keypad.highlight(input);
                self.widget.handle(input)
            }
            KeyAction::None => {
                self.keypad.release_all();
                false
            }
        }
    }

    /// Handles a browser-style key name such as `"7"` or `"Enter"`
    pub fn press_key(&mut self, name: &str) -> bool {
        InputHandler::key_code(name)
            .is_some_and(|code| self.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    /// Clicks the keypad button producing `event`
    pub fn press_button(&mut self, event: InputEvent) -> bool {
        self.keypad
            .find_button(event)
            .is_some_and(|idx| self.click_button(idx))
    }

    /// Handles a mouse click at terminal coordinates over `keypad_area`
    pub fn handle_mouse_click(&mut self, keypad_area: Rect, x: u16, y: u16) -> bool {
        self.keypad
            .hit_test(keypad_area, x, y)
            .is_some_and(|idx| self.click_button(idx))
    }

    fn click_button(&mut self, index: usize) -> bool {
        let Some(event) = self.keypad.get_button(index).map(|b| b.event) else {
            return false;
        };
        self.keypad.highlight(event);
        self.widget.handle(event)
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.widget.surface().display
    }

    /// Pending operation line
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.widget.surface().operation
    }

    /// Rendered history, newest first
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.widget.surface().history
    }

    /// The underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        self.widget.engine()
    }

    /// The keypad, with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
