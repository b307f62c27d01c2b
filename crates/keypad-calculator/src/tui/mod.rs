//! Terminal frontend (ratatui + crossterm)

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, TerminalSurface};
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI};
