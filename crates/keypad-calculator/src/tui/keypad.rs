//! Clickable keypad for the terminal frontend
//!
//! Buttons come from the shared [`KEYPAD_LAYOUT`], so the terminal and the
//! browser show the same grid. A button can be clicked with the mouse and is
//! highlighted when its key is pressed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{InputEvent, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The event this button produces
    pub event: InputEvent,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            event,
            row,
            col,
            pressed: false,
        }
    }

    /// Text on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.event.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.event {
            InputEvent::Digit(_) | InputEvent::Decimal => Style::default().fg(Color::White),
            InputEvent::Operator(_) => Style::default().fg(Color::Yellow),
            InputEvent::Equals => Style::default().fg(Color::Green),
            InputEvent::Clear | InputEvent::ClearHistory => Style::default().fg(Color::Red),
            InputEvent::Backspace => Style::default().fg(Color::Cyan),
        }
    }
}

/// The 5x4 keypad; the bottom-right cell is empty
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_LAYOUT
            .iter()
            .map(|slot| KeypadButton::new(slot.event, slot.row, slot.col))
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

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.row == row && b.col == col)
    }

    /// Finds the index of the button producing `event`
    #[must_use]
    pub fn find_button(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Marks a button as pressed
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button producing `event`
    pub fn highlight(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(idx) = self.find_button(event) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / KEYPAD_COLS as u16;
        let btn_height = (area.height - 2) / KEYPAD_ROWS as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.index_at(row, col)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < KEYPAD_COLS as u16 || inner.height < KEYPAD_ROWS as u16 {
            return;
        }

        let btn_width = inner.width / KEYPAD_COLS as u16;
        let btn_height = inner.height / KEYPAD_ROWS as u16;
        if btn_width < 3 {
            return;
        }

        for btn in self.keypad.buttons() {
            let x = inner.x + (btn.col as u16 * btn_width);
            let y = inner.y + (btn.row as u16 * btn_height);

            let span = Span::styled(format!("[{}]", btn.label()), btn.style());
            let label_x = x + btn_width.saturating_sub(span.width() as u16) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &span, btn_width);
            }
        }
    }
}
