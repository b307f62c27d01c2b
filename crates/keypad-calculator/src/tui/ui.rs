//! Terminal rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title on the outer border
pub const TITLE: &str = " Keypad Calculator ";

/// Shortcuts listed in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/", "Operator"),
    ("Enter =", "Evaluate"),
    ("Esc c", "Clear"),
    ("Bksp", "Backspace"),
    ("Ctrl+L", "Clear history"),
    ("Ctrl+C", "Quit"),
    ("Mouse", "Press key"),
];

/// Placeholder shown when the history is empty
pub const NO_HISTORY: &str = "No calculations yet";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Area occupied by the keypad for a frame of size `area`
///
/// Used to map mouse clicks back to keypad buttons.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    columns(area)[1]
}

fn columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),    // Display + history
            Constraint::Length(22), // Keypad
            Constraint::Length(22), // Help
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.app.operation().to_string(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                self.app.display().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let history = self.app.history();
        let items: Vec<ListItem> = if history.is_empty() {
            vec![ListItem::new(Span::styled(
                NO_HISTORY,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))]
        } else {
            history
                .iter()
                .map(|record| {
                    ListItem::new(Span::styled(
                        record.as_str(),
                        Style::default().fg(Color::Cyan),
                    ))
                })
                .collect()
        };

        List::new(items)
            .block(
                Block::default()
                    .title(" History (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let cols = columns(area);
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Operation + display
                Constraint::Min(3),    // History
            ])
            .split(cols[0]);

        self.render_display(main[0], buf);
        self.render_history(main[1], buf);
        KeypadWidget::new(self.app.keypad()).render(cols[1], buf);
        Self::render_help(cols[2], buf);
    }
}
