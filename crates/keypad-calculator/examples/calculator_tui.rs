//! Keypad calculator in the terminal
//!
//! Keys: digits, `.`, `+ - * /`, Enter or `=`, Backspace, Escape or `c`.
//! Ctrl+L clears history, Ctrl+C or Ctrl+Q quits. Keypad buttons are
//! clickable with the mouse.
//!
//! Run with: cargo run --example calculator_tui
//!
//! Set `RUST_LOG=keypad_calculator=debug` to write a trace to
//! `calculator_tui.log`; the terminal itself is owned by the UI.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calculator::tui::{keypad_area, render, CalculatorApp};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "calculator_tui.log";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Logs to a file only when `RUST_LOG` is set
fn init_tracing() -> io::Result<()> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };
    let file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn handle_mouse(app: &mut CalculatorApp, frame_area: Rect, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.handle_mouse_click(keypad_area(frame_area), mouse.column, mouse.row);
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();

    loop {
        let frame_area = terminal.draw(|f| render(&app, f))?.area;

        match event::read()? {
            Event::Key(key) => {
                app.handle_key_event(key);
            }
            Event::Mouse(mouse) => handle_mouse(&mut app, frame_area, mouse),
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
