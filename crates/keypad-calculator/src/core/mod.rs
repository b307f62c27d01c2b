//! Calculator core: engine state machine, arithmetic, formatting and history
//!
//! Nothing in here knows about a display surface. Frontends feed
//! [`InputEvent`]s into a [`CalculatorEngine`] and read its projections.

pub mod engine;
pub mod format;
pub mod history;
pub mod input;
mod operations;

pub use engine::{CalculatorEngine, EngineState, Update};
pub use format::{display_value, format_number, format_number_with};
pub use history::{History, HistoryEntry};
pub use input::{InputEvent, KeypadSlot, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};
pub use operations::{Calculator, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while driving the calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A calculation or digit entry produced a value that is not finite
    #[error("Result is not a finite number: {value}")]
    NonFinite {
        /// The offending value
        value: f64,
    },

    /// A digit event outside 0-9
    #[error("Invalid digit: {digit}")]
    InvalidDigit {
        /// The offending digit
        digit: u8,
    },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// JSON (de)serialization failed
    #[error("JSON error: {message}")]
    Json {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}
