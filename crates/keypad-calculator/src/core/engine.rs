//! Calculator engine: the input state machine
//!
//! Holds the display string, at most one pending operand/operator pair, the
//! waiting-for-operand flag and the bounded history. Every mutation keeps the
//! display parseable as a finite number; a calculation that would break that
//! is rejected and leaves the state untouched.

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::core::format::{display_value, format_number_with, DEFAULT_PRECISION};
use crate::core::history::{History, HistoryEntry};
use crate::core::{CalcError, CalcResult, Calculator, InputEvent, Operator};

/// Coarse state of the input state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Fresh or cleared: display "0", nothing pending
    Idle,
    /// A number is being entered or a result is shown
    OperandEntered,
    /// An operator was chosen and the next digit starts a new number
    OperatorPending,
}

/// What an applied event changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Update {
    /// The history list changed and should be re-rendered
    pub history_changed: bool,
}

/// The calculator state machine
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    pending_operand: Option<f64>,
    pending_operator: Option<Operator>,
    waiting_for_operand: bool,
    history: History,
    precision: usize,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine showing "0" with an empty ten-entry history
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            waiting_for_operand: false,
            history: History::new(),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Creates an engine from a validated configuration
    pub fn with_config(config: &CalculatorConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self {
            history: History::with_capacity(config.history_capacity),
            precision: config.precision,
            ..Self::new()
        })
    }

    /// Dispatches an input event to its handler
    pub fn apply(&mut self, event: InputEvent) -> CalcResult<Update> {
        let history_changed = match event {
            InputEvent::Digit(d) => {
                self.input_digit(d)?;
                false
            }
            InputEvent::Decimal => {
                self.input_decimal();
                false
            }
            InputEvent::Operator(op) => self.set_operator(op)?.is_some(),
            InputEvent::Equals => self.evaluate()?.is_some(),
            InputEvent::Clear => {
                self.clear();
                false
            }
            InputEvent::Backspace => {
                self.backspace();
                false
            }
            InputEvent::ClearHistory => {
                self.clear_history();
                true
            }
        };
        debug!(?event, display = %self.display, state = ?self.state(), "input applied");
        Ok(Update { history_changed })
    }

    /// Enters a digit, starting a fresh number after an operator or equals
    pub fn input_digit(&mut self, digit: u8) -> CalcResult<()> {
        let ch = char::from_digit(u32::from(digit), 10).ok_or(CalcError::InvalidDigit { digit })?;

        let next = if self.waiting_for_operand || self.display == "0" {
            ch.to_string()
        } else {
            format!("{}{ch}", self.display)
        };
        parse_finite(&next)?;

        self.display = next;
        self.waiting_for_operand = false;
        Ok(())
    }

    /// Enters a decimal point; a second point in the same number is ignored
    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Chooses the next operator, completing a pending one first
    ///
    /// Returns the history entry recorded by the completed operation, if any.
    pub fn set_operator(&mut self, op: Operator) -> CalcResult<Option<HistoryEntry>> {
        let input = self.input_value();
        let mut recorded = None;

        match (self.pending_operand, self.pending_operator) {
            (None, _) => self.pending_operand = Some(input),
            (Some(operand), Some(prev)) => {
                let entry = self.complete(operand, prev, input)?;
                self.pending_operand = Some(entry.result);
                recorded = Some(entry);
            }
            (Some(_), None) => {}
        }

        self.waiting_for_operand = true;
        self.pending_operator = Some(op);
        Ok(recorded)
    }

    /// Completes the pending operation; a no-op when nothing is pending
    pub fn evaluate(&mut self) -> CalcResult<Option<HistoryEntry>> {
        let (Some(operand), Some(op)) = (self.pending_operand, self.pending_operator) else {
            debug!("evaluate with nothing pending");
            return Ok(None);
        };

        let entry = self.complete(operand, op, self.input_value())?;
        self.pending_operand = None;
        self.pending_operator = None;
        self.waiting_for_operand = true;
        Ok(Some(entry))
    }

    /// Resets the display and pending state, keeping history
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending_operand = None;
        self.pending_operator = None;
        self.waiting_for_operand = false;
    }

    /// Clears both the calculator state and the history
    pub fn reset(&mut self) {
        self.clear();
        self.clear_history();
    }

    /// Empties the history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Removes the last display character; ignored while waiting for an operand
    pub fn backspace(&mut self) {
        if self.waiting_for_operand {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    /// Computes `lhs op rhs`, records it and shows the result
    fn complete(&mut self, lhs: f64, op: Operator, rhs: f64) -> CalcResult<HistoryEntry> {
        let result = Calculator::calculate(lhs, rhs, op)?;
        let entry = HistoryEntry::new(lhs, op, rhs, result);
        self.history.push(entry);
        self.display = display_value(result);
        Ok(entry)
    }

    fn input_value(&self) -> f64 {
        parse_finite(&self.display).unwrap_or(0.0)
    }

    // ===== Projections =====

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending operation as `"A op"`, or empty when nothing is pending
    #[must_use]
    pub fn operation_text(&self) -> String {
        match (self.pending_operand, self.pending_operator) {
            (Some(operand), Some(op)) => {
                format!("{} {}", format_number_with(operand, self.precision), op.symbol())
            }
            _ => String::new(),
        }
    }

    /// History records, newest first
    #[must_use]
    pub fn history_records(&self) -> Vec<String> {
        self.history.records(self.precision)
    }

    /// The underlying history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Operand captured by the last operator press
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    /// Operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// True right after an operator or equals press
    #[must_use]
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Coarse state of the state machine
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.pending_operator.is_some() && self.waiting_for_operand {
            EngineState::OperatorPending
        } else if self.display == "0"
            && self.pending_operand.is_none()
            && self.pending_operator.is_none()
            && !self.waiting_for_operand
        {
            EngineState::Idle
        } else {
            EngineState::OperandEntered
        }
    }
}

fn parse_finite(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(value) => Err(CalcError::NonFinite { value }),
        Err(_) => Err(CalcError::NonFinite { value: f64::NAN }),
    }
}
