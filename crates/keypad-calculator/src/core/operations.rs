//! Binary operators and the arithmetic behind them
//!
//! Division by zero is a policy, not an error: it yields the divisor.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// ASCII symbol used in history records and keyboard input
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Typographic label shown on keypad buttons
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Short name used in element IDs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Parses an operator from either its ASCII symbol or its keypad label
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Stateless arithmetic over `f64`
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Applies `op` to `a` and `b`, rejecting non-finite results
    pub fn calculate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
        let raw = match op {
            Operator::Add => Self::add(a, b),
            Operator::Subtract => Self::subtract(a, b),
            Operator::Multiply => Self::multiply(a, b),
            Operator::Divide => Self::divide(a, b),
        };
        Self::check_finite(raw)
    }

    /// Addition: a + b
    #[must_use]
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtraction: a - b
    #[must_use]
    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiplication: a * b
    #[must_use]
    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    /// Division: a / b, or the divisor itself when it is zero
    #[must_use]
    pub fn divide(a: f64, b: f64) -> f64 {
        if b == 0.0 {
            return b;
        }
        a / b
    }

    fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFinite { value: result })
        }
    }
}
