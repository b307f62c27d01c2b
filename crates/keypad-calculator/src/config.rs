//! Calculator configuration

use serde::{Deserialize, Serialize};

use crate::core::format::DEFAULT_PRECISION;
use crate::core::{CalcError, CalcResult, History};

/// Largest precision accepted by [`CalculatorConfig::validate`]
pub const MAX_PRECISION: usize = 15;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of history entries kept
    pub history_capacity: usize,
    /// Decimal places used when formatting history and the operation line
    pub precision: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: History::DEFAULT_CAPACITY,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set formatting precision
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Parses and validates a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values are usable
    pub fn validate(&self) -> CalcResult<()> {
        if self.history_capacity == 0 {
            return Err(CalcError::InvalidConfig {
                message: "history_capacity must be at least 1".to_string(),
            });
        }
        if self.precision > MAX_PRECISION {
            return Err(CalcError::InvalidConfig {
                message: format!("precision must be at most {MAX_PRECISION}"),
            });
        }
        Ok(())
    }
}
