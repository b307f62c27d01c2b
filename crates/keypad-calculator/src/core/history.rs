//! Bounded calculation history, newest first

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::format::{format_number_with, DEFAULT_PRECISION};
use crate::core::{CalcResult, Operator};

/// One completed binary calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left operand
    pub lhs: f64,
    /// Operator applied
    pub op: Operator,
    /// Right operand
    pub rhs: f64,
    /// Result of the calculation
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(lhs: f64, op: Operator, rhs: f64, result: f64) -> Self {
        Self {
            lhs,
            op,
            rhs,
            result,
        }
    }

    /// Returns the record as `"A op B = result"`
    #[must_use]
    pub fn display(&self) -> String {
        self.display_with(DEFAULT_PRECISION)
    }

    /// Returns the record with numbers rounded to `precision` places
    #[must_use]
    pub fn display_with(&self, precision: usize) -> String {
        format!(
            "{} {} {} = {}",
            format_number_with(self.lhs, precision),
            self.op.symbol(),
            format_number_with(self.rhs, precision),
            format_number_with(self.result, precision)
        )
    }
}

/// Calculation history with a fixed capacity
///
/// New entries go to the front; once full, the oldest entry falls off the
/// back.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates an empty history with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty history holding at most `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Pushes an entry to the front, evicting the oldest past capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entry at `index` (0 = newest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Formatted records, newest first
    #[must_use]
    pub fn records(&self, precision: usize) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.display_with(precision))
            .collect()
    }

    /// Serializes the entries (newest first) to JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}
