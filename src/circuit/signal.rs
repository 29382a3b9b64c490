// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Signal identifiers.
//!
//! Signals form an append-only sequence: indices `0..NINPUTS` are the primary
//! inputs, and every gate output gets the next free index in creation order.

use crate::circuit::constants::{INPUT_NAMES, NINPUTS};
use std::fmt;

/// Index of a signal in the append-only signal sequence.
///
/// This is a newtype wrapper to keep signal indices apart from gate counts,
/// budgets and row numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SignalId(u8);

impl SignalId {
    /// Create a signal id.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the signal as a usize (for mask table indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// True for the four primary inputs.
    pub fn is_input(self) -> bool {
        self.as_usize() < NINPUTS
    }

    /// Human readable name: `A1`, `A0`, `B1`, `B0` for inputs, `S<n>` otherwise.
    pub fn name(self) -> String {
        if self.is_input() {
            INPUT_NAMES[self.as_usize()].to_string()
        } else {
            format!("S{}", self.0)
        }
    }
}

impl From<u8> for SignalId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_names() {
        let names: Vec<String> = (0..4).map(|i| SignalId::new(i).name()).collect();
        assert_eq!(names, vec!["A1", "A0", "B1", "B0"]);
    }

    #[test]
    fn test_computed_signal_names() {
        assert!(!SignalId::new(4).is_input());
        assert_eq!(SignalId::new(4).name(), "S4");
        assert_eq!(SignalId::new(12).to_string(), "S12");
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(SignalId::new(0).to_string(), "A1");
        assert_eq!(SignalId::new(3).to_string(), "B0");
    }

    #[test]
    fn test_ordering() {
        assert!(SignalId::new(2) < SignalId::new(7));
        assert_eq!(SignalId::from(9).as_usize(), 9);
    }
}
