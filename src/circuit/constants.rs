// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the 2-bit adder search.
//!
//! The target function is fixed: two 2-bit operands `A = A1A0` and `B = B1B0`
//! are added, producing `Sum1`, `Sum0` and `Carry`.

/// Number of primary inputs (A1, A0, B1, B0).
///
/// Signals `0..NINPUTS` are the primary inputs; gate outputs start at `NINPUTS`.
pub const NINPUTS: usize = 4;

/// Number of rows in the full input enumeration (2^NINPUTS).
pub const NROWS: usize = 1 << NINPUTS;

/// Number of target outputs (Sum1, Sum0, Carry).
pub const NOUTPUTS: usize = 3;

/// Mask with one bit set for every row of the enumeration.
pub const FULL_MASK: u16 = u16::MAX;

/// Largest gate budget a search may be configured with.
///
/// Keeps every signal index well inside the preallocated mask table.
pub const MAX_BUDGET: usize = 16;

/// Largest fan-in of an AND/OR/XOR gate.
pub const MAX_FAN_IN: usize = 3;

/// Display names of the primary inputs, indexed by signal.
pub const INPUT_NAMES: [&str; NINPUTS] = ["A1", "A0", "B1", "B0"];

/// Display names of the outputs, indexed by output position.
pub const OUTPUT_NAMES: [&str; NOUTPUTS] = ["Sum1", "Sum0", "Carry"];

// The mask type is u16: one bit per row.
const _: () = assert!(NROWS == u16::BITS as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        assert_eq!(NROWS, 16);
        assert_eq!(FULL_MASK.count_ones() as usize, NROWS);
        assert_eq!(INPUT_NAMES.len(), NINPUTS);
        assert_eq!(OUTPUT_NAMES.len(), NOUTPUTS);
    }
}
