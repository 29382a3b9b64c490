// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit-parallel truth tables for the primary inputs and the target outputs.
//!
//! Rows are numbered by concatenating the input bits `A1 A0 B1 B0` into an
//! integer, so row `r` adds operands `a = r >> 2` and `b = r & 3`.

use crate::circuit::constants::{NINPUTS, NOUTPUTS, NROWS};
use crate::circuit::Mask;

/// Input masks and target masks for the 2-bit adder.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTable {
    inputs: [Mask; NINPUTS],
    targets: [Mask; NOUTPUTS],
}

impl TruthTable {
    /// Build the truth table of `A1A0 + B1B0`.
    pub fn two_bit_adder() -> Self {
        let inputs = std::array::from_fn(|signal| Mask::from_rows(|row| input_values(row)[signal]));
        let targets = std::array::from_fn(|output| {
            Mask::from_rows(|row| {
                let (a, b) = row_operands(row);
                expected_outputs(a, b)[output]
            })
        });
        Self { inputs, targets }
    }

    /// Masks of the primary inputs, indexed by signal.
    pub fn inputs(&self) -> &[Mask; NINPUTS] {
        &self.inputs
    }

    /// Target masks, indexed by output position (Sum1, Sum0, Carry).
    pub fn targets(&self) -> &[Mask; NOUTPUTS] {
        &self.targets
    }

    /// True if `masks` match the targets position for position.
    pub fn matches(&self, masks: [Mask; NOUTPUTS]) -> bool {
        masks == self.targets
    }
}

impl Default for TruthTable {
    fn default() -> Self {
        Self::two_bit_adder()
    }
}

/// Row number for operands `a` and `b` (each in `0..4`).
pub fn row_index(a: u8, b: u8) -> usize {
    debug_assert!(a < 4 && b < 4, "Operands out of range: {} {}", a, b);
    ((a as usize) << 2) | b as usize
}

/// Operands `(a, b)` encoded by `row`.
pub fn row_operands(row: usize) -> (u8, u8) {
    debug_assert!(row < NROWS, "Row out of range: {}", row);
    ((row >> 2) as u8, (row & 3) as u8)
}

/// Primary input values `[A1, A0, B1, B0]` in `row`.
pub fn input_values(row: usize) -> [bool; NINPUTS] {
    std::array::from_fn(|signal| (row >> (NINPUTS - 1 - signal)) & 1 == 1)
}

/// Expected `[Sum1, Sum0, Carry]` for `a + b`, decomposed arithmetically.
pub fn expected_outputs(a: u8, b: u8) -> [bool; NOUTPUTS] {
    let sum = a + b;
    [(sum >> 1) & 1 == 1, sum & 1 == 1, (sum >> 2) & 1 == 1]
}

/// The integer value encoded by `[Sum1, Sum0, Carry]`.
pub fn output_value(outputs: [bool; NOUTPUTS]) -> u8 {
    let [sum1, sum0, carry] = outputs;
    (sum1 as u8) * 2 + sum0 as u8 + (carry as u8) * 4
}
