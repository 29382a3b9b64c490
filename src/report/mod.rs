// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human-readable reports for discovered circuits.
//!
//! The listing prints each gate with primary inputs by name:
//!
//! ```text
//! Circuit 1 (7 gates):
//! Inputs: A1(0), A0(1), B1(2), B0(3)
//!   S4 = AND(A0,B0)
//!   ...
//! Outputs:
//!   Sum1 = S5
//!   Sum0 = S6
//!   Carry = S10
//! ```
//!
//! The verification table re-simulates a record row by row, independently of
//! the bit-parallel masks the search used.

use crate::circuit::constants::{INPUT_NAMES, NOUTPUTS, OUTPUT_NAMES};
use crate::circuit::CircuitRecord;
use crate::memo::truth_table::{input_values, output_value, row_index};
use std::fmt;

/// Numbered listing of one circuit.
#[derive(Debug, Clone, Copy)]
pub struct CircuitListing<'a> {
    number: usize,
    record: &'a CircuitRecord,
}

impl<'a> CircuitListing<'a> {
    /// `number` is 1-based, in discovery order.
    pub fn new(number: usize, record: &'a CircuitRecord) -> Self {
        Self { number, record }
    }
}

impl fmt::Display for CircuitListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit {} ({} gates):",
            self.number,
            self.record.gate_count()
        )?;
        let legend: Vec<String> = INPUT_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}({})", name, i))
            .collect();
        writeln!(f, "Inputs: {}", legend.join(", "))?;
        for (i, gate) in self.record.gates().iter().enumerate() {
            writeln!(f, "  {} = {}", CircuitRecord::output_signal(i), gate)?;
        }
        writeln!(f, "Outputs:")?;
        for (name, signal) in OUTPUT_NAMES.iter().zip(self.record.outputs()) {
            writeln!(f, "  {} = {}", name, signal)?;
        }
        Ok(())
    }
}

/// One `(a, b)` pair of the verification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationRow {
    pub a: u8,
    pub b: u8,
    /// Simulated Sum1, Sum0, Carry.
    pub outputs: [bool; NOUTPUTS],
}

impl VerificationRow {
    /// Value the circuit computed: `sum1*2 + sum0 + carry*4`.
    pub fn actual(&self) -> u8 {
        output_value(self.outputs)
    }

    pub fn expected(&self) -> u8 {
        self.a + self.b
    }

    pub fn is_correct(&self) -> bool {
        self.actual() == self.expected()
    }
}

impl fmt::Display for VerificationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |v: bool| u8::from(v);
        let [sum1, sum0, carry] = self.outputs;
        write!(
            f,
            "  {}{} + {}{} = {}{} (C={}) | {}+{}={} {}",
            self.a >> 1,
            self.a & 1,
            self.b >> 1,
            self.b & 1,
            bit(sum1),
            bit(sum0),
            bit(carry),
            self.a,
            self.b,
            self.expected(),
            if self.is_correct() { "✓" } else { "✗" }
        )
    }
}

/// Serial re-simulation of a circuit over every pair of 2-bit operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    rows: Vec<VerificationRow>,
}

impl Verification {
    pub fn new(record: &CircuitRecord) -> Self {
        let mut rows = Vec::with_capacity(16);
        for a in 0..4u8 {
            for b in 0..4u8 {
                let outputs = record.simulate(input_values(row_index(a, b)));
                rows.push(VerificationRow { a, b, outputs });
            }
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[VerificationRow] {
        &self.rows
    }

    /// Number of pairs the circuit gets wrong.
    pub fn mismatches(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_correct()).count()
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Verification:")?;
        writeln!(f, "A1A0 + B1B0 = Sum1Sum0 Carry")?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
