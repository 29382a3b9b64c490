// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gates and their evaluation.
//!
//! A `Gate` is a small `Copy` value: a kind plus up to three input signals.
//! Commutative gates store their inputs sorted and distinct, so two gates
//! built from the same input set compare (and hash) equal whatever order the
//! inputs were given in.
//!
//! # Examples
//!
//! ```
//! use adder_search::circuit::{Gate, GateKind, Mask, SignalId};
//!
//! let s = |i| SignalId::new(i);
//! let g = Gate::new(GateKind::Xor, &[s(3), s(1)]).unwrap();
//! assert_eq!(g, Gate::new(GateKind::Xor, &[s(1), s(3)]).unwrap());
//! assert_eq!(g.to_string(), "XOR(A0,B0)");
//!
//! let masks = [0xff00, 0xf0f0, 0xcccc, 0xaaaa].map(Mask::from_bits);
//! assert_eq!(g.evaluate(&masks).bits(), 0x5a5a);
//! ```

use crate::circuit::constants::MAX_FAN_IN;
use crate::circuit::errors::CircuitError;
use crate::circuit::{Mask, SignalId};
use std::fmt;
use strum_macros::{Display as DisplayMacro, EnumCount as EnumCountMacro, EnumIter};

/// The gate vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCountMacro, EnumIter, DisplayMacro,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum GateKind {
    Not,
    And,
    Or,
    Xor,
}

impl GateKind {
    /// True for AND, OR and XOR, whose inputs are stored as a set.
    pub fn is_commutative(self) -> bool {
        !matches!(self, GateKind::Not)
    }

    /// Whether a gate of this kind may take `arity` inputs.
    pub fn accepts_arity(self, arity: usize) -> bool {
        match self {
            GateKind::Not => arity == 1,
            _ => (2..=MAX_FAN_IN).contains(&arity),
        }
    }
}

/// A gate in canonical form.
///
/// Unused input slots are always `SignalId(0)`, so the derived equality and
/// hash only ever see the canonical representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gate {
    kind: GateKind,
    arity: u8,
    inputs: [SignalId; MAX_FAN_IN],
}

impl Gate {
    /// A NOT gate.
    pub fn not(input: SignalId) -> Self {
        Self::canonical(GateKind::Not, &[input])
    }

    /// Build a gate, normalizing commutative inputs into canonical order.
    ///
    /// Fails if the number of inputs does not suit the kind, or if a
    /// commutative gate names the same signal twice.
    pub fn new(kind: GateKind, inputs: &[SignalId]) -> Result<Self, CircuitError> {
        if !kind.accepts_arity(inputs.len()) {
            return Err(CircuitError::InvalidArity {
                kind,
                arity: inputs.len(),
            });
        }
        let mut sorted = [SignalId::default(); MAX_FAN_IN];
        sorted[..inputs.len()].copy_from_slice(inputs);
        let sorted = &mut sorted[..inputs.len()];
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(CircuitError::RepeatedInput {
                kind,
                signal: pair[0],
            });
        }
        Ok(Self::canonical(kind, sorted))
    }

    /// Build a gate from inputs that are already sorted and distinct.
    pub(crate) fn canonical(kind: GateKind, inputs: &[SignalId]) -> Self {
        debug_assert!(kind.accepts_arity(inputs.len()));
        debug_assert!(inputs.windows(2).all(|pair| pair[0] < pair[1]));
        let mut slots = [SignalId::default(); MAX_FAN_IN];
        slots[..inputs.len()].copy_from_slice(inputs);
        Self {
            kind,
            arity: inputs.len() as u8,
            inputs: slots,
        }
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn arity(&self) -> usize {
        self.arity as usize
    }

    /// Input signals, ascending for commutative gates.
    pub fn inputs(&self) -> &[SignalId] {
        &self.inputs[..self.arity()]
    }

    /// The highest-numbered signal this gate reads.
    pub fn max_input(&self) -> SignalId {
        self.inputs().iter().copied().max().unwrap_or_default()
    }

    /// Evaluate the gate on every row at once.
    ///
    /// `masks` is the signal mask table; every input must index into it.
    pub fn evaluate(&self, masks: &[Mask]) -> Mask {
        let mut operands = self.inputs().iter().map(|s| masks[s.as_usize()]);
        let first = operands.next().unwrap_or_default();
        match self.kind {
            GateKind::Not => !first,
            GateKind::And => operands.fold(first, |acc, m| acc & m),
            GateKind::Or => operands.fold(first, |acc, m| acc | m),
            GateKind::Xor => operands.fold(first, |acc, m| acc ^ m),
        }
    }

    /// Evaluate the gate for a single row, one signal value at a time.
    ///
    /// `values` holds every signal's value in that row.
    pub fn evaluate_row(&self, values: &[bool]) -> bool {
        let mut operands = self.inputs().iter().map(|s| values[s.as_usize()]);
        match self.kind {
            GateKind::Not => !operands.next().unwrap_or_default(),
            GateKind::And => operands.fold(true, |acc, v| acc && v),
            GateKind::Or => operands.fold(false, |acc, v| acc || v),
            GateKind::Xor => operands.fold(false, |acc, v| acc != v),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.inputs().iter().map(|s| s.name()).collect();
        write!(f, "{}({})", self.kind, names.join(","))
    }
}
