// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for building circuits.

use crate::circuit::{GateKind, SignalId};
use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Why a candidate gate was not added to the circuit.
///
/// During search these are ordinary pruned branches and are only counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
#[repr(u8)]
pub enum Rejection {
    /// The circuit already contains this exact gate.
    RepeatedGate,

    /// The gate's output is the same in every row.
    ConstantMask,

    /// The gate's output equals an existing signal's output.
    DuplicateMask,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::RepeatedGate => write!(f, "gate already present in circuit"),
            Rejection::ConstantMask => write!(f, "gate output is constant"),
            Rejection::DuplicateMask => write!(f, "gate output duplicates an existing signal"),
        }
    }
}

/// Errors that can occur when constructing gates or extending a circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// Wrong number of inputs for the gate kind.
    InvalidArity { kind: GateKind, arity: usize },

    /// A commutative gate names the same input twice.
    RepeatedInput { kind: GateKind, signal: SignalId },

    /// A gate reads a signal that does not exist yet.
    UndefinedSignal { signal: SignalId, available: usize },

    /// The circuit already holds as many gates as its budget allows.
    BudgetExhausted { budget: usize },

    /// The gate was pruned by the search rules.
    Rejected(Rejection),
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::InvalidArity { kind, arity } => {
                write!(f, "{} gate cannot take {} inputs", kind, arity)
            }
            CircuitError::RepeatedInput { kind, signal } => {
                write!(f, "{} gate names input {} more than once", kind, signal)
            }
            CircuitError::UndefinedSignal { signal, available } => {
                write!(
                    f,
                    "Signal {} is not defined (only {} signals available)",
                    signal, available
                )
            }
            CircuitError::BudgetExhausted { budget } => {
                write!(f, "Circuit already has its full budget of {} gates", budget)
            }
            CircuitError::Rejected(rejection) => write!(f, "Gate rejected: {}", rejection),
        }
    }
}

impl std::error::Error for CircuitError {}

impl From<Rejection> for CircuitError {
    fn from(rejection: Rejection) -> Self {
        CircuitError::Rejected(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CircuitError::UndefinedSignal {
            signal: SignalId::new(9),
            available: 6,
        };
        assert_eq!(
            err.to_string(),
            "Signal S9 is not defined (only 6 signals available)"
        );
        assert_eq!(
            CircuitError::from(Rejection::ConstantMask).to_string(),
            "Gate rejected: gate output is constant"
        );
        assert_eq!(
            CircuitError::InvalidArity {
                kind: GateKind::Not,
                arity: 2
            }
            .to_string(),
            "NOT gate cannot take 2 inputs"
        );
    }

    #[test]
    fn test_display_names_inputs() {
        let err = CircuitError::RepeatedInput {
            kind: GateKind::Xor,
            signal: SignalId::new(1),
        };
        assert_eq!(err.to_string(), "XOR gate names input A0 more than once");
    }
}
