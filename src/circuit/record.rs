// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circuit records: the immutable result of one successful search path.

use crate::circuit::constants::{NINPUTS, NOUTPUTS};
use crate::circuit::errors::CircuitError;
use crate::circuit::{Gate, SignalId};

/// A discovered circuit: gates in creation order plus the chosen outputs.
///
/// Gate `i` drives signal `NINPUTS + i`. Output position 0 is Sum1, 1 is Sum0
/// and 2 is Carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CircuitRecord {
    gates: Vec<Gate>,
    outputs: [SignalId; NOUTPUTS],
}

impl CircuitRecord {
    /// Build a record, checking that every gate only reads earlier signals and
    /// every output names an existing signal.
    pub fn new(gates: Vec<Gate>, outputs: [SignalId; NOUTPUTS]) -> Result<Self, CircuitError> {
        for (index, gate) in gates.iter().enumerate() {
            let available = NINPUTS + index;
            if gate.max_input().as_usize() >= available {
                return Err(CircuitError::UndefinedSignal {
                    signal: gate.max_input(),
                    available,
                });
            }
        }
        let available = NINPUTS + gates.len();
        if let Some(&signal) = outputs.iter().find(|s| s.as_usize() >= available) {
            return Err(CircuitError::UndefinedSignal { signal, available });
        }
        Ok(Self { gates, outputs })
    }

    /// Build a record from search state that is valid by construction.
    pub(crate) fn from_parts(gates: &[Gate], outputs: [SignalId; NOUTPUTS]) -> Self {
        debug_assert!(outputs
            .iter()
            .all(|s| s.as_usize() < NINPUTS + gates.len()));
        Self {
            gates: gates.to_vec(),
            outputs,
        }
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn outputs(&self) -> &[SignalId; NOUTPUTS] {
        &self.outputs
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Total number of signals, primary inputs included.
    pub fn signal_count(&self) -> usize {
        NINPUTS + self.gates.len()
    }

    /// Signal driven by gate `index`.
    pub fn output_signal(index: usize) -> SignalId {
        SignalId::new((NINPUTS + index) as u8)
    }

    /// Evaluate the circuit on one input row, gate by gate.
    ///
    /// This is the plain serial simulation used to check records independently
    /// of the bit-parallel masks the search worked with.
    pub fn simulate(&self, inputs: [bool; NINPUTS]) -> [bool; NOUTPUTS] {
        let mut values = Vec::with_capacity(self.signal_count());
        values.extend_from_slice(&inputs);
        for gate in &self.gates {
            let value = gate.evaluate_row(&values);
            values.push(value);
        }
        self.outputs.map(|s| values[s.as_usize()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::GateKind;

    fn s(i: u8) -> SignalId {
        SignalId::new(i)
    }

    /// Half adder on the low bits, duplicated into all three outputs.
    fn half_adder() -> CircuitRecord {
        let gates = vec![
            Gate::new(GateKind::And, &[s(1), s(3)]).unwrap(),
            Gate::new(GateKind::Xor, &[s(1), s(3)]).unwrap(),
        ];
        CircuitRecord::new(gates, [s(4), s(5), s(5)]).unwrap()
    }

    #[test]
    fn test_simulate() {
        let record = half_adder();
        assert_eq!(record.signal_count(), 6);
        assert_eq!(record.simulate([false, true, false, true]), [true, false, false]);
        assert_eq!(record.simulate([true, true, false, false]), [false, true, true]);
        assert_eq!(record.simulate([false, false, true, false]), [false, false, false]);
    }

    #[test]
    fn test_rejects_forward_reference() {
        let gates = vec![Gate::not(s(4))];
        assert_eq!(
            CircuitRecord::new(gates, [s(4), s(4), s(4)]),
            Err(CircuitError::UndefinedSignal {
                signal: s(4),
                available: 4
            })
        );
    }

    #[test]
    fn test_rejects_missing_output() {
        let gates = vec![Gate::not(s(0))];
        assert_eq!(
            CircuitRecord::new(gates, [s(4), s(4), s(5)]),
            Err(CircuitError::UndefinedSignal {
                signal: s(5),
                available: 5
            })
        );
    }

    #[test]
    fn test_output_signal() {
        assert_eq!(CircuitRecord::output_signal(0), s(4));
        assert_eq!(half_adder().gates()[1].kind(), GateKind::Xor);
    }
}
