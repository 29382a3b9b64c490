// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use adder_search::context::{MemoizedData, SearchContext};
use adder_search::memo::TruthTable;
use adder_search::{CircuitRecord, Gate, GateKind, Mask, SignalId};

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn gate(kind: GateKind, inputs: &[u8]) -> Gate {
    let inputs: Vec<SignalId> = inputs.iter().map(|&i| SignalId::new(i)).collect();
    Gate::new(kind, &inputs).unwrap()
}

/// A 7-gate ripple adder with outputs S5, S6, S10.
pub fn ripple_adder_gates() -> Vec<Gate> {
    vec![
        gate(GateKind::And, &[1, 3]),    // S4: low carry
        gate(GateKind::Xor, &[0, 2, 4]), // S5: Sum1
        gate(GateKind::Xor, &[1, 3]),    // S6: Sum0
        gate(GateKind::Or, &[0, 2]),     // S7
        gate(GateKind::And, &[0, 2]),    // S8
        gate(GateKind::Or, &[4, 8]),     // S9
        gate(GateKind::And, &[7, 9]),    // S10: Carry
    ]
}

pub fn ripple_adder_outputs() -> [SignalId; 3] {
    [SignalId::new(5), SignalId::new(6), SignalId::new(10)]
}

/// A fresh context with `prefix` already pushed.
pub fn seeded_context(prefix: &[Gate], budget: usize, target_count: usize) -> SearchContext {
    let mut ctx = SearchContext::new(MemoizedData::new(), budget, target_count);
    for &gate in prefix {
        ctx.push_gate(gate).unwrap();
    }
    ctx
}

/// Bit-parallel masks of every signal in `record`, inputs first.
pub fn record_masks(record: &CircuitRecord) -> Vec<Mask> {
    let mut masks = TruthTable::two_bit_adder().inputs().to_vec();
    for gate in record.gates() {
        let mask = gate.evaluate(&masks);
        masks.push(mask);
    }
    masks
}
