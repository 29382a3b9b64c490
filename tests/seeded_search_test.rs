// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end searches for the 2-bit adder, completing known circuit prefixes.
//!
//! A full search at 6 or more gates takes far too long for a test, so these
//! seed the context with part of a known 7-gate adder and let the engine
//! search the remaining gates.

mod common;

use adder_search::circuit::GateKind;
use adder_search::report::Verification;
use adder_search::search::run_budget;
use adder_search::state::Counters;
use adder_search::{CircuitRecord, SignalId};
use common::{gate, init_logging, record_masks, ripple_adder_gates, ripple_adder_outputs, seeded_context};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn five_gate_search() -> (Vec<CircuitRecord>, Option<u64>, u64) {
    let mut ctx = seeded_context(&ripple_adder_gates()[..5], 7, 3);
    assert!(run_budget(&mut ctx));
    let cutoff = ctx.cutoff_evaluations();
    let evaluations = ctx.statistics.evaluations();
    (ctx.into_solutions(), cutoff, evaluations)
}

#[test]
fn test_complete_circuit_is_found_without_search() {
    init_logging();
    let mut ctx = seeded_context(&ripple_adder_gates(), 7, 1);
    assert_eq!(ctx.statistics.evaluations(), 7);

    assert!(run_budget(&mut ctx));
    assert_eq!(ctx.statistics.evaluations(), 7);
    assert_eq!(ctx.solutions().len(), 1);
    assert_eq!(ctx.solutions()[0].gates(), ripple_adder_gates().as_slice());
    assert_eq!(ctx.solutions()[0].outputs(), &ripple_adder_outputs());
}

#[test]
fn test_search_completes_five_gate_prefix() {
    init_logging();
    let (circuits, _, _) = five_gate_search();
    assert_eq!(circuits.len(), 3);

    let completions: Vec<_> = circuits.iter().map(|c| (c.gates()[5], c.gates()[6])).collect();
    assert_eq!(
        completions,
        vec![
            (gate(GateKind::And, &[1, 3, 5]), gate(GateKind::Xor, &[4, 8, 9])),
            (gate(GateKind::And, &[1, 3, 5]), gate(GateKind::Xor, &[5, 7, 9])),
            (gate(GateKind::And, &[1, 3, 7]), gate(GateKind::Or, &[8, 9])),
        ]
    );
    for record in &circuits {
        assert_eq!(&record.gates()[..5], &ripple_adder_gates()[..5]);
        assert_eq!(record.outputs(), &ripple_adder_outputs());
    }
}

#[test]
fn test_cutoff_rewinds_to_prefix() {
    let mut ctx = seeded_context(&ripple_adder_gates()[..5], 7, 3);
    let prefix = ctx.trail.len();
    assert!(run_budget(&mut ctx));
    assert_eq!(ctx.depth(), 5);
    assert_eq!(ctx.trail.len(), prefix);
    assert_eq!(ctx.state.circuit.gates(), &ripple_adder_gates()[..5]);
}

#[test]
fn test_found_circuits_verify() {
    let (circuits, _, _) = five_gate_search();
    for record in &circuits {
        let verification = Verification::new(record);
        assert_eq!(verification.mismatches(), 0, "{}", verification);
    }
}

#[test]
fn test_found_circuits_respect_pruning() {
    let (circuits, _, _) = five_gate_search();
    for record in &circuits {
        let gates: HashSet<_> = record.gates().iter().collect();
        assert_eq!(gates.len(), record.gate_count(), "repeated gate");

        let masks = record_masks(record);
        for (i, mask) in masks.iter().enumerate().skip(4) {
            assert!(!mask.is_constant(), "S{} is constant", i);
            assert!(!masks[..i].contains(mask), "S{} duplicates a signal", i);
        }

        let [sum1, sum0, carry] = *record.outputs();
        assert!(!sum1.is_input());
        assert!(sum1 < sum0 && sum0 < carry);
        assert!(carry.as_usize() < record.signal_count());
    }
}

#[test]
fn test_no_evaluations_after_cutoff() {
    let (_, cutoff, evaluations) = five_gate_search();
    // 5 seeded gates, then 63518 evaluations up to the third circuit.
    assert_eq!(evaluations, 63_523);
    assert_eq!(cutoff, Some(evaluations));
}

#[test]
fn test_search_is_deterministic() {
    let (first, _, first_evaluations) = five_gate_search();
    let (second, _, second_evaluations) = five_gate_search();
    assert_eq!(first, second);
    assert_eq!(first_evaluations, second_evaluations);
}

#[test]
fn test_six_gates_cannot_complete_prefix() {
    let mut ctx = seeded_context(&ripple_adder_gates()[..5], 6, 3);
    assert!(!run_budget(&mut ctx));
    assert!(ctx.solutions().is_empty());
    assert_eq!(ctx.cutoff_evaluations(), None);
    assert_eq!(ctx.statistics.evaluations(), 5 + 364);
    // The engine backtracks back to the seeded prefix, never past it.
    assert_eq!(ctx.depth(), 5);
    assert!(ctx.statistics.get(Counters::OutputSelections) > 0);
}

/// Outputs are only tried in ascending signal order, so a correct circuit
/// that computes Sum0 before Sum1 is not reported.
#[test]
fn test_descending_outputs_are_not_found() {
    let gates = vec![
        gate(GateKind::Xor, &[1, 3]),    // S4: Sum0
        gate(GateKind::And, &[1, 3]),    // S5
        gate(GateKind::Xor, &[0, 2, 5]), // S6: Sum1
        gate(GateKind::Or, &[0, 2]),
        gate(GateKind::And, &[0, 2]),
        gate(GateKind::Or, &[5, 8]),
        gate(GateKind::And, &[7, 9]), // S10: Carry
    ];
    let outputs = [SignalId::new(6), SignalId::new(4), SignalId::new(10)];
    let record = CircuitRecord::new(gates.clone(), outputs).unwrap();
    assert_eq!(Verification::new(&record).mismatches(), 0);

    let mut ctx = seeded_context(&gates, 7, 1);
    assert!(!run_budget(&mut ctx));
    assert!(ctx.solutions().is_empty());
}
