// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the trail-based backtracking system.
//!
//! These tests verify that the trail works correctly when integrated with
//! SearchContext, demonstrating the backtracking behavior that the search
//! engine depends on.

mod common;

use adder_search::SearchContext;
use adder_search::context::MemoizedData;
use common::ripple_adder_gates;

#[test]
fn test_search_context_backtracking() {
    let gates = ripple_adder_gates();
    let mut ctx = SearchContext::new(MemoizedData::new(), 7, 1);

    let cp1 = ctx.trail.len();
    assert_eq!(cp1, 0);
    ctx.push_gate(gates[0]).unwrap();
    ctx.push_gate(gates[1]).unwrap();
    ctx.push_gate(gates[2]).unwrap();
    assert_eq!(ctx.depth(), 3);
    assert_eq!(ctx.trail.len(), 3);

    // Nested checkpoint
    let cp2 = ctx.trail.len();
    ctx.push_gate(gates[3]).unwrap();
    assert_eq!(ctx.signal_count(), 8);

    ctx.rewind_to(cp2);
    assert_eq!(ctx.depth(), 3);
    assert_eq!(ctx.state.circuit.gates(), &gates[..3]);

    ctx.rewind_to(cp1);
    assert_eq!(ctx.depth(), 0);
    assert_eq!(ctx.trail.len(), 0);
}

#[test]
fn test_rewound_slots_are_reused() {
    let gates = ripple_adder_gates();
    let mut ctx = SearchContext::new(MemoizedData::new(), 7, 1);
    ctx.push_gate(gates[0]).unwrap();
    let checkpoint = ctx.trail.len();
    ctx.push_gate(gates[1]).unwrap();
    ctx.rewind_to(checkpoint);

    // The freed slot holds the new gate's mask, not the old one.
    let mask = ctx.push_gate(gates[2]).unwrap();
    assert_eq!(ctx.mask(adder_search::SignalId::new(5)), mask);
    assert_eq!(ctx.state.circuit.gates(), &[gates[0], gates[2]]);
}

#[test]
fn test_independent_search_contexts() {
    let gates = ripple_adder_gates();
    let mut ctx1 = SearchContext::new(MemoizedData::new(), 7, 1);
    let mut ctx2 = SearchContext::new(MemoizedData::new(), 7, 1);

    ctx1.push_gate(gates[0]).unwrap();
    assert_eq!(ctx1.depth(), 1);
    assert_eq!(ctx2.depth(), 0);

    ctx2.push_gate(gates[2]).unwrap();
    ctx1.rewind_to(0);
    assert_eq!(ctx1.depth(), 0);
    assert_eq!(ctx2.depth(), 1);
    assert_eq!(ctx2.trail.len(), 1);
}
