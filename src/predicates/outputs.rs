// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! OutputPredicate - binds computed signals to the adder outputs.

use crate::circuit::constants::NINPUTS;
use crate::circuit::SignalId;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use crate::state::Counters;

/// Terminal predicate run once the circuit holds `budget` gates.
///
/// Tries every strictly increasing triple `i < j < k` of computed signals
/// and binds them to Sum1, Sum0 and Carry in that order. Every matching
/// triple is recorded. Returns Suspend as soon as the cutoff is reached,
/// otherwise Failure so the engine backtracks into the gate choices.
///
/// Only ascending triples are tried: a circuit whose Sum1 signal is computed
/// after its Sum0 or Carry signal is not reported, even if it is correct.
#[derive(Debug, Default)]
pub struct OutputPredicate;

impl Predicate for OutputPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let signals = ctx.signal_count();
        for i in NINPUTS..signals {
            for j in i + 1..signals {
                for k in j + 1..signals {
                    ctx.statistics.increment(Counters::OutputSelections);
                    let outputs = [i, j, k].map(|s| SignalId::new(s as u8));
                    if ctx.outputs_match(outputs) && ctx.record_solution(outputs) {
                        return PredicateResult::Suspend;
                    }
                }
            }
        }
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Output"
    }
}

impl TerminalPredicate for OutputPredicate {}
