// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! GatePredicate - adds one gate per round.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// GatePredicate grows the circuit one gate at a time.
///
/// Runs for one round per gate until the budget is full, then hands over to
/// the output selection.
///
/// # Algorithm
///
/// 1. **try_pred(round)**:
///    - If the cutoff has been reached → Failure (unwind quickly)
///    - If the circuit holds `budget` gates → Success
///    - Otherwise → Choices(catalog size for the current signal count)
///
/// 2. **retry_pred(round, choice)**:
///    - Take catalog candidate `choice`
///    - Apply the pruning rules; a surviving gate is appended
///    - Return SuccessSamePredicate, or Failure if pruned
#[derive(Debug, Default)]
pub struct GatePredicate;

impl Predicate for GatePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.cutoff_reached() {
            return PredicateResult::Failure;
        }
        if ctx.state.circuit.is_complete() {
            return PredicateResult::Success;
        }
        PredicateResult::Choices(ctx.candidate_count())
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let gate = ctx.candidate(choice);
        match ctx.try_extend(gate) {
            Ok(_) => PredicateResult::SuccessSamePredicate,
            Err(_) => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Gate"
    }
}
