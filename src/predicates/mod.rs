// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the circuit search.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `gates`: GatePredicate, one catalog choice per gate
//! - `outputs`: OutputPredicate, binds signals to Sum1, Sum0 and Carry
//! - Built-in predicates: `FailPredicate`

pub mod gates;
pub mod outputs;

pub use gates::GatePredicate;
pub use outputs::OutputPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a sequence with
/// it enumerates every gate sequence within the budget without ever
/// selecting outputs.
///
/// # Example
///
/// ```
/// use adder_search::context::{MemoizedData, SearchContext};
/// use adder_search::engine::EngineBuilder;
/// use adder_search::predicates::{FailPredicate, GatePredicate};
///
/// let mut ctx = SearchContext::new(MemoizedData::new(), 1, 1);
/// let engine = EngineBuilder::new()
///     .add(Box::new(GatePredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none());
/// // Every single-gate candidate was evaluated.
/// assert_eq!(ctx.statistics.evaluations(), 34);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}
