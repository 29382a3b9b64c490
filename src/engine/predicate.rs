// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the backtracking search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space: it can succeed, fail, offer
//! a number of alternatives, or suspend the whole search.

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (one round per gate)
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Stop the search with all state preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute once per level of the search tree.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    /// Used when enough circuits have been found.
    Suspend,
}

/// A terminal predicate that ends a predicate sequence.
///
/// Terminal predicates never return Success. `EngineBuilder` only builds an
/// engine once a terminal predicate has been supplied.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for each choice in turn
/// 5. Repeat until Success (advance) or Failure (backtrack)
///
/// # Trail Integration
///
/// Predicates can modify `SearchContext` state through trailed setters. The
/// engine rewinds the trail before each `retry_pred` and whenever it
/// backtracks past a predicate, so every choice starts from the same state.
///
/// # Example
///
/// ```
/// use adder_search::engine::{Predicate, PredicateResult};
/// use adder_search::context::SearchContext;
///
/// #[derive(Debug)]
/// struct FirstNots(usize);
///
/// impl Predicate for FirstNots {
///     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
///         PredicateResult::Choices(self.0)
///     }
///
///     fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
///         // The first catalog entries are NOT gates.
///         let gate = ctx.candidate(choice);
///         match ctx.try_extend(gate) {
///             Ok(_) => PredicateResult::Success,
///             Err(_) => PredicateResult::Failure,
///         }
///     }
///
///     fn name(&self) -> &str {
///         "FirstNots"
///     }
/// }
/// ```
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// The trail has already been rewound to the state before this choice.
    ///
    /// Note: retry_pred cannot return Choices or Suspend.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging and debugging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
