// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the object threaded through every predicate call:
//! - Tier 1 (MEMO): the truth table, fixed for the whole run
//! - Tier 2 (DYNAMIC): the circuit under construction, restored via the trail
//! - The gate catalog, memoized per available-signal count
//! - The discovered circuits and the cutoff that stops the search
//!
//! One context serves one budget attempt.

mod dynamic;
mod memoized;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;

use crate::circuit::constants::NOUTPUTS;
use crate::circuit::{CircuitError, CircuitRecord, Gate, Mask, Rejection, SignalId};
use crate::memo::GateCatalog;
use crate::state::{Counters, Statistics};
use crate::trail::{Trail, TrailedRegistry};

/// Gate evaluations between progress log lines.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Search context for one budget attempt.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,      // Tier 1: immutable, copied per attempt
///     trail: Trail,            // Tier 2: undo log
///     state: DynamicState,     // Tier 2: gate sequence + mask table
///     catalog: GateCatalog,    // lazily filled, never rewound
///     statistics, solutions    // accumulate across the whole attempt
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable precomputed data (Tier 1)
    pub memo: MemoizedData,
    /// Trail for O(1) backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Candidate gates per available-signal count
    pub catalog: GateCatalog,
    /// Progress counters
    pub statistics: Statistics,
    solutions: Vec<CircuitRecord>,
    target_count: usize,
    cutoff_evaluations: Option<u64>,
}

impl SearchContext {
    /// Create a context for a search with `budget` gates that stops after
    /// `target_count` circuits.
    pub fn new(memo: MemoizedData, budget: usize, target_count: usize) -> Self {
        let mut registry = TrailedRegistry::new();
        let state = DynamicState::new(&memo, &mut registry, budget);
        Self {
            memo,
            trail: Trail::new(),
            state,
            catalog: GateCatalog::new(),
            statistics: Statistics::new(),
            solutions: Vec::new(),
            target_count,
            cutoff_evaluations: None,
        }
    }

    pub fn budget(&self) -> usize {
        self.state.circuit.budget()
    }

    /// Number of gates in the circuit under construction.
    pub fn depth(&self) -> usize {
        self.state.circuit.depth()
    }

    /// Number of live signals, primary inputs included.
    pub fn signal_count(&self) -> usize {
        self.state.circuit.signal_count()
    }

    /// True once `target_count` circuits have been found.
    ///
    /// This is the search's only cancellation signal.
    pub fn cutoff_reached(&self) -> bool {
        self.solutions.len() >= self.target_count
    }

    /// Gate evaluations performed when the cutoff fired, if it has.
    pub fn cutoff_evaluations(&self) -> Option<u64> {
        self.cutoff_evaluations
    }

    /// Circuits found so far, in discovery order.
    pub fn solutions(&self) -> &[CircuitRecord] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<CircuitRecord> {
        self.solutions
    }

    /// Number of catalog candidates at the current depth.
    pub fn candidate_count(&mut self) -> usize {
        let available = self.signal_count();
        self.catalog.candidates(available).len()
    }

    /// Catalog candidate `choice` at the current depth.
    pub fn candidate(&mut self, choice: usize) -> Gate {
        let available = self.signal_count();
        self.catalog.candidate(available, choice)
    }

    /// Apply the pruning rules to `gate` and append it if it survives.
    ///
    /// A gate is rejected if the circuit already contains it, if its mask is
    /// constant, or if its mask equals the mask of any live signal. The gate
    /// must only read live signals. A full circuit is never extended.
    pub fn try_extend(&mut self, gate: Gate) -> Result<Mask, CircuitError> {
        let circuit = &self.state.circuit;
        if circuit.is_complete() {
            return Err(CircuitError::BudgetExhausted {
                budget: circuit.budget(),
            });
        }
        if circuit.contains_gate(&gate) {
            self.statistics.record_rejection(Rejection::RepeatedGate);
            return Err(Rejection::RepeatedGate.into());
        }

        let evaluations = self.statistics.increment(Counters::GateEvaluations);
        if evaluations % PROGRESS_INTERVAL == 0 {
            log::debug!(
                "{} gate evaluations, depth {}/{}",
                evaluations,
                circuit.depth(),
                circuit.budget()
            );
        }

        let mask = gate.evaluate(circuit.masks());
        let rejection = if mask.is_constant() {
            Some(Rejection::ConstantMask)
        } else if circuit.contains_mask(mask) {
            Some(Rejection::DuplicateMask)
        } else {
            None
        };
        if let Some(rejection) = rejection {
            self.statistics.record_rejection(rejection);
            return Err(rejection.into());
        }

        self.state.circuit.push(&mut self.trail, gate, mask)?;
        Ok(mask)
    }

    /// Append a gate chosen by the caller, e.g. a known circuit prefix.
    ///
    /// Checks that the gate only reads existing signals, then applies the
    /// same budget and pruning rules as the search.
    pub fn push_gate(&mut self, gate: Gate) -> Result<Mask, CircuitError> {
        let available = self.signal_count();
        if gate.max_input().as_usize() >= available {
            return Err(CircuitError::UndefinedSignal {
                signal: gate.max_input(),
                available,
            });
        }
        self.try_extend(gate)
    }

    /// Undo every trailed change made after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state);
    }

    /// Mask of a live signal.
    pub fn mask(&self, signal: SignalId) -> Mask {
        self.state.circuit.masks()[signal.as_usize()]
    }

    /// True if the selected signals realize the targets position for position.
    pub fn outputs_match(&self, outputs: [SignalId; NOUTPUTS]) -> bool {
        self.memo.truth_table.matches(outputs.map(|s| self.mask(s)))
    }

    /// Record the current circuit with the given outputs.
    ///
    /// Returns true if this discovery reached the cutoff.
    pub fn record_solution(&mut self, outputs: [SignalId; NOUTPUTS]) -> bool {
        let record = CircuitRecord::from_parts(self.state.circuit.gates(), outputs);
        self.statistics.increment(Counters::CircuitsFound);
        self.solutions.push(record);
        log::info!(
            "Found circuit {} with {} gates after {} evaluations",
            self.solutions.len(),
            self.depth(),
            self.statistics.evaluations()
        );
        if self.cutoff_reached() {
            self.cutoff_evaluations = Some(self.statistics.evaluations());
            log::debug!("Cutoff reached: {} circuits", self.solutions.len());
            true
        } else {
            false
        }
    }
}
