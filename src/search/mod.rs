// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Budget iteration: the entry point of the circuit search.
//!
//! Each budget gets its own `SearchContext` and engine run. The loop stops at
//! the first budget that yields any circuit, so reported circuits are minimal
//! within the configured range.

pub mod config;

pub use config::{ConfigError, SearchConfig};

use crate::circuit::CircuitRecord;
use crate::context::{MemoizedData, SearchContext};
use crate::engine::EngineBuilder;
use crate::predicates::{GatePredicate, OutputPredicate};
use crate::state::Statistics;

/// Result of a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Circuits found, in discovery order. Empty if none were found.
    pub circuits: Vec<CircuitRecord>,

    /// The budget the circuits were found at.
    pub budget: Option<usize>,

    /// Counters summed over every budget attempted.
    pub statistics: Statistics,
}

impl SearchOutcome {
    /// Total gate evaluations across all budgets.
    pub fn evaluations(&self) -> u64 {
        self.statistics.evaluations()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }
}

/// Search the context's budget from its current depth.
///
/// Gates already pushed onto `ctx` are kept as a fixed prefix, and the circuit
/// is back at that prefix when this returns, whether the search was exhausted
/// or cut off. Returns true if the search stopped because the target count
/// was reached.
pub fn run_budget(ctx: &mut SearchContext) -> bool {
    let engine = EngineBuilder::new()
        .add(Box::new(GatePredicate))
        .terminal(Box::new(OutputPredicate))
        .build();

    let start = ctx.trail.len();
    match engine.search(ctx) {
        Some(engine) => {
            let (tries, retries) = engine.statistics();
            log::debug!("Engine suspended: {} tries, {} retries", tries, retries);
            ctx.rewind_to(start);
            true
        }
        None => false,
    }
}

/// Try each configured budget in turn until one yields circuits.
pub fn search_circuits(config: &SearchConfig) -> SearchOutcome {
    let memo = MemoizedData::new();
    let mut statistics = Statistics::new();

    for budget in config.budgets() {
        log::info!("Searching with {} gates", budget);
        let mut ctx = SearchContext::new(memo, budget, config.target_count());
        let cutoff = run_budget(&mut ctx);
        statistics.absorb(&ctx.statistics);
        log::info!(
            "Budget {}: {} circuits, {} evaluations{}",
            budget,
            ctx.solutions().len(),
            ctx.statistics.evaluations(),
            if cutoff { " (cutoff)" } else { "" }
        );

        if !ctx.solutions().is_empty() {
            return SearchOutcome {
                circuits: ctx.into_solutions(),
                budget: Some(budget),
                statistics,
            };
        }
    }

    log::info!(
        "No circuits found with budgets {:?} after {} evaluations",
        config.budgets(),
        statistics.evaluations()
    );
    SearchOutcome {
        circuits: Vec::new(),
        budget: None,
        statistics,
    }
}
