// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for minimal gate circuits implementing a 2-bit adder.
//!
//! Circuits are built from NOT gates and 2- or 3-input AND, OR and XOR
//! gates. The search tries gate budgets in increasing order and, within a
//! budget, enumerates every canonical gate sequence depth first, stopping
//! once enough circuits have been found.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that never changes during search:
//! - Input masks: one bit per row of the 16-row truth table
//! - Target masks for Sum1, Sum0 and Carry
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records state changes for O(1) backtracking
//! - Circuit - gate sequence and mask table, a preallocated arena whose
//!   live length (the depth) is the only trailed value
//!
//! # Search Algorithm
//!
//! Two predicates run on the backtracking engine:
//!
//! 1. **GatePredicate**: one round per gate, choosing from the gate catalog
//!    and pruning repeated gates, constant masks and duplicate masks
//! 2. **OutputPredicate**: at full budget, binds ascending signal triples to
//!    Sum1, Sum0 and Carry and records every match
//!
//! Evaluating a gate is one bitwise operation on 16-bit masks, covering all
//! input rows at once.
//!
//! # Example
//!
//! ```
//! use adder_search::search::{search_circuits, SearchConfig};
//!
//! let config = SearchConfig::new(1, 3, 3).unwrap();
//! let outcome = search_circuits(&config);
//! // Two gates are not enough for a 2-bit adder.
//! assert!(outcome.circuits.is_empty());
//! ```

pub mod circuit;
pub mod context;
pub mod engine;
pub mod memo;
pub mod predicates;
pub mod report;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use circuit::{CircuitError, CircuitRecord, Gate, GateKind, Mask, SignalId};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use search::{search_circuits, SearchConfig, SearchOutcome};
pub use trail::Trail;
