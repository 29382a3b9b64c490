// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use crate::state::CircuitState;
use crate::trail::{Restore, TrailedRegistry};

use super::MemoizedData;

/// Mutable search state (Tier 2: DYNAMIC).
///
/// This data changes during search and every change is tracked on the trail.
/// Each SearchContext owns its own mutable state.
#[derive(Debug)]
pub struct DynamicState {
    /// The circuit under construction: gate sequence plus signal-mask table.
    pub circuit: CircuitState,
}

impl DynamicState {
    /// Create initial dynamic state for one budget attempt.
    pub fn new(memo: &MemoizedData, registry: &mut TrailedRegistry, budget: usize) -> Self {
        Self {
            circuit: CircuitState::new(registry, memo.truth_table.inputs(), budget),
        }
    }
}

impl Restore for DynamicState {
    fn restore(&mut self, id: usize, old_value: u64) {
        self.circuit.restore(id, old_value);
    }
}
