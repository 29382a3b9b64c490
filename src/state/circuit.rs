// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The circuit under construction.
//!
//! Gates and masks live in arenas sized for the budget. The only trailed
//! value is the depth (number of gates): slots at or above it are free, so
//! rewinding the depth is all a backtrack needs.

use crate::circuit::constants::NINPUTS;
use crate::circuit::{CircuitError, Gate, Mask};
use crate::trail::{Restore, Trail, Trailed, TrailedRegistry};

/// Gate sequence and signal-mask table for one budget attempt.
#[derive(Debug)]
pub struct CircuitState {
    budget: usize,
    /// Gates in creation order; entries at `depth..` are stale.
    gates: Vec<Gate>,
    /// One mask per signal slot, `NINPUTS + budget` long.
    masks: Vec<Mask>,
    depth: Trailed<usize>,
}

impl CircuitState {
    /// Empty circuit over the given primary input masks.
    pub fn new(registry: &mut TrailedRegistry, inputs: &[Mask; NINPUTS], budget: usize) -> Self {
        let mut masks = vec![Mask::ZERO; NINPUTS + budget];
        masks[..NINPUTS].copy_from_slice(inputs);
        Self {
            budget,
            gates: Vec::with_capacity(budget),
            masks,
            depth: registry.register(0),
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Number of gates currently in the circuit.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Number of live signals, primary inputs included.
    pub fn signal_count(&self) -> usize {
        NINPUTS + self.depth()
    }

    /// True when the circuit holds `budget` gates.
    pub fn is_complete(&self) -> bool {
        self.depth() == self.budget
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates[..self.depth()]
    }

    /// Masks of the live signals.
    pub fn masks(&self) -> &[Mask] {
        &self.masks[..self.signal_count()]
    }

    pub fn contains_gate(&self, gate: &Gate) -> bool {
        self.gates().contains(gate)
    }

    pub fn contains_mask(&self, mask: Mask) -> bool {
        self.masks().contains(&mask)
    }

    /// Append a gate and its mask. The depth change is recorded on `trail`.
    pub fn push(&mut self, trail: &mut Trail, gate: Gate, mask: Mask) -> Result<(), CircuitError> {
        let depth = self.depth();
        if depth >= self.budget {
            return Err(CircuitError::BudgetExhausted {
                budget: self.budget,
            });
        }
        self.gates.truncate(depth);
        self.gates.push(gate);
        self.masks[NINPUTS + depth] = mask;
        self.depth.set(trail, depth + 1);
        Ok(())
    }
}

impl Restore for CircuitState {
    fn restore(&mut self, id: usize, old_value: u64) {
        self.depth.restore_if(id, old_value);
    }
}
