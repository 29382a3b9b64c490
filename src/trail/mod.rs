// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every change to trailed search state records the old value here. Rewinding
//! to a checkpoint hands the recorded values back, newest first, so state is
//! restored exactly on every backtrack. After a cutoff, `search::run_budget`
//! rewinds to the checkpoint taken before the search started.

pub mod trailed;

pub use trailed::{Trailed, TrailedRegistry};

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Unique identifier for the value being tracked
    id: usize,
    /// The old value before the change (stored as u64)
    old_value: u64,
}

/// State that can be restored from trail entries.
pub trait Restore {
    /// Put back `old_value` into the trailed value identified by `id`.
    fn restore(&mut self, id: usize, old_value: u64);
}

/// The trail of recorded changes.
///
/// Each `SearchContext` owns one trail. Checkpoints are plain trail lengths.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum trail size.
    ///
    /// A search changes the circuit depth once per level, so the trail never
    /// holds more than a budget's worth of entries.
    const MAX_SIZE: usize = 1024;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
        }
    }

    /// Record a state change (internal use only).
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub(crate) fn record_change(&mut self, id: usize, old_value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { id, old_value });
    }

    /// Undo every change recorded after `checkpoint`, newest first.
    pub fn rewind_to<R: Restore + ?Sized>(&mut self, checkpoint: usize, state: &mut R) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                state.restore(entry.id, entry.old_value);
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
