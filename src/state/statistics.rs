// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented as the search runs.
//! They carry no correctness weight; they feed progress logging and reports.

use crate::circuit::Rejection;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Candidate gates whose mask was computed.
    GateEvaluations,
    /// Output triples compared against the targets.
    OutputSelections,
    CircuitsFound,
}

const COUNT: usize = Counters::COUNT + Rejection::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1, returning the new value.
    pub(crate) fn increment(&mut self, counter: Counters) -> u64 {
        self.stats[counter as usize] += 1;
        self.stats[counter as usize]
    }

    /// Count one pruned candidate.
    pub(crate) fn record_rejection(&mut self, rejection: Rejection) {
        self.stats[Counters::COUNT + rejection as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// How many candidates were pruned for `rejection`.
    pub fn rejections(&self, rejection: Rejection) -> u64 {
        self.stats[Counters::COUNT + rejection as usize]
    }

    /// Number of gate-evaluation attempts.
    pub fn evaluations(&self) -> u64 {
        self.get(Counters::GateEvaluations)
    }

    /// Add another run's counts into this one.
    pub fn absorb(&mut self, other: &Statistics) {
        for (total, value) in self.stats.iter_mut().zip(other.stats.iter()) {
            *total += value;
        }
    }
}
