// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).

use crate::memo::TruthTable;

/// Immutable precomputed data (Tier 1: MEMO).
///
/// Computed once per run and shared by the contexts of every budget attempt.
/// It is a handful of words, so each context simply holds a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoizedData {
    /// Input masks and target masks of the 2-bit adder
    pub truth_table: TruthTable,
}

impl MemoizedData {
    /// Initialize all MEMO data structures.
    pub fn new() -> Self {
        let truth_table = TruthTable::two_bit_adder();
        log::debug!(
            "[MemoizedData] inputs {:?} targets {:?}",
            truth_table.inputs().map(|m| m.to_string()),
            truth_table.targets().map(|m| m.to_string())
        );
        Self { truth_table }
    }
}

impl Default for MemoizedData {
    fn default() -> Self {
        Self::new()
    }
}
