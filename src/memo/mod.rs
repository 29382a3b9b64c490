// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (precomputed, read-only during search).
//!
//! - `truth_table`: input and target masks of the 2-bit adder
//! - `catalog`: candidate gates per available-signal count

pub mod catalog;
pub mod truth_table;

pub use catalog::GateCatalog;
pub use truth_table::TruthTable;
