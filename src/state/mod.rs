// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, tracked on trail).
//!
//! - `circuit`: the gate sequence and signal-mask table being built
//! - `statistics`: counters for progress reporting
//!
//! All circuit modifications are tracked on the trail for O(1) backtracking.

pub mod circuit;
pub mod statistics;

pub use circuit::CircuitState;
pub use statistics::{Counters, Statistics};
