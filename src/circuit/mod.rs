// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circuit types.
//!
//! This module contains the value types the search is built from:
//! - SignalId: Index into the append-only signal sequence
//! - Mask: A signal's truth table, one bit per input row
//! - Gate: NOT/AND/OR/XOR over earlier signals, in canonical form
//! - CircuitRecord: A finished circuit with its chosen outputs

pub mod constants;
pub mod errors;
pub mod gate;
pub mod mask;
pub mod record;
pub mod signal;

// Re-export for convenience
pub use constants::*;
pub use errors::{CircuitError, Rejection};
pub use gate::{Gate, GateKind};
pub use mask::Mask;
pub use record::CircuitRecord;
pub use signal::SignalId;
