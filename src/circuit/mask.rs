// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row-packed truth tables.
//!
//! A `Mask` holds one signal's value for every row of the input enumeration at
//! once: bit `r` is the signal's value in row `r`. Evaluating a gate over all
//! rows is then a single word-level operation.
//!
//! # Examples
//!
//! ```
//! use adder_search::circuit::Mask;
//!
//! let a = Mask::from_bits(0xff00);
//! let b = Mask::from_bits(0xf0f0);
//!
//! assert_eq!((a & b).bits(), 0xf000);
//! assert_eq!((!a).bits(), 0x00ff);
//! assert!(a.row(15));
//! assert!(!a.row(0));
//! assert!((a ^ a).is_constant());
//! ```

use crate::circuit::constants::{FULL_MASK, NROWS};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A signal's values across all `NROWS` rows, packed into one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mask(u16);

impl Mask {
    /// Mask that is 0 in every row.
    pub const ZERO: Mask = Mask(0);

    /// Mask that is 1 in every row.
    pub const ONES: Mask = Mask(FULL_MASK);

    /// Create a mask from raw bits.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Build a mask by evaluating `f` on every row.
    pub fn from_rows(f: impl Fn(usize) -> bool) -> Self {
        let mut bits = 0u16;
        for row in 0..NROWS {
            if f(row) {
                bits |= 1 << row;
            }
        }
        Self(bits)
    }

    /// Get the raw bits.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Value of the signal in `row`.
    pub fn row(self, row: usize) -> bool {
        debug_assert!(row < NROWS, "Row out of range: {}", row);
        (self.0 >> row) & 1 != 0
    }

    /// True if the mask is all 0 or all 1.
    ///
    /// A gate with a constant mask carries no information about the inputs.
    pub fn is_constant(self) -> bool {
        self.0 == 0 || self.0 == FULL_MASK
    }

    /// Number of rows in which the signal is 1.
    pub fn count_ones(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Not for Mask {
    type Output = Mask;

    fn not(self) -> Mask {
        Mask(!self.0 & FULL_MASK)
    }
}

impl BitAnd for Mask {
    type Output = Mask;

    fn bitand(self, rhs: Mask) -> Mask {
        Mask(self.0 & rhs.0)
    }
}

impl BitOr for Mask {
    type Output = Mask;

    fn bitor(self, rhs: Mask) -> Mask {
        Mask(self.0 | rhs.0)
    }
}

impl BitXor for Mask {
    type Output = Mask;

    fn bitxor(self, rhs: Mask) -> Mask {
        Mask(self.0 ^ rhs.0)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_masks() {
        assert!(Mask::ZERO.is_constant());
        assert!(Mask::ONES.is_constant());
        assert!(!Mask::from_bits(0x0001).is_constant());
        assert!(!Mask::from_bits(0xfffe).is_constant());
    }

    #[test]
    fn test_from_rows() {
        let odd = Mask::from_rows(|row| row % 2 == 1);
        assert_eq!(odd.bits(), 0xaaaa);
        assert_eq!(odd.count_ones(), 8);
        assert!(odd.row(1));
        assert!(!odd.row(2));
    }

    #[test]
    fn test_complement_stays_in_width() {
        let m = Mask::from_bits(0x1234);
        assert_eq!(!!m, m);
        assert_eq!((m | !m), Mask::ONES);
        assert_eq!((m & !m), Mask::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mask::from_bits(0xec80).to_string(), "0xec80");
        assert_eq!(Mask::from_bits(0x000f).to_string(), "0x000f");
    }
}
