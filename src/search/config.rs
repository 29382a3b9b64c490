// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration and its validation.

use crate::circuit::constants::MAX_BUDGET;
use std::fmt;

/// Smallest gate budget tried by default.
pub const DEFAULT_MIN_BUDGET: usize = 6;

/// Exclusive upper bound on the gate budget by default.
pub const DEFAULT_MAX_BUDGET: usize = 10;

/// Circuits to find before the search stops.
pub const DEFAULT_TARGET_COUNT: usize = 3;

/// Budget range and cutoff for a search run.
///
/// Budgets `min_budget..max_budget` are tried in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    min_budget: usize,
    max_budget: usize,
    target_count: usize,
}

impl SearchConfig {
    /// Validated configuration.
    pub fn new(
        min_budget: usize,
        max_budget: usize,
        target_count: usize,
    ) -> Result<Self, ConfigError> {
        if min_budget >= max_budget {
            return Err(ConfigError::EmptyBudgetRange {
                min: min_budget,
                max: max_budget,
            });
        }
        // max_budget is exclusive, so MAX_BUDGET + 1 still fits the table.
        if max_budget > MAX_BUDGET + 1 {
            return Err(ConfigError::BudgetTooLarge {
                max: max_budget,
                limit: MAX_BUDGET + 1,
            });
        }
        if target_count == 0 {
            return Err(ConfigError::ZeroTargetCount);
        }
        Ok(Self {
            min_budget,
            max_budget,
            target_count,
        })
    }

    pub fn min_budget(&self) -> usize {
        self.min_budget
    }

    pub fn max_budget(&self) -> usize {
        self.max_budget
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Budgets to try, smallest first.
    pub fn budgets(&self) -> std::ops::Range<usize> {
        self.min_budget..self.max_budget
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_budget: DEFAULT_MIN_BUDGET,
            max_budget: DEFAULT_MAX_BUDGET,
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

/// Invalid search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No budget lies in `min..max`.
    EmptyBudgetRange { min: usize, max: usize },

    /// The exclusive maximum budget exceeds what the signal table holds.
    BudgetTooLarge { max: usize, limit: usize },

    /// The search would stop before finding anything.
    ZeroTargetCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBudgetRange { min, max } => {
                write!(f, "Empty budget range: min {} must be less than max {}", min, max)
            }
            ConfigError::BudgetTooLarge { max, limit } => {
                write!(f, "Maximum budget {} exceeds the limit of {}", max, limit)
            }
            ConfigError::ZeroTargetCount => write!(f, "Target circuit count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
