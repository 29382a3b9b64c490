// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gate catalog: every canonical candidate gate over the available signals.
//!
//! The same available-signal count recurs across every sibling branch at a
//! given depth, so candidate lists are generated once per count and reused.

use crate::circuit::{Gate, GateKind, SignalId};
use std::collections::HashMap;

/// Commutative kinds, in the order candidates are generated.
const COMMUTATIVE_KINDS: [GateKind; 3] = [GateKind::And, GateKind::Or, GateKind::Xor];

/// Memoized candidate lists keyed by available-signal count.
///
/// Lives for one budget attempt and is dropped with its `SearchContext`.
#[derive(Debug, Default)]
pub struct GateCatalog {
    by_signal_count: HashMap<usize, Vec<Gate>>,
}

impl GateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates over signals `0..available`, in generation order.
    pub fn candidates(&mut self, available: usize) -> &[Gate] {
        self.by_signal_count.entry(available).or_insert_with(|| {
            let gates = generate(available);
            log::debug!(
                "[GateCatalog] {} candidates over {} signals",
                gates.len(),
                available
            );
            gates
        })
    }

    /// Candidate `choice` over signals `0..available`.
    pub fn candidate(&mut self, available: usize, choice: usize) -> Gate {
        self.candidates(available)[choice]
    }

    /// Number of signal counts memoized so far.
    pub fn memoized_counts(&self) -> usize {
        self.by_signal_count.len()
    }
}

/// Generate the candidate list for `available` signals.
///
/// Order: one NOT per signal; then for each pair `i < j` the AND, OR and XOR
/// of that pair, each followed by the 3-input AND, OR and XOR of `(i, j, k)`
/// for every `k > j`.
pub fn generate(available: usize) -> Vec<Gate> {
    let mut gates = Vec::with_capacity(catalog_size(available));
    let signal = |i: usize| SignalId::new(i as u8);

    for i in 0..available {
        gates.push(Gate::not(signal(i)));
    }
    for i in 0..available {
        for j in i + 1..available {
            for kind in COMMUTATIVE_KINDS {
                gates.push(Gate::canonical(kind, &[signal(i), signal(j)]));
            }
            for k in j + 1..available {
                for kind in COMMUTATIVE_KINDS {
                    gates.push(Gate::canonical(kind, &[signal(i), signal(j), signal(k)]));
                }
            }
        }
    }
    gates
}

/// Number of candidates over `n` signals: n + 3·C(n,2) + 3·C(n,3).
pub fn catalog_size(n: usize) -> usize {
    let pairs = n * n.saturating_sub(1) / 2;
    let triples = n * n.saturating_sub(1) * n.saturating_sub(2) / 6;
    n + 3 * pairs + 3 * triples
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    fn s(i: u8) -> SignalId {
        SignalId::new(i)
    }

    #[test_case(4, 34)]
    #[test_case(5, 65)]
    #[test_case(9, 369)]
    fn test_catalog_size(available: usize, expected: usize) {
        assert_eq!(catalog_size(available), expected);
        assert_eq!(generate(available).len(), expected);
    }

    #[test]
    fn test_no_duplicates() {
        for available in 1..12 {
            let gates = generate(available);
            let unique: HashSet<Gate> = gates.iter().copied().collect();
            assert_eq!(unique.len(), gates.len(), "{} signals", available);
        }
    }

    #[test]
    fn test_only_references_available_signals() {
        let gates = generate(7);
        assert!(gates.iter().all(|g| g.max_input().as_usize() < 7));
    }

    #[test]
    fn test_generation_order() {
        let gates = generate(4);
        let expected_prefix = vec![
            Gate::not(s(0)),
            Gate::not(s(1)),
            Gate::not(s(2)),
            Gate::not(s(3)),
            Gate::new(GateKind::And, &[s(0), s(1)]).unwrap(),
            Gate::new(GateKind::Or, &[s(0), s(1)]).unwrap(),
            Gate::new(GateKind::Xor, &[s(0), s(1)]).unwrap(),
            Gate::new(GateKind::And, &[s(0), s(1), s(2)]).unwrap(),
            Gate::new(GateKind::Or, &[s(0), s(1), s(2)]).unwrap(),
            Gate::new(GateKind::Xor, &[s(0), s(1), s(2)]).unwrap(),
            Gate::new(GateKind::And, &[s(0), s(1), s(3)]).unwrap(),
        ];
        assert_eq!(&gates[..expected_prefix.len()], &expected_prefix[..]);
        assert_eq!(
            gates.last().copied(),
            Some(Gate::new(GateKind::Xor, &[s(2), s(3)]).unwrap())
        );
    }

    #[test]
    fn test_memoization() {
        let mut catalog = GateCatalog::new();
        assert_eq!(catalog.candidates(5).len(), 65);
        assert_eq!(catalog.candidates(5).len(), 65);
        assert_eq!(catalog.memoized_counts(), 1);
        assert_eq!(catalog.candidate(6, 0), Gate::not(s(0)));
        assert_eq!(catalog.memoized_counts(), 2);
    }
}
