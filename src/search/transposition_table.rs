//! Transposition table keyed by Zobrist hash.
//!
//! Entries live in a `HashMap` and are only overwritten by an equal or deeper
//! search of the same key. The table is unbounded unless a capacity is given,
//! in which case it is cleared wholesale once it fills up.

use std::collections::HashMap;

use crate::search::board_scoring::MATE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
    capacity: Option<usize>,
    stats: TTStats,
}

impl TranspositionTable {
    /// Unbounded table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding at most `capacity` entries.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(1 << 20)),
            capacity: Some(capacity.max(1)),
            stats: TTStats::default(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.probes += 1;
        let hit = self.entries.get(&key).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Score usable at `depth` within `alpha..beta`, if the stored entry is at
    /// least that deep and its bound allows a cutoff. `ply` is the distance
    /// from the root, used to rebase mate scores.
    pub fn probe_cutoff(&mut self, key: u64, depth: u8, alpha: i32, beta: i32, ply: usize) -> Option<i32> {
        let entry = self.probe(key)?;
        if entry.depth < depth {
            return None;
        }

        let score = score_from_tt(entry.score, ply);
        match entry.bound {
            Bound::Exact => Some(score),
            Bound::Lower if score >= beta => Some(score),
            Bound::Upper if score <= alpha => Some(score),
            _ => None,
        }
    }

    pub fn store(&mut self, entry: TTEntry) {
        self.stats.stores += 1;

        if let Some(existing) = self.entries.get(&entry.key) {
            if entry.depth >= existing.depth {
                self.entries.insert(entry.key, entry);
            }
            return;
        }

        if self.capacity.is_some_and(|cap| self.entries.len() >= cap) {
            self.entries.clear();
        }
        self.entries.insert(entry.key, entry);
    }
}

/// Mate scores are stored relative to the node, not the root.
#[inline]
pub fn score_to_tt(score: i32, ply: usize) -> i32 {
    let ply = ply as i32;
    if score > MATE_THRESHOLD {
        score + ply
    } else if score < -MATE_THRESHOLD {
        score - ply
    } else {
        score
    }
}

#[inline]
pub fn score_from_tt(score: i32, ply: usize) -> i32 {
    let ply = ply as i32;
    if score > MATE_THRESHOLD {
        score - ply
    } else if score < -MATE_THRESHOLD {
        score + ply
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::{score_from_tt, score_to_tt, Bound, TTEntry, TranspositionTable};
    use crate::search::board_scoring::MATE_SCORE;

    #[test]
    fn store_and_probe_round_trip() {
        let mut tt = TranspositionTable::new();
        let entry = TTEntry {
            key: 123,
            depth: 5,
            score: 42,
            bound: Bound::Exact,
        };
        tt.store(entry);
        let got = tt.probe(123).expect("entry should exist");
        assert_eq!(got, entry);
        assert!(tt.probe(124).is_none());

        let stats = tt.stats();
        assert_eq!((stats.probes, stats.hits, stats.stores), (2, 1, 1));
    }

    #[test]
    fn depth_preferred_replacement() {
        let mut tt = TranspositionTable::new();
        let key = 555;
        tt.store(TTEntry {
            key,
            depth: 2,
            score: 1,
            bound: Bound::Upper,
        });
        tt.store(TTEntry {
            key,
            depth: 1,
            score: 9,
            bound: Bound::Exact,
        });
        assert_eq!(tt.probe(key).expect("exists").score, 1);
        tt.store(TTEntry {
            key,
            depth: 2,
            score: 3,
            bound: Bound::Lower,
        });
        let got = tt.probe(key).expect("exists");
        assert_eq!(got.depth, 2);
        assert_eq!(got.score, 3);
    }

    #[test]
    fn cutoffs_respect_depth_and_bound() {
        let mut tt = TranspositionTable::new();
        tt.store(TTEntry {
            key: 1,
            depth: 3,
            score: 80,
            bound: Bound::Lower,
        });
        // deeper request than stored
        assert_eq!(tt.probe_cutoff(1, 4, 0, 50, 0), None);
        // shallower request, score fails high
        assert_eq!(tt.probe_cutoff(1, 2, 0, 50, 0), Some(80));
        // lower bound inside the window proves nothing
        assert_eq!(tt.probe_cutoff(1, 3, 0, 100, 0), None);

        tt.store(TTEntry {
            key: 2,
            depth: 3,
            score: -20,
            bound: Bound::Upper,
        });
        assert_eq!(tt.probe_cutoff(2, 3, -10, 10, 0), Some(-20));
        assert_eq!(tt.probe_cutoff(2, 3, -30, 10, 0), None);
    }

    #[test]
    fn capacity_limit_clears_when_full() {
        let mut tt = TranspositionTable::with_capacity_limit(2);
        for key in 0..2 {
            tt.store(TTEntry {
                key,
                depth: 1,
                score: 0,
                bound: Bound::Exact,
            });
        }
        assert_eq!(tt.len(), 2);
        tt.store(TTEntry {
            key: 7,
            depth: 1,
            score: 0,
            bound: Bound::Exact,
        });
        assert_eq!(tt.len(), 1);
        assert!(tt.probe(7).is_some());
    }

    #[test]
    fn mate_scores_are_rebased_per_ply() {
        let mated_at_five = -MATE_SCORE + 5;
        let stored = score_to_tt(mated_at_five, 3);
        assert_eq!(stored, -MATE_SCORE + 2);
        assert_eq!(score_from_tt(stored, 3), mated_at_five);
        assert_eq!(score_from_tt(stored, 1), -MATE_SCORE + 3);
        assert_eq!(score_to_tt(120, 9), 120);
    }
}
