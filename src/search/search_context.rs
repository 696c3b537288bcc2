//! Per-search mutable state: killer and history tables, the triangular
//! principal-variation table, and counters.

use crate::game_state::chess_types::{Move, NO_MOVE};
use crate::moves::move_descriptions::{move_piece, move_to};

/// Deepest ply the search tables can address.
pub const MAX_PLY: usize = 64;

type HistoryTable = [[i32; 64]; 12];

#[derive(Debug, Clone)]
pub struct SearchContext {
    killers: [[Move; 2]; MAX_PLY],
    history: HistoryTable,
    pv_table: [[Move; MAX_PLY]; MAX_PLY],
    pv_length: [usize; MAX_PLY],
    pub ply: usize,
    pub nodes: u64,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self {
            killers: [[NO_MOVE; 2]; MAX_PLY],
            history: [[0; 64]; 12],
            pv_table: [[NO_MOVE; MAX_PLY]; MAX_PLY],
            pv_length: [0; MAX_PLY],
            ply: 0,
            nodes: 0,
        }
    }
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn killers_at(&self, ply: usize) -> [Move; 2] {
        self.killers.get(ply).copied().unwrap_or([NO_MOVE; 2])
    }

    /// Most recent killer goes first; a repeat of the first slot is ignored.
    pub fn record_killer(&mut self, ply: usize, mv: Move) {
        let Some(slots) = self.killers.get_mut(ply) else {
            return;
        };
        if slots[0] == mv {
            return;
        }
        slots[1] = slots[0];
        slots[0] = mv;
    }

    #[inline]
    pub fn history_score(&self, mv: Move) -> i32 {
        self.history[usize::from(move_piece(mv)) % 12][usize::from(move_to(mv))]
    }

    pub fn record_history(&mut self, mv: Move, depth: u8) {
        let entry = &mut self.history[usize::from(move_piece(mv)) % 12][usize::from(move_to(mv))];
        *entry = entry.saturating_add(i32::from(depth));
    }

    /// Start an empty line at the current ply.
    #[inline]
    pub fn clear_pv_at_ply(&mut self) {
        if let Some(len) = self.pv_length.get_mut(self.ply) {
            *len = self.ply;
        }
    }

    /// `mv` at the current ply, followed by the line found one ply deeper.
    pub fn update_pv(&mut self, mv: Move) {
        let ply = self.ply;
        if ply >= MAX_PLY {
            return;
        }

        self.pv_table[ply][ply] = mv;
        let child_len = if ply + 1 < MAX_PLY { self.pv_length[ply + 1] } else { ply + 1 };
        for next in (ply + 1)..child_len.min(MAX_PLY) {
            self.pv_table[ply][next] = self.pv_table[ply + 1][next];
        }
        self.pv_length[ply] = child_len.clamp(ply + 1, MAX_PLY);
    }

    /// Line found from the root in the last completed update.
    pub fn principal_variation(&self) -> Vec<Move> {
        self.pv_table[0][..self.pv_length[0]]
            .iter()
            .copied()
            .take_while(|&mv| mv != NO_MOVE)
            .collect()
    }
}
