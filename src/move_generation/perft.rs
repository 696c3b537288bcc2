//! Perft node counting for move-generator validation.
//!
//! Walks the legal move tree with make/unmake on one owned position and
//! classifies each leaf move the way the usual perft tables do.

use crate::errors::PositionError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_legal_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, generate_pseudo_legal_moves, has_legal_move};
use crate::moves::move_descriptions::{is_capture, is_promotion, FLAG_CASTLING, FLAG_EN_PASSANT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Full leaf breakdown at `depth`. Slower than `perft_nodes` because every
/// leaf is tested for check and mate.
pub fn perft(position: &mut Position, depth: u8) -> Result<PerftCounts, PositionError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generate_pseudo_legal_moves(position) {
        let Some(undo) = make_legal_move(position, mv)? else {
            continue;
        };

        let below = if depth == 1 {
            classify_leaf(position, mv)
        } else {
            perft(position, depth - 1)
        };
        unmake_move(position, &undo);
        total.merge(below?);
    }

    Ok(total)
}

/// Leaf count only.
pub fn perft_nodes(position: &mut Position, depth: u8) -> Result<u64, PositionError> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0;
    for mv in generate_pseudo_legal_moves(position) {
        let Some(undo) = make_legal_move(position, mv)? else {
            continue;
        };
        let below = if depth == 1 { Ok(1) } else { perft_nodes(position, depth - 1) };
        unmake_move(position, &undo);
        nodes += below?;
    }

    Ok(nodes)
}

/// Leaf counts below each legal root move, in generation order.
pub fn perft_divide(position: &mut Position, depth: u8) -> Result<Vec<(Move, u64)>, PositionError> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in generate_legal_moves(position)? {
        let Some(undo) = make_legal_move(position, mv)? else {
            continue;
        };
        let nodes = perft_nodes(position, depth - 1);
        unmake_move(position, &undo);
        out.push((mv, nodes?));
    }

    Ok(out)
}

/// `position` is the state after `mv` was played.
fn classify_leaf(position: &mut Position, mv: Move) -> Result<PerftCounts, PositionError> {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if is_capture(mv) {
        counts.captures = 1;
    }
    if mv & FLAG_EN_PASSANT != 0 {
        counts.en_passant = 1;
    }
    if mv & FLAG_CASTLING != 0 {
        counts.castles = 1;
    }
    if is_promotion(mv) {
        counts.promotions = 1;
    }
    if is_in_check(position, position.side_to_move) {
        counts.checks = 1;
        if !has_legal_move(position)? {
            counts.checkmates = 1;
        }
    }

    Ok(counts)
}
