//! The four operations an embedding layer drives the core with.
//!
//! Positions are passed by value-like references: each call works on its own
//! copy, so callers keep the previous position untouched.

use std::time::Duration;

use log::{error, warn};

use crate::errors::MoveRejected;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_legal_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::search::iterative_deepening::{SearchConfig, SearchEngine};
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// Read-only summary of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub side_to_move: Color,
    pub in_check: bool,
    pub outcome: Outcome,
}

#[inline]
pub fn new_game() -> Position {
    Position::new_game()
}

/// Play a coordinate move such as `e2e4` or `e7e8q` on a copy of `position`.
pub fn apply_user_move(position: &Position, move_text: &str) -> Result<Position, MoveRejected> {
    let mv = long_algebraic_to_move(position, move_text)?;

    let mut next = position.clone();
    match make_legal_move(&mut next, mv) {
        Ok(Some(_)) => Ok(next),
        Ok(None) => Err(MoveRejected::Illegal(move_text.to_owned())),
        Err(err) => {
            warn!("refusing {move_text}: {err}");
            Err(MoveRejected::Illegal(move_text.to_owned()))
        }
    }
}

/// Best move within roughly `time_budget` and at most `depth_budget` plies.
/// Returns `NO_MOVE` when the side to move has no legal move.
pub fn search_best_move(position: &Position, time_budget: Duration, depth_budget: u8) -> Move {
    let config = SearchConfig {
        max_depth: depth_budget.max(1),
        time_budget: Some(time_budget),
        ..SearchConfig::default()
    };

    match SearchEngine::new(config).search(position) {
        Ok(result) => result.best_move,
        Err(err) => {
            error!("search failed from {}: {err}", position.to_fen());
            NO_MOVE
        }
    }
}

pub fn status(position: &Position) -> GameStatus {
    let side_to_move = position.side_to_move;
    let in_check = is_in_check(position, side_to_move);

    let mut scratch = position.clone();
    let can_move = has_legal_move(&mut scratch).unwrap_or_else(|err| {
        warn!("move probe failed in {}: {err}", position.to_fen());
        true
    });

    let outcome = match (can_move, in_check) {
        (true, _) => Outcome::Ongoing,
        (false, true) => Outcome::Checkmate {
            winner: side_to_move.opposite(),
        },
        (false, false) => Outcome::Stalemate,
    };

    GameStatus {
        side_to_move,
        in_check,
        outcome,
    }
}
