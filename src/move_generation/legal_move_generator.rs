//! Full move generation pipeline.
//!
//! Collects pseudo-legal moves piece by piece, then filters them through
//! make/unmake: the only legality oracle in the crate.

use crate::errors::PositionError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_legal_move, unmake_move};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::is_capture;

/// Every pseudo-legal move for the side to move.
pub fn generate_pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);

    generate_pawn_moves(position, &mut moves);
    generate_knight_moves(position, &mut moves);
    generate_bishop_moves(position, &mut moves);
    generate_rook_moves(position, &mut moves);
    generate_queen_moves(position, &mut moves);
    generate_king_moves(position, &mut moves);

    moves
}

/// Pseudo-legal captures (en passant and capture-promotions included).
pub fn generate_pseudo_legal_captures(position: &Position) -> Vec<Move> {
    let mut moves = generate_pseudo_legal_moves(position);
    moves.retain(|&mv| is_capture(mv));
    moves
}

/// Legal moves, in generation order. `position` is left unchanged.
pub fn generate_legal_moves(position: &mut Position) -> Result<Vec<Move>, PositionError> {
    let pseudo = generate_pseudo_legal_moves(position);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        if let Some(undo) = make_legal_move(position, mv)? {
            unmake_move(position, &undo);
            legal.push(mv);
        }
    }

    Ok(legal)
}

/// Number of legal replies for the side to move. `position` is left unchanged.
pub fn count_legal_moves(position: &mut Position) -> Result<usize, PositionError> {
    let mut count = 0;
    for mv in generate_pseudo_legal_moves(position) {
        if let Some(undo) = make_legal_move(position, mv)? {
            unmake_move(position, &undo);
            count += 1;
        }
    }
    Ok(count)
}

/// Stops at the first legal move found.
pub fn has_legal_move(position: &mut Position) -> Result<bool, PositionError> {
    for mv in generate_pseudo_legal_moves(position) {
        if let Some(undo) = make_legal_move(position, mv)? {
            unmake_move(position, &undo);
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_in_check;

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let mut position = Position::new_game();
        let before = position.clone();
        let moves = generate_legal_moves(&mut position).expect("generation should succeed");
        assert_eq!(moves.len(), 20);
        assert_eq!(position, before);
        assert_eq!(count_legal_moves(&mut position), Ok(20));
    }

    #[test]
    fn pinned_piece_moves_are_filtered() {
        // e2 knight is pinned by the e8 rook
        let mut position = Position::from_fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let pseudo = generate_pseudo_legal_moves(&position).len();
        let legal = generate_legal_moves(&mut position).expect("generation should succeed").len();
        assert_eq!(pseudo - legal, 6);
    }

    #[test]
    fn mated_and_stalemated_sides_have_no_moves() {
        let mut mated = Position::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(has_legal_move(&mut mated), Ok(false));
        assert!(is_in_check(&mated, Color::Dark));

        let mut stalemated = Position::from_fen("7k/8/6Q1/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert_eq!(has_legal_move(&mut stalemated), Ok(false));
        assert!(!is_in_check(&stalemated, Color::Dark));
    }

    #[test]
    fn captures_only_list() {
        let position = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(generate_pseudo_legal_captures(&position).len(), 1);
    }
}
