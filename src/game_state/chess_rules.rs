//! Canonical chess-rule constants.
//!
//! Starting position, castling geometry, and the per-square rights mask that
//! strips castling rights whenever a king or rook square is touched.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const A1: Square = 0;
pub const B1: Square = 1;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const B8: Square = 57;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

/// `castling_rights &= CASTLING_RIGHTS_MASK[from] & CASTLING_RIGHTS_MASK[to]`
/// after every move.
pub const CASTLING_RIGHTS_MASK: [CastlingRights; 64] = build_castling_rights_mask();

const fn build_castling_rights_mask() -> [CastlingRights; 64] {
    let mut table = [CASTLE_ALL; 64];
    table[A1 as usize] = CASTLE_ALL & !CASTLE_LIGHT_QUEENSIDE;
    table[E1 as usize] = CASTLE_ALL & !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
    table[H1 as usize] = CASTLE_ALL & !CASTLE_LIGHT_KINGSIDE;
    table[A8 as usize] = CASTLE_ALL & !CASTLE_DARK_QUEENSIDE;
    table[E8 as usize] = CASTLE_ALL & !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
    table[H8 as usize] = CASTLE_ALL & !CASTLE_DARK_KINGSIDE;
    table
}

/// Rook relocation for a castling king move, keyed by the king's target.
#[inline]
pub const fn castling_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        G1 => Some((H1, F1)),
        C1 => Some((A1, D1)),
        G8 => Some((H8, F8)),
        C8 => Some((A8, D8)),
        _ => None,
    }
}
