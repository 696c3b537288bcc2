//! Positional bonus tables.
//!
//! Tables are laid out as seen from the light side with rank 8 on the first
//! row, so a light piece on square `sq` reads entry `sq ^ 56` and a dark piece
//! reads entry `sq` (its rank reflection).

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::search::game_phase::GamePhase;

#[rustfmt::skip]
const PAWN: [i32; 64] = [
    90,  90,  90,  90,  90,  90,  90,  90,
    30,  30,  30,  40,  40,  30,  30,  30,
    20,  20,  20,  30,  30,  30,  20,  20,
    10,  10,  10,  20,  20,  10,  10,  10,
     5,   5,  10,  20,  20,   5,   5,   5,
     0,   0,   0,   5,   5,   0,   0,   0,
     0,   0,   0, -10, -10,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,  10,  10,   0,   0,  -5,
    -5,   5,  20,  20,  20,  20,   5,  -5,
    -5,  10,  20,  30,  30,  20,  10,  -5,
    -5,  10,  20,  30,  30,  20,  10,  -5,
    -5,   5,  20,  10,  10,  20,   5,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5, -10,   0,   0,   0,   0, -10,  -5,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   0,  10,  10,   0,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,  10,   0,   0,   0,   0,  10,   0,
     0,  30,   0,   0,   0,   0,  30,   0,
     0,   0, -10,   0,   0, -10,   0,   0,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
    50,  50,  50,  50,  50,  50,  50,  50,
    50,  50,  50,  50,  50,  50,  50,  50,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,  10,  20,  20,  10,   0,   0,
     0,   0,   0,  20,  20,   0,   0,   0,
];

#[rustfmt::skip]
const ROOK_ENDGAME: [i32; 64] = [
    20,  20,  20,  30,  30,  20,  20,  20,
    20,  20,  20,  30,  30,  20,  20,  20,
    20,  20,  20,  30,  30,  20,  20,  20,
    20,  20,  20,  30,  30,  20,  20,  20,
    20,  20,  20,  30,  30,  20,  20,  20,
    20,  20,  20,  30,  30,  20,  20,  20,
    20,  20,  20,  30,  30,  20,  20,  20,
    20,  20,  20,  30,  30,  20,  20,  20,
];

#[rustfmt::skip]
const KING: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     0,   0,   5,   5,   5,   5,   0,   0,
     0,   5,   5,  10,  10,   5,   5,   0,
     0,   5,  10,  20,  20,  10,   5,   0,
     0,   5,  10,  20,  20,  10,   5,   0,
     0,   0,   5,  10,  10,   5,   0,   0,
     0,   5,   5,  -5,  -5,   0,   5,   0,
     0,   0,   5,   0, -15,   0,  10,   0,
];

#[rustfmt::skip]
const KING_ENDGAME: [i32; 64] = [
     0,   5,  10,  15,  15,  10,   5,   0,
     5,  10,  15,  20,  20,  15,  10,   5,
    10,  15,  20,  25,  25,  20,  15,  10,
    15,  20,  25,  30,  30,  25,  20,  15,
    15,  20,  25,  30,  30,  25,  20,  15,
    10,  15,  20,  25,  25,  20,  15,  10,
     5,  10,  15,  20,  20,  15,  10,   5,
     0,   5,  10,  15,  15,  10,   5,   0,
];

#[inline]
const fn table_index(color: Color, square: Square) -> usize {
    match color {
        Color::Light => (square ^ 56) as usize,
        Color::Dark => square as usize,
    }
}

/// Positional bonus for `kind` of `color` on `square`; queens have none.
#[inline]
pub fn piece_square_bonus(phase: GamePhase, color: Color, kind: PieceKind, square: Square) -> i32 {
    let rook_endgame = phase == GamePhase::KingRookVsKing;
    let table = match kind {
        PieceKind::Pawn => &PAWN,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook if rook_endgame => &ROOK_ENDGAME,
        PieceKind::Rook => &ROOK,
        PieceKind::King if rook_endgame => &KING_ENDGAME,
        PieceKind::King => &KING,
        PieceKind::Queen => return 0,
    };
    table[table_index(color, square)]
}
