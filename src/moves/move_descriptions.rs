//! Packed move encoding.
//!
//! | bits   | field                              |
//! |--------|------------------------------------|
//! | 0-5    | source square                      |
//! | 6-11   | target square                      |
//! | 12-15  | moving piece id (`0..=11`)         |
//! | 16-19  | promoted piece id (`0` = none)     |
//! | 20     | capture                            |
//! | 21     | double pawn push                   |
//! | 22     | en passant                         |
//! | 23     | castling                           |
//!
//! The all-zero value is `NO_MOVE`; it would describe a1 to a1 and is never
//! generated.

use crate::game_state::chess_types::*;

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const PROMOTION_SHIFT: u32 = 16;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0xF;

pub const FLAG_CAPTURE: u32 = 1 << 20;
pub const FLAG_DOUBLE_PAWN_PUSH: u32 = 1 << 21;
pub const FLAG_EN_PASSANT: u32 = 1 << 22;
pub const FLAG_CASTLING: u32 = 1 << 23;

/// Decoded view of a packed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveFields {
    pub from: Square,
    pub to: Square,
    pub piece: PieceId,
    pub promoted: PieceId,
    pub capture: bool,
    pub double_push: bool,
    pub en_passant: bool,
    pub castling: bool,
}

#[inline]
pub fn pack_move_description(fields: MoveFields) -> Move {
    let mut out = 0u32;
    out |= (u32::from(fields.from) & SQUARE_MASK) << FROM_SHIFT;
    out |= (u32::from(fields.to) & SQUARE_MASK) << TO_SHIFT;
    out |= (u32::from(fields.piece) & PIECE_MASK) << PIECE_SHIFT;
    out |= (u32::from(fields.promoted) & PIECE_MASK) << PROMOTION_SHIFT;
    if fields.capture {
        out |= FLAG_CAPTURE;
    }
    if fields.double_push {
        out |= FLAG_DOUBLE_PAWN_PUSH;
    }
    if fields.en_passant {
        out |= FLAG_EN_PASSANT;
    }
    if fields.castling {
        out |= FLAG_CASTLING;
    }
    out
}

#[inline]
pub fn unpack_move_description(mv: Move) -> MoveFields {
    MoveFields {
        from: move_from(mv),
        to: move_to(mv),
        piece: move_piece(mv),
        promoted: move_promoted(mv),
        capture: is_capture(mv),
        double_push: mv & FLAG_DOUBLE_PAWN_PUSH != 0,
        en_passant: mv & FLAG_EN_PASSANT != 0,
        castling: mv & FLAG_CASTLING != 0,
    }
}

/// Shorthand used by the generators; `flags` is an OR of the `FLAG_*` bits.
#[inline]
pub fn build_move(
    from: Square,
    to: Square,
    color: Color,
    moved: PieceKind,
    promotion: Option<PieceKind>,
    flags: u32,
) -> Move {
    let promoted = promotion.map(|kind| piece_id(color, kind)).unwrap_or(0);
    (u32::from(from) << FROM_SHIFT)
        | (u32::from(to) << TO_SHIFT)
        | (u32::from(piece_id(color, moved)) << PIECE_SHIFT)
        | (u32::from(promoted) << PROMOTION_SHIFT)
        | flags
}

/// Append `mv` unless it is the sentinel or structurally ill-formed.
#[inline]
pub fn add_move(out: &mut Vec<Move>, mv: Move) {
    if mv != NO_MOVE && move_from(mv) != move_to(mv) {
        out.push(mv);
    }
}

#[inline]
pub fn move_from(mv: Move) -> Square {
    ((mv >> FROM_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_to(mv: Move) -> Square {
    ((mv >> TO_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_piece(mv: Move) -> PieceId {
    ((mv >> PIECE_SHIFT) & PIECE_MASK) as PieceId
}

#[inline]
pub fn move_promoted(mv: Move) -> PieceId {
    ((mv >> PROMOTION_SHIFT) & PIECE_MASK) as PieceId
}

#[inline]
pub fn move_piece_kind(mv: Move) -> Option<PieceKind> {
    piece_id_parts(move_piece(mv)).map(|(_, kind)| kind)
}

#[inline]
pub fn move_promotion_kind(mv: Move) -> Option<PieceKind> {
    match move_promoted(mv) {
        0 => None,
        id => piece_id_parts(id).map(|(_, kind)| kind),
    }
}

#[inline]
pub fn is_capture(mv: Move) -> bool {
    mv & FLAG_CAPTURE != 0
}

#[inline]
pub fn is_promotion(mv: Move) -> bool {
    move_promoted(mv) != 0
}

#[inline]
pub fn is_quiet(mv: Move) -> bool {
    !is_capture(mv) && !is_promotion(mv)
}
