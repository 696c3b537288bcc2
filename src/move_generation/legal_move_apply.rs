//! In-place move application with exact inverse.
//!
//! `make_move` validates the packed move against the board before touching
//! anything, so an `Err` leaves the position unchanged. The Zobrist key is
//! updated incrementally and always equals `compute_zobrist_key` afterwards.

use crate::errors::PositionError;
use crate::game_state::chess_rules::{castling_rook_squares, CASTLING_RIGHTS_MASK};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::move_descriptions::{
    move_from, move_piece, move_promoted, move_to, FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH,
    FLAG_EN_PASSANT,
};
use crate::search::zobrist::{castling_key, en_passant_term, piece_square_key, side_to_move_key};

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
fn en_passant_victim_square(mover: Color, to: Square) -> Square {
    match mover {
        Color::Light => to - 8,
        Color::Dark => to + 8,
    }
}

#[inline]
fn toggle(position: &mut Position, color: Color, kind: PieceKind, square: Square) -> u64 {
    position.pieces[color.index()][kind.index()] ^= square_bit(square);
    piece_square_key(color, kind, square)
}

/// Apply `mv` for the side to move without any legality check.
pub fn make_move(position: &mut Position, mv: Move) -> Result<UndoState, PositionError> {
    let from = move_from(mv);
    let to = move_to(mv);
    let mover = position.side_to_move;
    let enemy = mover.opposite();

    let encoded = move_piece(mv);
    let (encoded_color, moved_piece) =
        piece_id_parts(encoded).ok_or(PositionError::InvalidPieceId(encoded))?;
    let found = position
        .piece_kind_on(mover, from)
        .ok_or(PositionError::EmptySource(from))?;
    if encoded_color != mover || found != moved_piece {
        return Err(PositionError::PieceMismatch {
            square: from,
            encoded,
            found: piece_id(mover, found),
        });
    }

    let promoted_piece = match move_promoted(mv) {
        0 => None,
        id => Some(
            piece_id_parts(id)
                .map(|(_, kind)| kind)
                .ok_or(PositionError::InvalidPieceId(id))?,
        ),
    };

    let en_passant = mv & FLAG_EN_PASSANT != 0;
    let capture_square = if en_passant {
        en_passant_victim_square(mover, to)
    } else {
        to
    };
    let captured_piece = position.piece_kind_on(enemy, capture_square);

    let undo = UndoState {
        mv,
        moved_piece,
        promoted_piece,
        captured_piece,
        prev_castling_rights: position.castling_rights,
        prev_en_passant_square: position.en_passant_square,
        prev_halfmove_clock: position.halfmove_clock,
        prev_fullmove_number: position.fullmove_number,
        prev_zobrist_key: position.zobrist_key,
    };

    let mut key = position.zobrist_key ^ en_passant_term(position) ^ castling_key(position.castling_rights);

    key ^= toggle(position, mover, moved_piece, from);
    if let Some(captured) = captured_piece {
        key ^= toggle(position, enemy, captured, capture_square);
    }
    key ^= toggle(position, mover, promoted_piece.unwrap_or(moved_piece), to);

    if mv & FLAG_CASTLING != 0 {
        if let Some((rook_from, rook_to)) = castling_rook_squares(to) {
            key ^= toggle(position, mover, PieceKind::Rook, rook_from);
            key ^= toggle(position, mover, PieceKind::Rook, rook_to);
        }
    }

    position.castling_rights &= CASTLING_RIGHTS_MASK[from as usize] & CASTLING_RIGHTS_MASK[to as usize];
    position.en_passant_square = if mv & FLAG_DOUBLE_PAWN_PUSH != 0 {
        Some((from + to) / 2)
    } else {
        None
    };

    if moved_piece == PieceKind::Pawn || captured_piece.is_some() {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock = position.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Dark {
        position.fullmove_number = position.fullmove_number.saturating_add(1);
    }

    position.side_to_move = enemy;
    position.recalc_occupancy();

    key ^= side_to_move_key();
    key ^= castling_key(position.castling_rights);
    key ^= en_passant_term(position);
    position.zobrist_key = key;

    Ok(undo)
}

/// Restore the exact state that preceded the `make_move` producing `undo`.
pub fn unmake_move(position: &mut Position, undo: &UndoState) {
    let mv = undo.mv;
    let from = move_from(mv);
    let to = move_to(mv);
    let mover = position.side_to_move.opposite();
    let enemy = position.side_to_move;

    let placed = undo.promoted_piece.unwrap_or(undo.moved_piece);
    position.pieces[mover.index()][placed.index()] &= !square_bit(to);
    position.pieces[mover.index()][undo.moved_piece.index()] |= square_bit(from);

    if let Some(captured) = undo.captured_piece {
        let capture_square = if mv & FLAG_EN_PASSANT != 0 {
            en_passant_victim_square(mover, to)
        } else {
            to
        };
        position.pieces[enemy.index()][captured.index()] |= square_bit(capture_square);
    }

    if mv & FLAG_CASTLING != 0 {
        if let Some((rook_from, rook_to)) = castling_rook_squares(to) {
            let rooks = &mut position.pieces[mover.index()][PieceKind::Rook.index()];
            *rooks &= !square_bit(rook_to);
            *rooks |= square_bit(rook_from);
        }
    }

    position.side_to_move = mover;
    position.castling_rights = undo.prev_castling_rights;
    position.en_passant_square = undo.prev_en_passant_square;
    position.halfmove_clock = undo.prev_halfmove_clock;
    position.fullmove_number = undo.prev_fullmove_number;
    position.zobrist_key = undo.prev_zobrist_key;
    position.recalc_occupancy();
}

/// Make `mv`, keeping it only if the mover's king is safe afterwards.
///
/// Returns `Ok(None)` (with the position restored) for a move that leaves the
/// mover in check.
pub fn make_legal_move(position: &mut Position, mv: Move) -> Result<Option<UndoState>, PositionError> {
    let mover = position.side_to_move;
    let undo = make_move(position, mv)?;

    if is_in_check(position, mover) {
        unmake_move(position, &undo);
        return Ok(None);
    }

    Ok(Some(undo))
}
