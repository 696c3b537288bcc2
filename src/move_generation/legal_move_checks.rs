use log::warn;

use crate::game_state::chess_types::*;
use crate::moves::attack_tables::attack_tables;

/// True when any piece of `attacker_color` attacks `square`.
///
/// Used for check detection and for castling-path safety.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    let tables = attack_tables();
    let attackers = &position.pieces[attacker_color.index()];

    // A pawn of the attacking color hits `square` exactly when a defending
    // pawn on `square` would hit the attacker's square.
    if tables.pawn_attacks(attacker_color.opposite(), square) & attackers[PieceKind::Pawn.index()] != 0 {
        return true;
    }
    if tables.knight_attacks(square) & attackers[PieceKind::Knight.index()] != 0 {
        return true;
    }
    if tables.king_attacks(square) & attackers[PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = attackers[PieceKind::Queen.index()];
    let occupancy = position.occupancy_all;
    if tables.bishop_attacks(square, occupancy) & (attackers[PieceKind::Bishop.index()] | queens) != 0 {
        return true;
    }
    tables.rook_attacks(square, occupancy) & (attackers[PieceKind::Rook.index()] | queens) != 0
}

/// Whether `color`'s king is attacked.
///
/// A board without that king is reported as not in check after a warning.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    match position.king_square(color) {
        Some(king_sq) => is_square_attacked(position, king_sq, color.opposite()),
        None => {
            warn!("no {color:?} king on the board; treating it as not in check");
            false
        }
    }
}
