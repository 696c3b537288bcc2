use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::attack_tables::attack_tables;

pub fn generate_rook_moves(position: &Position, out: &mut Vec<Move>) {
    let tables = attack_tables();
    generate_piece_moves(
        position,
        PieceKind::Rook,
        |from, occupancy| tables.rook_attacks(from, occupancy),
        out,
    );
}
