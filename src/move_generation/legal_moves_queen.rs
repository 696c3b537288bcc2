use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::attack_tables::attack_tables;

pub fn generate_queen_moves(position: &Position, out: &mut Vec<Move>) {
    let tables = attack_tables();
    generate_piece_moves(
        position,
        PieceKind::Queen,
        |from, occupancy| tables.queen_attacks(from, occupancy),
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centralized_queen_on_open_board() {
        let position = Position::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_queen_moves(&position, &mut moves);
        assert_eq!(moves.len(), 27);
    }
}
