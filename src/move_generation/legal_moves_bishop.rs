use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::attack_tables::attack_tables;

pub fn generate_bishop_moves(position: &Position, out: &mut Vec<Move>) {
    let tables = attack_tables();
    generate_piece_moves(
        position,
        PieceKind::Bishop,
        |from, occupancy| tables.bishop_attacks(from, occupancy),
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bishop_stops_at_blockers() {
        let position = Position::from_fen("4k3/8/8/8/8/4p3/8/2B1K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_bishop_moves(&position, &mut moves);
        // b2 a3 on one diagonal, d2 and the e3 capture on the other
        assert_eq!(moves.len(), 4);
    }
}
