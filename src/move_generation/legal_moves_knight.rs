use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::attack_tables::attack_tables;

pub fn generate_knight_moves(position: &Position, out: &mut Vec<Move>) {
    let tables = attack_tables();
    generate_piece_moves(position, PieceKind::Knight, |from, _| tables.knight_attacks(from), out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::is_capture;

    #[test]
    fn starting_knights_have_four_quiet_moves() {
        let mut moves = Vec::new();
        generate_knight_moves(&Position::new_game(), &mut moves);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|&mv| !is_capture(mv)));
    }

    #[test]
    fn knight_captures_are_flagged() {
        let position = Position::from_fen("4k3/8/8/3p4/8/4N3/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_knight_moves(&position, &mut moves);
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|&&mv| is_capture(mv)).count(), 1);
    }
}
