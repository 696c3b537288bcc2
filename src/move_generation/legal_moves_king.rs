use crate::game_state::chess_rules::{A1, A8, B1, B8, C1, C8, D1, D8, E1, E8, F1, F8, G1, G8, H1, H8};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::attack_tables::attack_tables;
use crate::moves::move_descriptions::{add_move, build_move, FLAG_CASTLING};

/// One castling option: required right, king and rook squares, squares that
/// must be empty, and the transit square that must not be attacked.
struct CastlingPath {
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    between: Bitboard,
    transit: Square,
}

const LIGHT_PATHS: [CastlingPath; 2] = [
    CastlingPath {
        right: CASTLE_LIGHT_KINGSIDE,
        king_from: E1,
        king_to: G1,
        rook_from: H1,
        between: square_bit(F1) | square_bit(G1),
        transit: F1,
    },
    CastlingPath {
        right: CASTLE_LIGHT_QUEENSIDE,
        king_from: E1,
        king_to: C1,
        rook_from: A1,
        between: square_bit(B1) | square_bit(C1) | square_bit(D1),
        transit: D1,
    },
];

const DARK_PATHS: [CastlingPath; 2] = [
    CastlingPath {
        right: CASTLE_DARK_KINGSIDE,
        king_from: E8,
        king_to: G8,
        rook_from: H8,
        between: square_bit(F8) | square_bit(G8),
        transit: F8,
    },
    CastlingPath {
        right: CASTLE_DARK_QUEENSIDE,
        king_from: E8,
        king_to: C8,
        rook_from: A8,
        between: square_bit(B8) | square_bit(C8) | square_bit(D8),
        transit: D8,
    },
];

pub fn generate_king_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let Some(from) = position.king_square(side) else {
        return;
    };

    let targets = attack_tables().king_attacks(from) & !position.occupancy_by_color[side.index()];
    push_target_moves(position, from, PieceKind::King, targets, out);

    generate_castling_moves(position, out);
}

/// The landing square is left to the legality filter like any other king
/// move; only the start and transit squares are checked here.
fn generate_castling_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let enemy = side.opposite();
    let paths = match side {
        Color::Light => &LIGHT_PATHS,
        Color::Dark => &DARK_PATHS,
    };
    let kings = position.bitboard(side, PieceKind::King);
    let rooks = position.bitboard(side, PieceKind::Rook);

    for path in paths {
        if position.castling_rights & path.right == 0
            || kings & square_bit(path.king_from) == 0
            || rooks & square_bit(path.rook_from) == 0
            || position.occupancy_all & path.between != 0
        {
            continue;
        }
        if is_square_attacked(position, path.king_from, enemy) || is_square_attacked(position, path.transit, enemy) {
            continue;
        }
        add_move(
            out,
            build_move(path.king_from, path.king_to, side, PieceKind::King, None, FLAG_CASTLING),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::move_to;

    fn castles(fen: &str) -> Vec<Square> {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let mut moves = Vec::new();
        generate_king_moves(&position, &mut moves);
        let mut targets: Vec<Square> = moves
            .into_iter()
            .filter(|&mv| mv & FLAG_CASTLING != 0)
            .map(move_to)
            .collect();
        targets.sort_unstable();
        targets
    }

    #[test]
    fn both_sides_available_on_clear_back_rank() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec![C1, G1]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec![C8, G8]);
    }

    #[test]
    fn no_castling_out_of_or_through_check() {
        // e-file rook gives check
        assert!(castles("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1").is_empty());
        // f-file rook covers f1
        assert_eq!(castles("r3k3/8/8/8/5r2/8/8/R3K2R w KQq - 0 1"), vec![C1]);
    }

    #[test]
    fn blocked_or_missing_rights_prevent_castling() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1"), Vec::<Square>::new());
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1"), vec![G1]);
    }

    #[test]
    fn attacked_b1_does_not_block_queenside() {
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"), vec![C1]);
    }
}
