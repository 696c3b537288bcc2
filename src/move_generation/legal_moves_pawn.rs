use crate::game_state::chess_types::*;
use crate::moves::attack_tables::attack_tables;
use crate::moves::move_descriptions::{
    add_move, build_move, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

pub fn generate_pawn_moves(position: &Position, out: &mut Vec<Move>) {
    let tables = attack_tables();
    let side = position.side_to_move;
    let enemy_occ = position.occupancy_by_color[side.opposite().index()];
    let empty = !position.occupancy_all;

    let (start_rank, promotion_rank) = match side {
        Color::Light => (1, 7),
        Color::Dark => (6, 0),
    };

    let mut pawns = position.bitboard(side, PieceKind::Pawn);
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        pawns &= pawns - 1;

        let Some(to) = forward(side, from) else {
            continue;
        };
        let promotes = rank_of(to) == promotion_rank;

        if empty & square_bit(to) != 0 {
            push_pawn_move(out, side, from, to, promotes, 0);

            if rank_of(from) == start_rank {
                if let Some(double) = forward(side, to) {
                    if empty & square_bit(double) != 0 {
                        add_move(
                            out,
                            build_move(from, double, side, PieceKind::Pawn, None, FLAG_DOUBLE_PAWN_PUSH),
                        );
                    }
                }
            }
        }

        let attacks = tables.pawn_attacks(side, from);
        let mut captures = attacks & enemy_occ;
        while captures != 0 {
            let target = captures.trailing_zeros() as Square;
            push_pawn_move(out, side, from, target, promotes, FLAG_CAPTURE);
            captures &= captures - 1;
        }

        if let Some(target) = position.en_passant_square {
            if attacks & square_bit(target) != 0 {
                add_move(
                    out,
                    build_move(from, target, side, PieceKind::Pawn, None, FLAG_CAPTURE | FLAG_EN_PASSANT),
                );
            }
        }
    }
}

#[inline]
fn forward(side: Color, from: Square) -> Option<Square> {
    match side {
        Color::Light if from < 56 => Some(from + 8),
        Color::Dark if from >= 8 => Some(from - 8),
        _ => None,
    }
}

#[inline]
fn push_pawn_move(out: &mut Vec<Move>, side: Color, from: Square, to: Square, promotes: bool, flags: u32) {
    if promotes {
        for piece in PieceKind::PROMOTIONS {
            add_move(out, build_move(from, to, side, PieceKind::Pawn, Some(piece), flags));
        }
    } else {
        add_move(out, build_move(from, to, side, PieceKind::Pawn, None, flags));
    }
}
